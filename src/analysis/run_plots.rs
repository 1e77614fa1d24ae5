//! Per-run relationship charts
//!
//! Each benchmark run records one observation per row. These charts show how
//! state exploration and search depth progress with run duration within a
//! single run.

use crate::common::{charts, Dataset, DatasetError, PlotError};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while generating per-run charts
#[derive(Error, Debug)]
pub enum RunPlotError {
    #[error("Run data column error: {0}")]
    Column(#[from] DatasetError),

    #[error("Failed to generate plot: {0}")]
    PlotGeneration(#[from] PlotError),
}

type Result<T> = core::result::Result<T, RunPlotError>;

/// Generates the two relationship charts for one run
///
/// Chart 1 plots `total_states` against `duration_ms`; chart 2 plots
/// `max_depth` against `duration_ms`. Both are line charts over the full row
/// set, written as `line-duration-states-{stem}.png` and
/// `line-duration-maxdepth-{stem}.png`. Existing artifacts with those names
/// are overwritten. A dataset with zero rows is skipped with a diagnostic.
///
/// # Arguments
/// * `dataset` - One run's observations
/// * `stem` - Source file name without extension, used in artifact names
/// * `output_dir` - Directory receiving the PNG artifacts
///
/// # Returns
/// * `Ok(())` - If both charts were written (or the dataset was empty)
/// * `Err(RunPlotError)` - If a column is missing, non-numeric, or a render
///   failed
pub fn generate_run_plots(dataset: &Dataset, stem: &str, output_dir: &Path) -> Result<()> {
    if dataset.num_rows() == 0 {
        println!("No rows in run data for {stem}, skipping per-run charts");
        return Ok(());
    }

    let durations = dataset.column_f64("duration_ms")?;
    let states = dataset.column_f64("total_states")?;
    let depths = dataset.column_f64("max_depth")?;

    let duration_states: Vec<(f64, f64)> = durations.iter().copied().zip(states).collect();
    charts::line_chart(
        &duration_states,
        &format!("Total States over Run Duration ({stem})"),
        "duration_ms",
        "total_states",
        &output_dir.join(format!("line-duration-states-{stem}.png")),
    )?;

    let duration_depths: Vec<(f64, f64)> = durations.into_iter().zip(depths).collect();
    charts::line_chart(
        &duration_depths,
        &format!("Max Depth over Run Duration ({stem})"),
        "duration_ms",
        "max_depth",
        &output_dir.join(format!("line-duration-maxdepth-{stem}.png")),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_dataset() -> Dataset {
        let mut dataset = Dataset::new(
            ["duration_ms", "total_states", "max_depth", "consistency"]
                .map(str::to_string)
                .to_vec(),
        );
        for (duration, states, depth) in [(1, 10, 2), (2, 20, 4), (3, 15, 3)] {
            dataset.push_row(vec![
                duration.to_string(),
                states.to_string(),
                depth.to_string(),
                "strong".to_string(),
            ]);
        }
        dataset
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let mut dataset = Dataset::new(vec!["duration_ms".to_string()]);
        dataset.push_row(vec!["1".to_string()]);

        let dir = tempfile::tempdir().unwrap();
        let result = generate_run_plots(&dataset, "a", dir.path());
        assert!(matches!(
            result,
            Err(RunPlotError::Column(DatasetError::MissingColumn(_)))
        ));
    }

    #[test]
    fn test_empty_dataset_writes_nothing() {
        let dataset = Dataset::new(vec!["duration_ms".to_string()]);
        let dir = tempfile::tempdir().unwrap();

        generate_run_plots(&dataset, "a", dir.path()).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_writes_exactly_two_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = run_dataset();

        generate_run_plots(&dataset, "run-1", dir.path()).unwrap();

        assert!(dir.path().join("line-duration-states-run-1.png").exists());
        assert!(dir.path().join("line-duration-maxdepth-run-1.png").exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);

        // Same stem again: overwritten, not duplicated.
        generate_run_plots(&dataset, "run-1", dir.path()).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }
}
