//! Pipeline orchestration
//!
//! Classifies the input directory, renders the per-run charts for every
//! result file, renders the aggregate comparisons over all run data, and
//! prints a summary of what was written. Processing is sequential and
//! fail-fast; the first error aborts the run.

use crate::analysis;
use crate::analysis::aggregate::AggregatePlotError;
use crate::analysis::depth_plots::DepthPlotError;
use crate::analysis::run_plots::RunPlotError;
use crate::common::summary::{format_summary_table, SummaryEntry};
use crate::discovery::{self, DiscoveryError};
use crate::loading::{self, LoadError};
use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Input and output locations for one pipeline run
///
/// Defaults match the conventional directory names used by the external
/// benchmark process; tests point both at temporary directories instead.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory containing the benchmark's CSV output
    pub input_dir: PathBuf,
    /// Directory receiving the chart artifacts (created if absent)
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("testout"),
            output_dir: PathBuf::from("plots"),
        }
    }
}

/// Errors that can occur during a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Loading error: {0}")]
    Load(#[from] LoadError),

    #[error("Failed to generate run charts for {file}: {source}")]
    RunPlot { file: String, source: RunPlotError },

    #[error("Failed to generate depth chart for {file}: {source}")]
    DepthPlot { file: String, source: DepthPlotError },

    #[error("Failed to generate aggregate charts: {0}")]
    AggregatePlot(#[from] AggregatePlotError),

    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

type Result<T> = core::result::Result<T, PipelineError>;

/// Runs the full pipeline against the configured directories
///
/// 1. Classifies the input directory into run data and depth data files.
/// 2. Creates the output directory if it is missing.
/// 3. Renders the per-run charts for every run data file.
/// 4. Renders the depth histogram chart for every depth data file.
/// 5. Renders the aggregate charts over the concatenation of all run data,
///    using the same file listing as step 3.
///
/// # Arguments
/// * `config` - Input and output directories
///
/// # Returns
/// * `Ok(())` - If every chart was written
/// * `Err(PipelineError)` - On the first failure; already-written artifacts
///   are left in place
pub fn run(config: &PipelineConfig) -> Result<()> {
    let run_paths = discovery::run_data_paths(&config.input_dir)?;
    let depth_paths = discovery::depth_data_paths(&config.input_dir)?;

    fs::create_dir_all(&config.output_dir).map_err(|source| PipelineError::OutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut entries = Vec::new();
    let bar = ProgressBar::new((run_paths.len() + depth_paths.len()) as u64);

    for path in &run_paths {
        bar.println(format!("Plotting {}", path.display()));
        let dataset = loading::load_dataset(path)?;
        let stem = file_stem(path);

        analysis::generate_run_plots(&dataset, &stem, &config.output_dir).map_err(|source| {
            PipelineError::RunPlot {
                file: file_name(path),
                source,
            }
        })?;

        let charts = if dataset.num_rows() == 0 { 0 } else { 2 };
        entries.push(SummaryEntry::new(
            file_name(path),
            "run",
            dataset.num_rows(),
            charts,
        ));
        bar.inc(1);
    }

    for path in &depth_paths {
        bar.println(format!("Plotting {}", path.display()));
        let dataset = loading::load_dataset(path)?;
        let stem = file_stem(path);

        analysis::generate_depth_plots(&dataset, &stem, &config.output_dir).map_err(|source| {
            PipelineError::DepthPlot {
                file: file_name(path),
                source,
            }
        })?;

        let charts = if dataset.num_rows() == 0 { 0 } else { 1 };
        entries.push(SummaryEntry::new(
            file_name(path),
            "depth",
            dataset.num_rows(),
            charts,
        ));
        bar.inc(1);
    }
    bar.finish_and_clear();

    println!("Plotting all run data");
    let combined = loading::load_concat(&run_paths)?;
    analysis::generate_aggregate_plots(&combined, &config.output_dir)?;

    println!(
        "{}",
        format_summary_table(&entries, Some("Result files processed"))
    );
    Ok(())
}

/// File name without extension, used to derive per-run artifact names
fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> PipelineConfig {
        PipelineConfig {
            input_dir: dir.join("testout"),
            output_dir: dir.join("plots"),
        }
    }

    #[test]
    fn test_missing_input_directory_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let result = run(&config);
        assert!(matches!(
            result,
            Err(PipelineError::Discovery(
                DiscoveryError::DirectoryNotFound(_)
            ))
        ));
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn test_empty_input_directory_succeeds_with_zero_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::create_dir(&config.input_dir).unwrap();

        run(&config).unwrap();

        assert!(config.output_dir.exists());
        assert_eq!(fs::read_dir(&config.output_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_file_stem_strips_extension() {
        assert_eq!(file_stem(Path::new("testout/run-1.csv")), "run-1");
        assert_eq!(
            file_stem(Path::new("testout/run-1-depths.csv")),
            "run-1-depths"
        );
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_full_pipeline_writes_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::create_dir(&config.input_dir).unwrap();

        fs::write(
            config.input_dir.join("run-1.csv"),
            "duration_ms,total_states,max_depth,consistency\n1,10,2,strong\n2,20,4,strong\n",
        )
        .unwrap();
        fs::write(
            config.input_dir.join("run-2.csv"),
            "duration_ms,total_states,max_depth,consistency\n1,12,3,eventual\n",
        )
        .unwrap();
        fs::write(
            config.input_dir.join("run-1-depths.csv"),
            "depth,count\n0,5\n1,3\n2,1\n",
        )
        .unwrap();

        run(&config).unwrap();

        let expected = [
            "line-duration-states-run-1.png",
            "line-duration-maxdepth-run-1.png",
            "line-duration-states-run-2.png",
            "line-duration-maxdepth-run-2.png",
            "scatter-depth-count-run-1-depths.png",
            "scatter-duration-states-consistency-all.png",
            "ecdf-states-consistency-all.png",
        ];
        for name in expected {
            assert!(config.output_dir.join(name).exists(), "missing {name}");
        }
        assert_eq!(
            fs::read_dir(&config.output_dir).unwrap().count(),
            expected.len()
        );
    }
}
