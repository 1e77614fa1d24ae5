//! Aggregate comparison charts across all benchmark runs
//!
//! These charts operate on the concatenation of every run data file and
//! compare benchmark configurations against each other, with one visual
//! series per distinct `consistency` label.

use crate::common::{charts, Dataset, DatasetError, PlotError};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Artifact name for the duration/states scatter split by consistency
pub const SCATTER_ALL_FILE_NAME: &str = "scatter-duration-states-consistency-all.png";

/// Artifact name for the total-states cumulative distribution split by consistency
pub const ECDF_ALL_FILE_NAME: &str = "ecdf-states-consistency-all.png";

/// Errors that can occur while generating aggregate charts
#[derive(Error, Debug)]
pub enum AggregatePlotError {
    #[error("Aggregate data column error: {0}")]
    Column(#[from] DatasetError),

    #[error("Failed to generate plot: {0}")]
    PlotGeneration(#[from] PlotError),
}

type Result<T> = core::result::Result<T, AggregatePlotError>;

/// Generates the two aggregate comparison charts
///
/// Chart 1 is a scatter of `total_states` against `duration_ms` with one
/// colored series per distinct `consistency` label; chart 2 is the cumulative
/// distribution of `total_states`, one curve per label. Both artifact names
/// are fixed constants and always overwritten. A dataset with zero rows is
/// skipped with a diagnostic and no artifact is written.
///
/// Series are ordered by sorted label, so colors and legend entries are
/// stable across runs.
///
/// # Arguments
/// * `dataset` - The concatenation of all run data files
/// * `output_dir` - Directory receiving the PNG artifacts
///
/// # Returns
/// * `Ok(())` - If both charts were written (or the dataset was empty)
/// * `Err(AggregatePlotError)` - If a column is missing, non-numeric, or a
///   render failed
pub fn generate_aggregate_plots(dataset: &Dataset, output_dir: &Path) -> Result<()> {
    if dataset.num_rows() == 0 {
        println!("No run data rows found, skipping aggregate charts");
        return Ok(());
    }

    let durations = dataset.column_f64("duration_ms")?;
    let states = dataset.column_f64("total_states")?;
    let labels = dataset.column_text("consistency")?;

    let scatter_series = group_points(&labels, &durations, &states);
    charts::grouped_scatter_chart(
        &scatter_series,
        "Total States over Run Duration by Consistency",
        "duration_ms",
        "total_states",
        &output_dir.join(SCATTER_ALL_FILE_NAME),
    )?;

    let ecdf_series = cumulative_series(&labels, &states);
    charts::cumulative_chart(
        &ecdf_series,
        "Total States Distribution by Consistency",
        "total_states",
        &output_dir.join(ECDF_ALL_FILE_NAME),
    )?;

    Ok(())
}

/// Groups (x, y) points by their row's label, one series per distinct label
/// in sorted order
fn group_points(labels: &[String], xs: &[f64], ys: &[f64]) -> Vec<(String, Vec<(f64, f64)>)> {
    let mut series: BTreeMap<&str, Vec<(f64, f64)>> = BTreeMap::new();
    for ((label, &x), &y) in labels.iter().zip(xs).zip(ys) {
        series.entry(label).or_default().push((x, y));
    }

    series
        .into_iter()
        .map(|(label, points)| (label.to_string(), points))
        .collect()
}

/// Builds one cumulative distribution curve per distinct label, in sorted
/// label order
fn cumulative_series(labels: &[String], values: &[f64]) -> Vec<(String, Vec<(f64, f64)>)> {
    let mut grouped: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for (label, &value) in labels.iter().zip(values) {
        grouped.entry(label).or_default().push(value);
    }

    grouped
        .into_iter()
        .map(|(label, mut group)| {
            group.sort_by(f64::total_cmp);
            (label.to_string(), charts::cumulative_points(&group))
        })
        .collect()
}
