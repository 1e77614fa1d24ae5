//! Per-run depth histogram charts
//!
//! Depth-histogram files record how many observations the benchmark saw at
//! each search depth; each file yields one scatter chart.

use crate::common::{charts, Dataset, DatasetError, PlotError};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while generating depth histogram charts
#[derive(Error, Debug)]
pub enum DepthPlotError {
    #[error("Depth data column error: {0}")]
    Column(#[from] DatasetError),

    #[error("Failed to generate plot: {0}")]
    PlotGeneration(#[from] PlotError),
}

type Result<T> = core::result::Result<T, DepthPlotError>;

/// Generates the depth histogram chart for one run
///
/// Plots `count` against `depth` as an unordered scatter chart, written as
/// `scatter-depth-count-{stem}.png`. Overwrite and zero-row semantics match
/// [`crate::analysis::generate_run_plots`].
///
/// # Arguments
/// * `dataset` - One run's depth histogram
/// * `stem` - Source file name without extension, used in the artifact name
/// * `output_dir` - Directory receiving the PNG artifact
pub fn generate_depth_plots(dataset: &Dataset, stem: &str, output_dir: &Path) -> Result<()> {
    if dataset.num_rows() == 0 {
        println!("No rows in depth data for {stem}, skipping depth chart");
        return Ok(());
    }

    let depths = dataset.column_f64("depth")?;
    let counts = dataset.column_f64("count")?;

    let points: Vec<(f64, f64)> = depths.into_iter().zip(counts).collect();
    charts::scatter_chart(
        &points,
        &format!("Observations per Depth ({stem})"),
        "depth",
        "count",
        &output_dir.join(format!("scatter-depth-count-{stem}.png")),
    )?;

    Ok(())
}
