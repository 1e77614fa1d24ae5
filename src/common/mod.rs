//! Common infrastructure modules shared across chart generation
//!
//! This module provides reusable infrastructure for:
//! - The in-memory tabular dataset with typed column access
//! - Chart rendering primitives built on [`plotters`]
//! - The run summary table printed at the end of a pipeline run

pub mod charts;
pub mod dataset;
pub mod summary;

// Re-export commonly used items
pub use charts::PlotError;
pub use dataset::{Dataset, DatasetError};
