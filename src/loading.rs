//! CSV loading for result files
//!
//! This module reads result files into [`Dataset`]s. A single file maps to
//! one dataset; the aggregate charts load the concatenation of every run data
//! file, which requires all files to agree on their column names.

use crate::common::Dataset;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading result files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },

    #[error(
        "Column set mismatch in {}: expected [{}], found [{}]",
        .path.display(),
        .expected.join(", "),
        .found.join(", ")
    )]
    SchemaMismatch {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

type Result<T> = core::result::Result<T, LoadError>;

/// Loads one CSV result file into a dataset
///
/// The first record is the header row; every cell is kept as text (see
/// [`Dataset`] for how numeric interpretation happens later).
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// * `Ok(Dataset)` - The loaded rows
/// * `Err(LoadError)` - If the file cannot be read or parsed
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    read_csv(path).map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads many CSV result files and concatenates their rows
///
/// Rows are appended in file-list order, then intra-file order, with no
/// deduplication. Every file must carry the same column name set as the
/// first; files whose columns agree as a set but differ in order are
/// accepted, with their rows re-mapped to the first file's column order.
///
/// # Arguments
/// * `paths` - Paths to concatenate, in order
///
/// # Returns
/// * `Ok(Dataset)` - All rows; empty (zero rows, zero columns) for an empty
///   path list
/// * `Err(LoadError)` - If a file cannot be read or its columns mismatch
pub fn load_concat(paths: &[PathBuf]) -> Result<Dataset> {
    let mut paths = paths.iter();
    let Some(first) = paths.next() else {
        return Ok(Dataset::default());
    };

    let mut combined = load_dataset(first)?;
    for path in paths {
        let dataset = load_dataset(path)?;
        append_rows(&mut combined, &dataset, path)?;
    }

    Ok(combined)
}

fn read_csv(path: &Path) -> core::result::Result<Dataset, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut dataset = Dataset::new(columns);
    for record in reader.records() {
        let record = record?;
        dataset.push_row(record.iter().map(str::to_string).collect());
    }

    Ok(dataset)
}

/// Appends `dataset`'s rows to `combined`, re-mapped to its column order
fn append_rows(combined: &mut Dataset, dataset: &Dataset, path: &Path) -> Result<()> {
    let mismatch = || LoadError::SchemaMismatch {
        path: path.to_path_buf(),
        expected: combined.columns().to_vec(),
        found: dataset.columns().to_vec(),
    };

    if dataset.columns().len() != combined.columns().len() {
        return Err(mismatch());
    }

    let mut mapping = Vec::with_capacity(combined.columns().len());
    for name in combined.columns() {
        match dataset.column_index(name) {
            Some(index) => mapping.push(index),
            None => return Err(mismatch()),
        }
    }

    for row in dataset.rows() {
        combined.push_row(mapping.iter().map(|&index| row[index].clone()).collect());
    }

    Ok(())
}
