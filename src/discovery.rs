//! Input file discovery and classification
//!
//! The external benchmark writes all of its CSV results into a single input
//! directory: one per-run data file per run, plus an optional depth-histogram
//! file whose name carries the `-depths` marker. This module partitions the
//! directory into those two groups.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name marker distinguishing depth-histogram files from run data.
pub const DEPTH_FILE_MARKER: &str = "-depths";

/// Errors that can occur while classifying input files
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Input directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Failed to list input directory: {0}")]
    DirectoryRead(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, DiscoveryError>;

/// Lists the per-run data files in the input directory
///
/// Every directory entry whose name does not contain the `-depths` marker is
/// treated as run data; there is no extension filtering. Paths are returned
/// sorted by file name.
///
/// # Arguments
/// * `input_dir` - Directory containing the benchmark's CSV output
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - Full paths of all run data files (possibly empty)
/// * `Err(DiscoveryError)` - If the directory is missing or unreadable
pub fn run_data_paths(input_dir: &Path) -> Result<Vec<PathBuf>> {
    classified_paths(input_dir, |name| !is_depth_file(name))
}

/// Lists the depth-histogram files in the input directory
///
/// The complement of [`run_data_paths`]: every entry whose name contains the
/// `-depths` marker. No entry is ever returned by both functions.
///
/// # Arguments
/// * `input_dir` - Directory containing the benchmark's CSV output
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - Full paths of all depth files (possibly empty)
/// * `Err(DiscoveryError)` - If the directory is missing or unreadable
pub fn depth_data_paths(input_dir: &Path) -> Result<Vec<PathBuf>> {
    classified_paths(input_dir, is_depth_file)
}

/// True if the file name marks a depth-histogram file
fn is_depth_file(name: &str) -> bool {
    name.contains(DEPTH_FILE_MARKER)
}

fn classified_paths(input_dir: &Path, matches: impl Fn(&str) -> bool) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(DiscoveryError::DirectoryNotFound(input_dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        if matches(&entry.file_name().to_string_lossy()) {
            paths.push(entry.path());
        }
    }

    // Directory listing order is platform dependent; sort for stable output.
    paths.sort();
    Ok(paths)
}
