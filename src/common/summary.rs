//! Run summary table printed at the end of a pipeline run
//!
//! One row per processed result file, formatted as an ASCII table using the
//! [`tabled`] crate.

use tabled::{Table, Tabled};

/// Summary row for one processed result file
#[derive(Debug, Clone, Tabled)]
pub struct SummaryEntry {
    /// Source file name
    #[tabled(rename = "File")]
    pub file: String,
    /// Result file kind ("run" or "depth")
    #[tabled(rename = "Kind")]
    pub kind: String,
    /// Number of data rows loaded
    #[tabled(rename = "Rows")]
    pub rows: usize,
    /// Number of chart artifacts written
    #[tabled(rename = "Charts")]
    pub charts: usize,
}

impl SummaryEntry {
    /// Creates a new summary entry
    pub fn new(file: String, kind: &str, rows: usize, charts: usize) -> Self {
        Self {
            file,
            kind: kind.to_string(),
            rows,
            charts,
        }
    }
}

/// Formats summary entries as an ASCII table
///
/// # Arguments
/// * `entries` - A slice of [`SummaryEntry`] to format
/// * `title` - Optional title for the table
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_summary_table(entries: &[SummaryEntry], title: Option<&str>) -> String {
    if entries.is_empty() {
        return "No result files processed".to_string();
    }

    let table = Table::new(entries).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summary_table() {
        let entries = vec![
            SummaryEntry::new("a.csv".to_string(), "run", 12, 2),
            SummaryEntry::new("a-depths.csv".to_string(), "depth", 4, 1),
        ];

        let table = format_summary_table(&entries, Some("Result files processed"));
        assert!(table.contains("Result files processed"));
        assert!(table.contains("File"));
        assert!(table.contains("Kind"));
        assert!(table.contains("a.csv"));
        assert!(table.contains("depth"));

        // Test without title
        let table_no_title = format_summary_table(&entries, None);
        assert!(!table_no_title.contains("Result files processed"));
        assert!(table_no_title.contains("a-depths.csv"));
    }

    #[test]
    fn test_format_summary_table_empty() {
        let table = format_summary_table(&[], Some("Result files processed"));
        assert_eq!(table, "No result files processed");
    }
}
