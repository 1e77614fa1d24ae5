//! In-memory tabular dataset loaded from result files
//!
//! Cells are stored as text exactly as read from disk. Numeric interpretation
//! happens through the typed accessors, so each chart declares which of its
//! columns are numeric and which are categorical labels. A `consistency`
//! column holding numeric-looking labels therefore stays categorical.

use thiserror::Error;

/// Errors from typed column access
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Required column is missing: {0}")]
    MissingColumn(String),

    #[error("Column {column} contains a non-numeric value: {value:?}")]
    NonNumeric { column: String, value: String },
}

type Result<T> = core::result::Result<T, DatasetError>;

/// An ordered sequence of rows over named columns
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Creates an empty dataset with the given column names
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Column names, in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows, each cell indexed by column position
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows (the header is not a row)
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Appends one row; the cell count must match the column count
    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Reads a column as floating point values
    ///
    /// # Arguments
    /// * `name` - Column name as it appears in the CSV header
    ///
    /// # Returns
    /// * `Ok(Vec<f64>)` - One value per row, in row order
    /// * `Err(DatasetError)` - If the column is absent or a cell fails to parse
    pub fn column_f64(&self, name: &str) -> Result<Vec<f64>> {
        let index = self
            .column_index(name)
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))?;

        self.rows
            .iter()
            .map(|row| {
                row[index]
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| DatasetError::NonNumeric {
                        column: name.to_string(),
                        value: row[index].clone(),
                    })
            })
            .collect()
    }

    /// Reads a column as text labels
    ///
    /// # Arguments
    /// * `name` - Column name as it appears in the CSV header
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - One label per row, in row order
    /// * `Err(DatasetError)` - If the column is absent
    pub fn column_text(&self, name: &str) -> Result<Vec<String>> {
        let index = self
            .column_index(name)
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))?;

        Ok(self.rows.iter().map(|row| row[index].clone()).collect())
    }
}
