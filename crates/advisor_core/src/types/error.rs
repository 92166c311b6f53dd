//! Error types for dataset construction and export.

use thiserror::Error;

/// Errors raised while building, querying or exporting a [`Dataset`](super::Dataset).
///
/// # Examples
/// ```
/// use advisor_core::types::DatasetError;
///
/// let err = DatasetError::UnknownColumn("Drift".to_string());
/// assert_eq!(format!("{}", err), "Unknown column: Drift");
/// ```
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A row did not carry one value per column
    #[error("Row has {actual} values but the dataset has {expected} columns")]
    ColumnCountMismatch {
        /// Number of columns in the dataset
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// Column name not present in the dataset
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// CSV serialisation failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DatasetError {
    /// Create an unknown column error
    pub fn unknown_column(name: impl Into<String>) -> Self {
        Self::UnknownColumn(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count_display() {
        let err = DatasetError::ColumnCountMismatch {
            expected: 3,
            actual: 2,
        };
        assert!(err.to_string().contains("2 values"));
        assert!(err.to_string().contains("3 columns"));
    }
}
