//! Error types for the advisor desk.

use advisor_core::types::DatasetError;
use advisor_inputs::error::CatalogError;
use thiserror::Error;

/// Desk error type
///
/// `InvalidArgument` and `NotFound` are the caller-facing conditions; both
/// are recoverable and leave session state unchanged.
#[derive(Debug, Error)]
pub enum DeskError {
    /// Malformed or conflicting group/widget/page argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reference to a group, page or client that does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Dataset error
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeskError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Whether this is an `InvalidArgument` error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Whether this is a `NotFound` error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<CatalogError> for DeskError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ClientNotFound(_) => Self::NotFound(err.to_string()),
            CatalogError::ClientRequired(_) => Self::InvalidArgument(err.to_string()),
        }
    }
}

/// Result alias for desk operations
pub type Result<T> = std::result::Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeskError::invalid_argument("group name is empty");
        assert!(err.to_string().contains("group name is empty"));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_catalog_error_mapping() {
        let err: DeskError = CatalogError::client_not_found("c999").into();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("c999"));

        let err: DeskError = CatalogError::ClientRequired("risk_exposure").into();
        assert!(err.is_invalid_argument());
    }
}
