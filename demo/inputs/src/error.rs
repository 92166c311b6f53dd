//! Error types for catalog lookups.

use thiserror::Error;

/// Catalog error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Client identifier or name not in the roster
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    /// A client-keyed producer was invoked without a client
    #[error("Producer '{0}' requires a client identifier")]
    ClientRequired(&'static str),
}

impl CatalogError {
    /// Create a client not found error
    pub fn client_not_found(client: impl Into<String>) -> Self {
        Self::ClientNotFound(client.into())
    }
}
