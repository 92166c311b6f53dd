//! Client identity.
//!
//! A client's identity is its [`ClientId`]; name, score and assets are
//! values that stay fixed for the life of a session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable client identifier (e.g. `c101`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    /// Create a client identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ClientId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A private-banking client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Identity
    pub id: ClientId,
    /// Display name, also used as the group membership key
    pub name: String,
    /// Advisory priority in 0..=100
    pub priority_score: u8,
    /// Assets under management in USD
    pub aum_usd: f64,
}

impl Client {
    /// Create a client. Scores above 100 are capped.
    pub fn new(
        id: impl Into<ClientId>,
        name: impl Into<String>,
        priority_score: u8,
        aum_usd: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            priority_score: priority_score.min(100),
            aum_usd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_display() {
        let id = ClientId::from("c101");
        assert_eq!(id.to_string(), "c101");
        assert_eq!(id.as_str(), "c101");
    }

    #[test]
    fn test_priority_score_capped() {
        let client = Client::new("c999", "Test", 250, 1.0);
        assert_eq!(client.priority_score, 100);
    }
}
