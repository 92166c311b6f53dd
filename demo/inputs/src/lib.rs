//! # Advisor Inputs
//!
//! Mock data catalog behind the PB Advisor Desk screens.
//!
//! Every producer is a stateless function returning a freshly built
//! [`Dataset`](advisor_core::types::Dataset). Client-keyed producers are
//! deterministic per client identifier; the others may draw fresh randomness
//! on every call.
//!
//! ## Modules
//!
//! - [`client_book`]: Client roster, priority list, cashflow and relationship lists
//! - [`portfolio`]: Per-client portfolio composition, risk exposure and insights
//! - [`market`]: Sector heatmap, book-level AUM, risk distribution, market movers
//! - [`investment_info`]: Investment Info page content (briefings, house view, ideas)
//! - [`catalog`]: Typed registry from [`ProducerId`](catalog::ProducerId) to producer

pub mod catalog;
pub mod client_book;
pub mod error;
pub mod investment_info;
pub mod market;
pub mod portfolio;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::catalog::{produce, produce_for_client, CatalogEntry, Producer, ProducerId};
    pub use crate::client_book::{find_client, find_client_by_name, roster, ReasonTag};
    pub use crate::error::CatalogError;
    pub use crate::portfolio::{DEFAULT_PORTFOLIO_NOTIONAL_USD, PortfolioGenerator};
}
