//! # advisor_core: Foundation Types for the PB Advisor Desk
//!
//! ## Foundation Layer Role
//!
//! advisor_core is the bottom layer of the desk workspace, providing:
//! - The tabular exchange format: `Dataset`, `Value` (`types::dataset`)
//! - Client identity: `ClientId`, `Client` (`types::client`)
//! - Per-client reproducible randomness: `ClientRng` (`rng`)
//! - Allocation clamping and renormalisation (`allocation`)
//! - Error types: `DatasetError` (`types::error`)
//!
//! It has no dependency on other workspace members.
//!
//! ## Usage Examples
//!
//! ```rust
//! use advisor_core::types::{Dataset, Value};
//!
//! let mut ds = Dataset::new(["Asset Class", "AUM (M)"]);
//! ds.push_row(vec![Value::from("Equities"), Value::from(450_i64)]).unwrap();
//! assert_eq!(ds.len(), 1);
//! assert_eq!(ds.value(0, "AUM (M)"), Some(&Value::Int(450)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod allocation;
pub mod rng;
pub mod types;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::allocation::clamp_and_normalise;
    pub use crate::rng::{client_seed, ClientRng};
    pub use crate::types::{Client, ClientId, Dataset, DatasetError, Value};
}
