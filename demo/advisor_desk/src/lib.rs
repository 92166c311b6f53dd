//! # PB Advisor Desk
//!
//! Group & layout management for the private-banking advisor dashboard.
//!
//! A [`DeskSession`](session::DeskSession) holds one advisor's client groups,
//! group selection and per-page widget layout. Pages are composed by pulling
//! each active widget's dataset from the `advisor_inputs` catalog and
//! restricting client datasets to the selected group.
//!
//! ## Modules
//!
//! - [`session`]: Session state, groups and layouts
//! - [`pages`]: Page and widget registry
//! - [`dashboard`]: Page composition and the client detail view
//! - [`proposal`]: Proposal drafting
//! - [`config`]: TOML configuration with environment overrides

pub mod config;
pub mod dashboard;
pub mod error;
pub mod pages;
pub mod proposal;
pub mod session;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, DeskConfig, GroupConfig};
    pub use crate::dashboard::{client_detail, compose_page, ClientDetail, PagePlan, Placement};
    pub use crate::error::DeskError;
    pub use crate::pages::{Page, WidgetId};
    pub use crate::proposal::{draft_proposal, proposal_targets, ProposalDraft};
    pub use crate::session::{DeskSession, Group, RESERVED_GROUP};
}
