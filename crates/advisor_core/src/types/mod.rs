//! Core value types shared by the catalog and the desk.

pub mod client;
pub mod dataset;
pub mod error;

pub use client::{Client, ClientId};
pub use dataset::{Dataset, RecordRef, Value};
pub use error::DatasetError;
