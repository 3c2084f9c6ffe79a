//! Shared types and the harvest-history generator for the farm marketplace
//!
//! This crate is used by the backend service and, through WASM, by the
//! browser frontend so both render identical synthetic histories.

pub mod error;
pub mod generator;
pub mod models;
pub mod types;
pub mod validation;

pub use error::*;
pub use generator::*;
pub use models::*;
pub use types::*;
pub use validation::*;
