//! Domain models served by the backend
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
