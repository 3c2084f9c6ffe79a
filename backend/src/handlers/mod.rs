//! HTTP handlers

mod harvest;
mod health;

pub use harvest::*;
pub use health::*;
