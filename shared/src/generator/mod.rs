//! Deterministic synthetic harvest-history generator
//!
//! Leaves first: seeded noise stream, trend shapes, weekly seasonality, the
//! history builder and the demo dataset built on top of it.

mod dataset;
mod history;
mod rng;
mod seasonality;
mod trend;

pub use dataset::*;
pub use history::*;
pub use rng::*;
pub use seasonality::*;
pub use trend::*;
