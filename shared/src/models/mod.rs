//! Domain models for farmer section harvest tracking

mod harvest;
mod shift;
mod summary;

pub use harvest::*;
pub use shift::*;
pub use summary::*;
