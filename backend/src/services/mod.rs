//! Business logic services for the farm section harvest service

pub mod harvest;
pub mod reporting;

pub use harvest::HarvestHistoryService;
pub use reporting::ReportingService;
