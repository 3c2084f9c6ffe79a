//! Weekly seasonality keyed on ISO day-of-week

use chrono::{Datelike, NaiveDate};
use std::f64::consts::PI;

use crate::error::{HarvestError, HarvestResult};

/// Default amplitude of the weekly oscillation
pub const DEFAULT_SEASONALITY_AMPLITUDE: f64 = 0.05;

/// ISO calendar date format used on the wire
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-mm-dd` date
pub fn parse_iso_date(value: &str) -> HarvestResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT)
        .map_err(|_| HarvestError::InvalidDate(value.to_string()))
}

/// Factor `1 + amplitude * sin(2π * dow / 7)` where Monday is 1 and Sunday is 7
pub fn weekly_seasonality_factor(date: NaiveDate, amplitude: f64) -> f64 {
    let dow = f64::from(date.weekday().number_from_monday());
    let phase = 2.0 * PI * dow / 7.0;
    1.0 + amplitude * phase.sin()
}

/// Same as [`weekly_seasonality_factor`] for an ISO date string
pub fn weekly_seasonality_factor_str(date: &str, amplitude: f64) -> HarvestResult<f64> {
    parse_iso_date(date).map(|d| weekly_seasonality_factor(d, amplitude))
}
