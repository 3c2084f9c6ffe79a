//! Validation utilities for harvest-history generation inputs

use chrono::{Days, NaiveDate};

use crate::error::{HarvestError, HarvestResult};
use crate::generator::HistoryOptions;
use crate::types::ShiftBaseRates;

// ============================================================================
// Generator Parameter Validations
// ============================================================================

/// Longest history window served by default, a year plus a leap day
pub const MAX_HISTORY_DAYS: u32 = 366;

/// Validate a requested history window; negative counts are rejected
pub fn validate_history_days(days: i64, max_days: u32) -> Result<u32, &'static str> {
    if days < 0 {
        return Err("Day count cannot be negative");
    }
    if days > i64::from(max_days) {
        return Err("Day count exceeds the allowed history window");
    }
    Ok(days as u32)
}

/// Validate that every day of a window ending at `start` is representable
pub fn validate_start_date(start: NaiveDate, days: u32) -> Result<(), &'static str> {
    let span = u64::from(days.saturating_sub(1));
    if start.checked_sub_days(Days::new(span)).is_none() {
        return Err("History window reaches before the earliest supported date");
    }
    Ok(())
}

/// Validate noise half-width (0 <= x < 1)
pub fn validate_noise_pct(noise_pct: f64) -> Result<(), &'static str> {
    if !noise_pct.is_finite() || !(0.0..1.0).contains(&noise_pct) {
        return Err("Noise percentage must be between 0 and 1");
    }
    Ok(())
}

/// Validate weekly seasonality amplitude (0 <= x < 1)
pub fn validate_seasonality_pct(seasonality_pct: f64) -> Result<(), &'static str> {
    if !seasonality_pct.is_finite() || !(0.0..1.0).contains(&seasonality_pct) {
        return Err("Seasonality percentage must be between 0 and 1");
    }
    Ok(())
}

/// Validate trend amplitude (0 <= x <= 1)
pub fn validate_amplitude(amplitude: f64) -> Result<(), &'static str> {
    if !amplitude.is_finite() || !(0.0..=1.0).contains(&amplitude) {
        return Err("Trend amplitude must be between 0 and 1");
    }
    Ok(())
}

/// Validate per-shift base densities are finite and non-negative
pub fn validate_base_rates(rates: &ShiftBaseRates) -> Result<(), &'static str> {
    for (_, rate) in rates.iter() {
        if !rate.is_finite() {
            return Err("Base density must be a finite number");
        }
        if rate < 0.0 {
            return Err("Base density cannot be negative");
        }
    }
    Ok(())
}

/// Validate section area in square meters
pub fn validate_area_m2(area_m2: f64) -> Result<(), &'static str> {
    if !area_m2.is_finite() || area_m2 <= 0.0 {
        return Err("Area must be greater than zero");
    }
    Ok(())
}

/// Check every option the history builder consumes
pub fn validate_history_options(options: &HistoryOptions) -> HarvestResult<()> {
    validate_noise_pct(options.noise_pct).map_err(|m| HarvestError::invalid("noisePct", m))?;
    validate_seasonality_pct(options.seasonality_pct)
        .map_err(|m| HarvestError::invalid("seasonalityPct", m))?;
    validate_amplitude(options.amplitude).map_err(|m| HarvestError::invalid("amplitude", m))?;
    if options.seed.is_empty() {
        return Err(HarvestError::invalid("seed", "Seed cannot be empty"));
    }
    Ok(())
}
