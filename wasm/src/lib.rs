//! WebAssembly module for the farm section harvest generator
//!
//! Lets the browser frontend compute:
//! - Trend and weekly seasonality factors
//! - Synthetic per-shift harvest histories
//! - The demo farmer section dataset
//!
//! Output is identical to what the backend serves for the same inputs.
//! Unrecognized pattern names run as `flat` and also seed the noise stream as
//! `flat`, so they produce exactly the flat history for the same seed.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

use shared::{
    build_history, demo_farmer_section_harvest as build_demo_dataset, parse_iso_date,
    validate_base_rates, validate_history_days, validate_history_options, validate_start_date,
    HarvestError, HistoryOptions, TrendPattern, MAX_HISTORY_DAYS,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"farm-section-harvest generator ready".into());
}

/// Trend factor for day `idx` of `n` under the named pattern
#[wasm_bindgen]
pub fn trend_factor(pattern: &str, idx: f64, n: usize, amplitude: f64) -> f64 {
    shared::trend_factor(TrendPattern::from_name(pattern), idx, n, amplitude)
}

/// Weekly seasonality factor for a `yyyy-mm-dd` date; NaN if the date is invalid
#[wasm_bindgen]
pub fn weekly_seasonality_factor(date: &str, amplitude: f64) -> f64 {
    shared::weekly_seasonality_factor_str(date, amplitude).unwrap_or(f64::NAN)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuildHistoryRequest {
    start_date: String,
    days: i64,
    #[serde(default)]
    per_shift_kg_per_m2: ShiftBaseRates,
    #[serde(default)]
    options: HistoryOptions,
}

fn build_history_json(request_json: &str) -> Result<String, String> {
    let request: BuildHistoryRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid request JSON: {}", e))?;
    let start = parse_iso_date(&request.start_date).map_err(|e| e.to_string())?;
    let days = validate_history_days(request.days, MAX_HISTORY_DAYS)
        .map_err(|m| HarvestError::invalid("days", m).to_string())?;
    validate_start_date(start, days)
        .map_err(|m| HarvestError::invalid("startDate", m).to_string())?;
    validate_base_rates(&request.per_shift_kg_per_m2)
        .map_err(|m| HarvestError::invalid("perShiftKgPerM2", m).to_string())?;
    validate_history_options(&request.options).map_err(|e| e.to_string())?;

    let history = build_history(
        start,
        days,
        &request.per_shift_kg_per_m2,
        &request.options,
    );
    serde_json::to_string(&history).map_err(|e| e.to_string())
}

/// Build a harvest history from a JSON request, returning the points as JSON
#[wasm_bindgen]
pub fn build_harvest_history(request_json: &str) -> Result<String, JsValue> {
    build_history_json(request_json).map_err(|e| JsValue::from_str(&e))
}

/// The demo farmer section dataset as JSON
#[wasm_bindgen]
pub fn demo_farmer_section_harvest() -> String {
    serde_json::to_string(&build_demo_dataset()).unwrap_or_else(|_| "[]".to_string())
}
