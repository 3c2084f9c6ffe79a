//! Harvest history service serving demo records and ad hoc histories

use serde::Deserialize;
use shared::{
    build_history, fetch_farmer_section_harvest, parse_iso_date, validate_base_rates,
    validate_history_days, validate_history_options, validate_start_date,
    FarmerSectionHarvestRecord,
    HarvestSummary, HistoryOptions, HistoryPoint, ShiftBaseRates, TrendPattern,
};
use std::sync::Arc;

use crate::error::{AppError, AppResult};

/// Read-only access to the farmer section harvest dataset
#[derive(Clone)]
pub struct HarvestHistoryService {
    records: Arc<Vec<FarmerSectionHarvestRecord>>,
}

/// Optional filters for listing records
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFilter {
    pub item_id: Option<String>,
    pub section_id: Option<String>,
}

/// Input for generating a history from explicit parameters
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateHistoryInput {
    pub start_date: String,
    pub days: i64,
    #[serde(default)]
    pub per_shift_kg_per_m2: ShiftBaseRates,
    /// Unknown names fall back to a flat trend
    pub pattern: Option<TrendPattern>,
    pub noise_pct: Option<f64>,
    pub seasonality_pct: Option<f64>,
    pub seed: Option<String>,
    pub amplitude: Option<f64>,
}

impl GenerateHistoryInput {
    fn options(&self) -> HistoryOptions {
        let defaults = HistoryOptions::default();
        HistoryOptions {
            pattern: self.pattern.unwrap_or(defaults.pattern),
            noise_pct: self.noise_pct.unwrap_or(defaults.noise_pct),
            seasonality_pct: self.seasonality_pct.unwrap_or(defaults.seasonality_pct),
            seed: self.seed.clone().unwrap_or(defaults.seed),
            amplitude: self.amplitude.unwrap_or(defaults.amplitude),
        }
    }
}

impl HarvestHistoryService {
    pub fn new(records: Vec<FarmerSectionHarvestRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    /// Build the demo dataset once
    pub async fn load_demo() -> Self {
        let records = fetch_farmer_section_harvest().await;
        tracing::info!(records = records.len(), "Loaded farmer section harvest dataset");
        Self::new(records)
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// List records matching the filter, in dataset order
    pub fn list_records(&self, filter: &RecordFilter) -> Vec<FarmerSectionHarvestRecord> {
        self.records
            .iter()
            .filter(|r| filter.item_id.as_ref().map_or(true, |id| &r.item_id == id))
            .filter(|r| {
                filter
                    .section_id
                    .as_ref()
                    .map_or(true, |id| &r.section_id == id)
            })
            .cloned()
            .collect()
    }

    /// Get a record by id
    pub fn get_record(&self, record_id: &str) -> AppResult<FarmerSectionHarvestRecord> {
        self.records
            .iter()
            .find(|r| r.id == record_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Harvest record {}", record_id)))
    }

    /// Summarize a record's history
    pub fn get_summary(&self, record_id: &str) -> AppResult<HarvestSummary> {
        let record = self.get_record(record_id)?;
        Ok(HarvestSummary::from_record(&record))
    }

    /// Validate the input and build a history from it
    pub fn generate_history(
        input: &GenerateHistoryInput,
        max_days: u32,
    ) -> AppResult<Vec<HistoryPoint>> {
        let start = parse_iso_date(&input.start_date)?;
        let days = validate_history_days(input.days, max_days)
            .map_err(|m| AppError::validation("days", m))?;
        validate_start_date(start, days).map_err(|m| AppError::validation("startDate", m))?;
        validate_base_rates(&input.per_shift_kg_per_m2)
            .map_err(|m| AppError::validation("perShiftKgPerM2", m))?;

        let options = input.options();
        validate_history_options(&options)?;

        tracing::debug!(
            %start,
            days,
            pattern = %options.pattern,
            seed = %options.seed,
            "Generating harvest history"
        );

        Ok(build_history(start, days, &input.per_shift_kg_per_m2, &options))
    }
}
