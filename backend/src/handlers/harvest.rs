//! Farmer section harvest HTTP handlers

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::models::{FarmerSectionHarvestRecord, HarvestSummary, HistoryPoint};
use crate::services::harvest::{GenerateHistoryInput, HarvestHistoryService, RecordFilter};
use crate::services::ReportingService;
use crate::AppState;

#[derive(Serialize)]
pub struct RecordListResponse {
    pub items: Vec<FarmerSectionHarvestRecord>,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryPoint>,
}

/// List farmer section harvest records
pub async fn list_harvest_records(
    State(state): State<AppState>,
    Query(filter): Query<RecordFilter>,
) -> Json<RecordListResponse> {
    let items = state.harvest.list_records(&filter);
    Json(RecordListResponse { items })
}

/// Get a single record
pub async fn get_harvest_record(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
) -> AppResult<Json<FarmerSectionHarvestRecord>> {
    let record = state.harvest.get_record(&record_id)?;
    Ok(Json(record))
}

/// Get summary statistics for a record
pub async fn get_harvest_summary(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
) -> AppResult<Json<HarvestSummary>> {
    let summary = state.harvest.get_summary(&record_id)?;
    Ok(Json(summary))
}

/// Export a record's history as CSV
pub async fn export_harvest_history_csv(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = state.harvest.get_record(&record_id)?;
    let csv = ReportingService::history_to_csv(&record.history)?;
    let disposition = format!("attachment; filename=\"{}_history.csv\"", record.id);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}

/// Generate a history from explicit parameters
pub async fn generate_harvest_history(
    State(state): State<AppState>,
    payload: Result<Json<GenerateHistoryInput>, JsonRejection>,
) -> AppResult<Json<HistoryResponse>> {
    let Json(input) = payload?;
    let history =
        HarvestHistoryService::generate_history(&input, state.config.harvest.max_history_days)?;
    Ok(Json(HistoryResponse { history }))
}
