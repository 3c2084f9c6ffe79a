//! CSV export of harvest history

use serde::Serialize;
use shared::HistoryPoint;

use crate::error::{AppError, AppResult};

/// Header of the history export, written even when there are no rows
pub const HISTORY_CSV_HEADER: [&str; 3] = ["date", "shift", "harvested_kg_per_m2"];

/// One CSV row per history point
#[derive(Debug, Serialize)]
pub struct HistoryCsvRow {
    pub date: String,
    pub shift: &'static str,
    pub harvested_kg_per_m2: f64,
}

impl From<&HistoryPoint> for HistoryCsvRow {
    fn from(point: &HistoryPoint) -> Self {
        Self {
            date: point.date.to_string(),
            shift: point.shift.as_str(),
            harvested_kg_per_m2: point.harvested_kg_per_m2,
        }
    }
}

pub struct ReportingService;

impl ReportingService {
    /// Export history points as CSV, in history order
    pub fn history_to_csv(history: &[HistoryPoint]) -> AppResult<String> {
        let rows: Vec<HistoryCsvRow> = history.iter().map(HistoryCsvRow::from).collect();
        Self::export_to_csv(&HISTORY_CSV_HEADER, &rows)
    }

    /// Export report data as CSV under an explicit header row
    pub fn export_to_csv<T: Serialize>(header: &[&str], data: &[T]) -> AppResult<String> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);
        wtr.write_record(header)
            .map_err(|e| AppError::Internal(format!("CSV header error: {}", e)))?;
        for record in data {
            wtr.serialize(record)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::HarvestShift;

    #[test]
    fn test_history_to_csv() {
        let history = vec![
            HistoryPoint {
                date: NaiveDate::from_ymd_opt(2025, 9, 22).unwrap(),
                shift: HarvestShift::Morning,
                harvested_kg_per_m2: 0.412,
            },
            HistoryPoint {
                date: NaiveDate::from_ymd_opt(2025, 9, 22).unwrap(),
                shift: HarvestShift::Night,
                harvested_kg_per_m2: 0.0,
            },
        ];
        let csv = ReportingService::history_to_csv(&history).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "date,shift,harvested_kg_per_m2");
        assert_eq!(lines[1], "2025-09-22,morning,0.412");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_history_has_header_only() {
        let csv = ReportingService::history_to_csv(&[]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec!["date,shift,harvested_kg_per_m2"]);
    }
}
