//! Derived statistics over a record's harvest history

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{FarmerSectionHarvestRecord, HarvestShift};
use crate::generator::round3;
use crate::types::DateRange;

/// Average density for one shift
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShiftAverage {
    pub shift: HarvestShift,
    #[serde(rename = "avgKgPerM2")]
    pub avg_kg_per_m2: f64,
}

/// Summary of a record used by forecast widgets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HarvestSummary {
    pub record_id: String,
    pub days: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<DateRange>,
    pub shift_averages: Vec<ShiftAverage>,
    /// Sum of all shifts, averaged over days
    #[serde(rename = "dailyAvgKgPerM2")]
    pub daily_avg_kg_per_m2: f64,
    /// `daily_avg_kg_per_m2 × area_m2`
    pub estimated_daily_kg: f64,
    /// Used when the record has no history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_estimate_kg: Option<f64>,
}

impl HarvestSummary {
    pub fn from_record(record: &FarmerSectionHarvestRecord) -> Self {
        let dates: BTreeSet<_> = record.history.iter().map(|p| p.date).collect();
        let days = dates.len();
        let range = match (dates.first(), dates.last()) {
            (Some(&start), Some(&end)) => Some(DateRange { start, end }),
            _ => None,
        };

        let shift_averages = HarvestShift::ALL
            .into_iter()
            .filter_map(|shift| {
                let values: Vec<f64> = record
                    .history
                    .iter()
                    .filter(|p| p.shift == shift)
                    .map(|p| p.harvested_kg_per_m2)
                    .collect();
                if values.is_empty() {
                    return None;
                }
                let avg = values.iter().sum::<f64>() / values.len() as f64;
                Some(ShiftAverage {
                    shift,
                    avg_kg_per_m2: round3(avg),
                })
            })
            .collect();

        let daily_avg = if days == 0 {
            0.0
        } else {
            record
                .history
                .iter()
                .map(|p| p.harvested_kg_per_m2)
                .sum::<f64>()
                / days as f64
        };

        let fallback_estimate_kg = if record.has_history() {
            None
        } else {
            fallback_estimate_kg(record)
        };

        Self {
            record_id: record.id.clone(),
            days,
            range,
            shift_averages,
            daily_avg_kg_per_m2: round3(daily_avg),
            estimated_daily_kg: round3(daily_avg * record.area_m2),
            fallback_estimate_kg,
        }
    }
}

/// Estimated harvest when no history is available.
///
/// Prefers the explicit expectation, then planted amount × fruiting rate.
pub fn fallback_estimate_kg(record: &FarmerSectionHarvestRecord) -> Option<f64> {
    record.expected_harvest_kg.or_else(|| {
        match (record.planted_amount, record.expected_fruiting_per_plant) {
            (Some(planted), Some(rate)) => Some(planted * rate),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HistoryPoint;
    use chrono::NaiveDate;

    fn record(history: Vec<HistoryPoint>) -> FarmerSectionHarvestRecord {
        FarmerSectionHarvestRecord {
            id: "r1".to_string(),
            farmer_id: None,
            section_id: "s1".to_string(),
            logistic_center_id: None,
            item_id: "i1".to_string(),
            item_name: "Tomato".to_string(),
            area_m2: 100.0,
            history,
            expected_harvest_kg: None,
            planted_amount: Some(50.0),
            expected_fruiting_per_plant: Some(2.0),
        }
    }

    fn point(day: u32, shift: HarvestShift, value: f64) -> HistoryPoint {
        HistoryPoint {
            date: NaiveDate::from_ymd_opt(2025, 9, day).unwrap(),
            shift,
            harvested_kg_per_m2: value,
        }
    }

    #[test]
    fn test_averages() {
        let r = record(vec![
            point(22, HarvestShift::Morning, 0.4),
            point(22, HarvestShift::Night, 0.1),
            point(21, HarvestShift::Morning, 0.2),
            point(21, HarvestShift::Night, 0.1),
        ]);
        let summary = HarvestSummary::from_record(&r);
        assert_eq!(summary.days, 2);
        assert_eq!(summary.shift_averages.len(), 2);
        assert_eq!(summary.shift_averages[0].shift, HarvestShift::Morning);
        assert_eq!(summary.shift_averages[0].avg_kg_per_m2, 0.3);
        assert_eq!(summary.daily_avg_kg_per_m2, 0.4);
        assert_eq!(summary.estimated_daily_kg, 40.0);
        assert_eq!(summary.fallback_estimate_kg, None);
        let range = summary.range.unwrap();
        assert_eq!(range.days(), 2);
    }

    #[test]
    fn test_empty_history_uses_fallback() {
        let summary = HarvestSummary::from_record(&record(Vec::new()));
        assert_eq!(summary.days, 0);
        assert!(summary.range.is_none());
        assert_eq!(summary.daily_avg_kg_per_m2, 0.0);
        assert_eq!(summary.fallback_estimate_kg, Some(100.0));
    }

    #[test]
    fn test_fallback_prefers_expected_harvest() {
        let mut r = record(Vec::new());
        r.expected_harvest_kg = Some(75.0);
        assert_eq!(fallback_estimate_kg(&r), Some(75.0));

        r.expected_harvest_kg = None;
        r.planted_amount = None;
        assert_eq!(fallback_estimate_kg(&r), None);
    }
}
