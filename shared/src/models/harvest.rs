//! Farmer section harvest models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::HarvestShift;

/// One yield observation for a shift on a given day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub shift: HarvestShift,
    /// Kilograms per square meter, rounded to 3 decimals
    #[serde(rename = "harvestedKgPerM2")]
    pub harvested_kg_per_m2: f64,
}

/// Harvest history of a crop on one farm section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FarmerSectionHarvestRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farmer_id: Option<String>,
    pub section_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logistic_center_id: Option<String>,
    pub item_id: String,
    pub item_name: String,
    #[serde(rename = "areaM2")]
    pub area_m2: f64,
    /// Newest day first, shifts in fixed order within a day
    pub history: Vec<HistoryPoint>,

    // Fallback estimation when no history exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_harvest_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planted_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_fruiting_per_plant: Option<f64>,
}

impl FarmerSectionHarvestRecord {
    /// Most recent date covered by the history
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.history.iter().map(|p| p.date).max()
    }

    /// Points recorded on the most recent date, in shift order
    pub fn latest_day(&self) -> Vec<&HistoryPoint> {
        match self.latest_date() {
            Some(date) => self.history.iter().filter(|p| p.date == date).collect(),
            None => Vec::new(),
        }
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }
}
