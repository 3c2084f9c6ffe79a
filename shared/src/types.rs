//! Common types used across the generator and its consumers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::HarvestShift;

/// Base yield density per shift in kg/m²; absent shifts count as zero
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ShiftBaseRates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morning: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afternoon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evening: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub night: Option<f64>,
}

impl ShiftBaseRates {
    pub fn new(morning: f64, afternoon: f64, evening: f64, night: f64) -> Self {
        Self {
            morning: Some(morning),
            afternoon: Some(afternoon),
            evening: Some(evening),
            night: Some(night),
        }
    }

    /// Base density for a shift, zero if unset
    pub fn get(&self, shift: HarvestShift) -> f64 {
        self.rate_if_set(shift).unwrap_or(0.0)
    }

    pub fn set(&mut self, shift: HarvestShift, rate: f64) {
        let slot = match shift {
            HarvestShift::Morning => &mut self.morning,
            HarvestShift::Afternoon => &mut self.afternoon,
            HarvestShift::Evening => &mut self.evening,
            HarvestShift::Night => &mut self.night,
        };
        *slot = Some(rate);
    }

    /// Iterate the explicitly set rates
    pub fn iter(&self) -> impl Iterator<Item = (HarvestShift, f64)> + '_ {
        HarvestShift::ALL
            .into_iter()
            .filter_map(|shift| self.rate_if_set(shift).map(|r| (shift, r)))
    }

    fn rate_if_set(&self, shift: HarvestShift) -> Option<f64> {
        match shift {
            HarvestShift::Morning => self.morning,
            HarvestShift::Afternoon => self.afternoon,
            HarvestShift::Evening => self.evening,
            HarvestShift::Night => self.night,
        }
    }
}

/// Inclusive date range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Number of calendar days covered, both ends included
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
