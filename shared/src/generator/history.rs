//! Synthetic per-shift harvest history

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::rng::SeededRng;
use super::seasonality::weekly_seasonality_factor;
use super::trend::{trend_factor, TrendPattern, DEFAULT_TREND_AMPLITUDE};
use crate::models::{HarvestShift, HistoryPoint};
use crate::types::ShiftBaseRates;

pub const DEFAULT_NOISE_PCT: f64 = 0.06;
pub const DEFAULT_HISTORY_SEASONALITY_PCT: f64 = 0.04;
pub const DEFAULT_SEED: &str = "default-seed";

/// Knobs for [`build_history`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryOptions {
    pub pattern: TrendPattern,
    /// Half-width of the multiplicative noise, 0.06 = ±6%
    pub noise_pct: f64,
    pub seasonality_pct: f64,
    pub seed: String,
    pub amplitude: f64,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            pattern: TrendPattern::Flat,
            noise_pct: DEFAULT_NOISE_PCT,
            seasonality_pct: DEFAULT_HISTORY_SEASONALITY_PCT,
            seed: DEFAULT_SEED.to_string(),
            amplitude: DEFAULT_TREND_AMPLITUDE,
        }
    }
}

impl HistoryOptions {
    pub fn with_pattern(mut self, pattern: TrendPattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = seed.into();
        self
    }

    pub fn with_noise_pct(mut self, noise_pct: f64) -> Self {
        self.noise_pct = noise_pct;
        self
    }

    pub fn with_seasonality_pct(mut self, seasonality_pct: f64) -> Self {
        self.seasonality_pct = seasonality_pct;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Seed of the noise stream for a window of `days`.
    ///
    /// Records sharing a seed but differing in pattern or window length must
    /// not share a stream. The pattern is written by its canonical name, so an
    /// unrecognized name that parsed to `Flat` seeds as `flat`.
    pub fn stream_seed(&self, days: u32) -> String {
        format!("{}:{}:{}", self.seed, self.pattern, days)
    }
}

/// Round to 3 decimal places
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Build `days × 4` points ending at `start` and walking back in time.
///
/// Points are ordered newest day first, shifts in [`HarvestShift::ALL`] order.
/// The noise stream is drawn in that same order. A window reaching past
/// [`NaiveDate::MIN`] stops at the earliest representable day; callers that
/// need the full window check it with `validate_start_date` first.
pub fn build_history(
    start: NaiveDate,
    days: u32,
    rates: &ShiftBaseRates,
    options: &HistoryOptions,
) -> Vec<HistoryPoint> {
    let mut rng = SeededRng::new(&options.stream_seed(days));
    let n = days as usize;
    let mut history = Vec::with_capacity(n * HarvestShift::ALL.len());

    for i in 0..days {
        let Some(date) = start.checked_sub_days(Days::new(u64::from(i))) else {
            break;
        };
        let trend = trend_factor(options.pattern, f64::from(i), n, options.amplitude);
        let season = weekly_seasonality_factor(date, options.seasonality_pct);

        for shift in HarvestShift::ALL {
            let base = rates.get(shift);
            let noise = rng.next_symmetric(options.noise_pct);
            let raw = base * trend * season * (1.0 + noise);
            history.push(HistoryPoint {
                date,
                shift,
                harvested_kg_per_m2: round3(raw.max(0.0)),
            });
        }
    }

    history
}
