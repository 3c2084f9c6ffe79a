//! Trend shapes applied across a history window

use serde::{Deserialize, Deserializer, Serialize};

/// Default strength of the trend curve
pub const DEFAULT_TREND_AMPLITUDE: f64 = 0.18;

/// Named multiplicative curve centered at 1.0
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrendPattern {
    /// Linear ramp up
    Up,
    /// Linear ramp down
    Down,
    /// U-shape, lowest at the midpoint
    Bow,
    /// Inverted U, highest at the midpoint
    Hump,
    #[default]
    Flat,
}

impl TrendPattern {
    pub const ALL: [TrendPattern; 5] = [
        TrendPattern::Up,
        TrendPattern::Down,
        TrendPattern::Bow,
        TrendPattern::Hump,
        TrendPattern::Flat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendPattern::Up => "up",
            TrendPattern::Down => "down",
            TrendPattern::Bow => "bow",
            TrendPattern::Hump => "hump",
            TrendPattern::Flat => "flat",
        }
    }

    /// Parse a pattern name; unknown names fall back to `Flat`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "up" => TrendPattern::Up,
            "down" => TrendPattern::Down,
            "bow" => TrendPattern::Bow,
            "hump" => TrendPattern::Hump,
            _ => TrendPattern::Flat,
        }
    }
}

impl<'de> Deserialize<'de> for TrendPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(TrendPattern::from_name(&name))
    }
}

impl std::fmt::Display for TrendPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Multiplicative trend factor for day `idx` of `n`.
///
/// `idx` is a position in `[0, n - 1]` and may be fractional.
pub fn trend_factor(pattern: TrendPattern, idx: f64, n: usize, amplitude: f64) -> f64 {
    if n <= 1 {
        return 1.0;
    }
    let t = idx / (n - 1) as f64;
    let tt = t - 0.5;
    match pattern {
        TrendPattern::Up => 1.0 - amplitude / 2.0 + amplitude * t,
        TrendPattern::Down => 1.0 + amplitude / 2.0 - amplitude * t,
        TrendPattern::Bow => 1.0 - amplitude + 4.0 * amplitude * tt * tt,
        TrendPattern::Hump => 1.0 + amplitude - 4.0 * amplitude * tt * tt,
        TrendPattern::Flat => 1.0,
    }
}
