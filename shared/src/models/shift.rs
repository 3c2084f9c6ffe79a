//! Work shift models

use serde::{Deserialize, Serialize};

/// A work shift within a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum HarvestShift {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl HarvestShift {
    /// Fixed enumeration order, also the order points are emitted within a day
    pub const ALL: [HarvestShift; 4] = [
        HarvestShift::Morning,
        HarvestShift::Afternoon,
        HarvestShift::Evening,
        HarvestShift::Night,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HarvestShift::Morning => "morning",
            HarvestShift::Afternoon => "afternoon",
            HarvestShift::Evening => "evening",
            HarvestShift::Night => "night",
        }
    }
}

impl std::fmt::Display for HarvestShift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HarvestShift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(HarvestShift::Morning),
            "afternoon" => Ok(HarvestShift::Afternoon),
            "evening" => Ok(HarvestShift::Evening),
            "night" => Ok(HarvestShift::Night),
            other => Err(format!("unknown shift: {}", other)),
        }
    }
}
