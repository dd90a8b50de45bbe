//! Risk scenarios and their assumed nominal annual returns

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named risk/return profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl Scenario {
    /// All scenarios, lowest assumed return first
    pub const ALL: [Scenario; 3] = [Scenario::Conservative, Scenario::Moderate, Scenario::Aggressive];

    /// Strict lookup by tag (case-insensitive, surrounding whitespace ignored)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "conservative" => Some(Scenario::Conservative),
            "moderate" => Some(Scenario::Moderate),
            "aggressive" => Some(Scenario::Aggressive),
            _ => None,
        }
    }

    /// Lookup that falls back to `Moderate` for anything unrecognised
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            if !name.trim().is_empty() {
                log::warn!("unknown scenario {:?}, using moderate", name);
            }
            Scenario::default()
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Conservative => "conservative",
            Scenario::Moderate => "moderate",
            Scenario::Aggressive => "aggressive",
        }
    }
}

impl From<&str> for Scenario {
    fn from(name: &str) -> Self {
        Scenario::from_name_or_default(name)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nominal annual return assumed for each scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRates {
    pub conservative: f64,
    pub moderate: f64,
    pub aggressive: f64,
}

impl ScenarioRates {
    /// Built-in table: 6% / 10% / 14%
    pub const STANDARD: ScenarioRates = ScenarioRates {
        conservative: 0.06,
        moderate: 0.10,
        aggressive: 0.14,
    };

    pub fn annual_rate(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Conservative => self.conservative,
            Scenario::Moderate => self.moderate,
            Scenario::Aggressive => self.aggressive,
        }
    }

    pub(crate) fn set_rate(&mut self, scenario: Scenario, rate: f64) {
        match scenario {
            Scenario::Conservative => self.conservative = rate,
            Scenario::Moderate => self.moderate = rate,
            Scenario::Aggressive => self.aggressive = rate,
        }
    }
}

impl Default for ScenarioRates {
    fn default() -> Self {
        Self::STANDARD
    }
}
