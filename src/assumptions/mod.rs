//! Planning assumptions: scenario returns, inflation and the corpus rule of thumb

mod rates;
pub mod loader;

pub use rates::{Scenario, ScenarioRates};
pub use loader::LoadedAssumptions;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default annual inflation applied to expenses and the corpus target
pub const DEFAULT_INFLATION_RATE: f64 = 0.06;

/// Years of annual expenses the retirement corpus must cover (the "4% rule")
pub const DEFAULT_CORPUS_MULTIPLE: f64 = 25.0;

/// Container for all projection assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    pub scenario_rates: ScenarioRates,
    pub inflation_rate: f64,
    pub corpus_multiple: f64,
}

impl Assumptions {
    /// Built-in planning assumptions (6/10/14% returns, 6% inflation, 25x expenses)
    pub fn default_planning() -> Self {
        Self {
            scenario_rates: ScenarioRates::STANDARD,
            inflation_rate: DEFAULT_INFLATION_RATE,
            corpus_multiple: DEFAULT_CORPUS_MULTIPLE,
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedAssumptions::load_from(path)?;
        Ok(Self::from_loaded(&loaded))
    }

    /// Overlay loaded values on the built-in defaults
    pub fn from_loaded(loaded: &LoadedAssumptions) -> Self {
        let mut assumptions = Self::default_planning();
        for &(scenario, rate) in &loaded.scenario_rates {
            assumptions.scenario_rates.set_rate(scenario, rate);
        }
        if let Some(rate) = loaded.inflation_rate {
            assumptions.inflation_rate = rate;
        }
        if let Some(multiple) = loaded.corpus_multiple {
            assumptions.corpus_multiple = multiple;
        }
        assumptions
    }

    pub fn annual_rate(&self, scenario: Scenario) -> f64 {
        self.scenario_rates.annual_rate(scenario)
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_planning()
    }
}
