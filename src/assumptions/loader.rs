//! CSV-based assumption loader
//!
//! Loads planning assumptions from CSV files in data/assumptions/

use super::Scenario;
use crate::error::{PlannerError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

const SCENARIO_RATES_FILE: &str = "scenario_rates.csv";
const PLANNING_FILE: &str = "planning.csv";

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| PlannerError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_value(key: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PlannerError::InvalidAssumption {
            key: key.to_string(),
            value: raw.to_string(),
        })
}

/// Load scenario return rates (`scenario,annual_rate`)
pub fn load_scenario_rates<R: Read>(reader: R) -> Result<Vec<(Scenario, f64)>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut rates = Vec::new();

    for result in reader.records() {
        let record = result?;
        let name = &record[0];
        let scenario = Scenario::from_name(name).ok_or_else(|| PlannerError::UnknownScenario {
            name: name.to_string(),
        })?;
        let rate = parse_value(scenario.as_str(), &record[1])?;
        rates.push((scenario, rate));
    }

    Ok(rates)
}

/// Load scalar planning settings (`key,value`)
/// Returns (inflation_rate, corpus_multiple); unrecognised keys are skipped
pub fn load_planning_settings<R: Read>(reader: R) -> Result<(Option<f64>, Option<f64>)> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut inflation_rate = None;
    let mut corpus_multiple = None;

    for result in reader.records() {
        let record = result?;
        let key = record[0].trim();
        match key {
            "inflation_rate" => inflation_rate = Some(parse_value(key, &record[1])?),
            "corpus_multiple" => corpus_multiple = Some(parse_value(key, &record[1])?),
            other => log::warn!("ignoring unknown planning setting {:?}", other),
        }
    }

    Ok((inflation_rate, corpus_multiple))
}

/// Raw values read from the assumptions directory
#[derive(Debug, Clone, Default)]
pub struct LoadedAssumptions {
    pub scenario_rates: Vec<(Scenario, f64)>,
    pub inflation_rate: Option<f64>,
    pub corpus_multiple: Option<f64>,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path.
    /// `scenario_rates.csv` is required, `planning.csv` is optional.
    pub fn load_from(path: &Path) -> Result<Self> {
        let scenario_rates = load_scenario_rates(open(&path.join(SCENARIO_RATES_FILE))?)?;

        let planning_path = path.join(PLANNING_FILE);
        let (inflation_rate, corpus_multiple) = if planning_path.exists() {
            load_planning_settings(open(&planning_path)?)?
        } else {
            log::debug!("{} not found, using default planning settings", planning_path.display());
            (None, None)
        };

        Ok(Self {
            scenario_rates,
            inflation_rate,
            corpus_multiple,
        })
    }
}
