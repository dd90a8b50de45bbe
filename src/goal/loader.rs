//! Load retirement goals from CSV
//!
//! Expected columns: goal_id,current_age,retirement_age,monthly_expenses,scenario

use super::GoalInput;
use crate::assumptions::Scenario;
use crate::error::{PlannerError, Result};
use csv::Reader;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs::File;
use std::path::Path;

/// One goal to project, as read from a goals file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRecord {
    pub goal_id: u32,
    #[serde(flatten)]
    pub goal: GoalInput,
    #[serde(default, deserialize_with = "lenient_scenario")]
    pub scenario: Scenario,
}

/// Raw CSV row; field names follow the snake_case file header
#[derive(Debug, Deserialize)]
struct CsvRow {
    goal_id: u32,
    #[serde(default)]
    current_age: Option<String>,
    #[serde(default)]
    retirement_age: Option<String>,
    #[serde(default)]
    monthly_expenses: Option<String>,
    #[serde(default)]
    scenario: Option<String>,
}

impl CsvRow {
    fn into_record(self) -> GoalRecord {
        GoalRecord {
            goal_id: self.goal_id,
            goal: GoalInput::from_strs(
                self.current_age.as_deref(),
                self.retirement_age.as_deref(),
                self.monthly_expenses.as_deref(),
            ),
            scenario: self
                .scenario
                .as_deref()
                .map(Scenario::from_name_or_default)
                .unwrap_or_default(),
        }
    }
}

fn lenient_scenario<'de, D>(deserializer: D) -> std::result::Result<Scenario, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().map(Scenario::from_name_or_default).unwrap_or_default())
}

/// Load all goals from a CSV file
pub fn load_goals<P: AsRef<Path>>(path: P) -> Result<Vec<GoalRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PlannerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_goals_from_reader(file)
}

/// Load goals from any reader (e.g., string buffer, stdin)
pub fn load_goals_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<GoalRecord>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut goals = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        goals.push(row.into_record());
    }

    log::debug!("loaded {} goals", goals.len());
    Ok(goals)
}
