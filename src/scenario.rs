//! Scenario runner for comparisons and batch projections
//!
//! Holds one set of assumptions and projects goals under any scenario
//! without reloading the rate table.

use crate::assumptions::{Assumptions, Scenario};
use crate::goal::{GoalInput, GoalRecord};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Projection for one goal loaded from a goals file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProjection {
    pub goal_id: u32,
    pub result: ProjectionResult,
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```
/// use retirement_planner::{GoalInput, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let results = runner.compare(&GoalInput::new(30, 60, 50_000));
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the built-in assumptions
    pub fn new() -> Self {
        Self::with_assumptions(Assumptions::default_planning(), ProjectionConfig::default())
    }

    /// Create runner from the default assumptions directory
    pub fn from_csv() -> crate::Result<Self> {
        Ok(Self::with_assumptions(Assumptions::from_csv()?, ProjectionConfig::default()))
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(assumptions, config),
        }
    }

    /// Run a single projection
    pub fn run(&self, goal: &GoalInput, scenario: Scenario) -> ProjectionResult {
        self.engine.project_goal(goal, scenario)
    }

    /// One projection per scenario, conservative first
    pub fn compare(&self, goal: &GoalInput) -> Vec<ProjectionResult> {
        Scenario::ALL
            .iter()
            .map(|&scenario| self.engine.project_goal(goal, scenario))
            .collect()
    }

    /// Project many goals in parallel; output order follows input order
    pub fn run_batch(&self, goals: &[GoalRecord]) -> Vec<GoalProjection> {
        log::info!("projecting {} goals", goals.len());
        goals
            .par_iter()
            .map(|record| GoalProjection {
                goal_id: record.goal_id,
                result: self.engine.project_goal(&record.goal, record.scenario),
            })
            .collect()
    }

    /// Get reference to the engine's assumptions
    pub fn assumptions(&self) -> &Assumptions {
        self.engine.assumptions()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
