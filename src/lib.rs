//! Retirement Planner - goal-based retirement projection engine
//!
//! This library provides:
//! - Years-to-retirement and inflation-adjusted corpus targets
//! - Required monthly SIP for a goal under a risk scenario
//! - Year-by-year corpus trajectories
//! - Indian-numbering currency formatting (K / L / Cr)
//! - CSV loading of goals and assumptions, batch and scenario comparison runs

pub mod assumptions;
pub mod error;
pub mod format;
pub mod goal;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{Assumptions, Scenario, ScenarioRates};
pub use error::{PlannerError, Result};
pub use format::format_currency_inr;
pub use goal::{GoalInput, GoalRecord, RetirementWindow};
pub use projection::{
    compute_retirement_projections, future_corpus_target, required_monthly_contribution,
    years_to_retirement, ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionSummary,
    YearPoint,
};
pub use scenario::{GoalProjection, ScenarioRunner};
