//! Retirement projection engine

mod state;
mod engine;
mod trajectory;

pub use state::CorpusState;
pub use engine::{
    compute_retirement_projections, future_corpus_target, required_monthly_contribution,
    years_to_retirement, ProjectionConfig, ProjectionEngine,
};
pub use trajectory::{ProjectionResult, ProjectionSummary, YearPoint};
