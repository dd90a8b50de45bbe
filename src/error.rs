//! Errors raised while loading goals and assumptions
//!
//! The projection engine itself never fails; only the CSV loaders do.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown scenario in rate table: {name}")]
    UnknownScenario { name: String },

    #[error("invalid assumption {key}: {value}")]
    InvalidAssumption { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, PlannerError>;
