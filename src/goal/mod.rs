//! Retirement goal data structures and CSV loading

mod data;
pub mod loader;

pub use data::{
    parse_int_like, GoalInput, RetirementWindow, DEFAULT_CURRENT_AGE, DEFAULT_MONTHLY_EXPENSES,
    DEFAULT_RETIREMENT_AGE,
};
pub use loader::{load_goals, load_goals_from_reader, GoalRecord};
