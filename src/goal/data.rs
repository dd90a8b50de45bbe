//! Retirement goal input and lenient field parsing

use serde::{Deserialize, Deserializer, Serialize};

/// Age assumed when the current age is missing or unparsable
pub const DEFAULT_CURRENT_AGE: i64 = 30;

/// Age assumed when the retirement age is missing or unparsable
pub const DEFAULT_RETIREMENT_AGE: i64 = 60;

/// Monthly expenses (today's rupees) assumed when missing or unparsable
pub const DEFAULT_MONTHLY_EXPENSES: i64 = 50_000;

/// Youngest age a goal is planned from
pub const MIN_AGE: i64 = 18;

/// Oldest age a goal is planned to
pub const MAX_AGE: i64 = 100;

/// Caller-supplied retirement goal.
///
/// Every field is optional. Values arriving from forms or CSV may be
/// numbers or int-like strings; anything that cannot be read as an
/// integer is treated as absent and resolves to the documented default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInput {
    #[serde(default, deserialize_with = "lenient_int")]
    pub current_age: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub retirement_age: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub monthly_expenses: Option<i64>,
}

impl GoalInput {
    pub fn new(current_age: i64, retirement_age: i64, monthly_expenses: i64) -> Self {
        Self {
            current_age: Some(current_age),
            retirement_age: Some(retirement_age),
            monthly_expenses: Some(monthly_expenses),
        }
    }

    /// Build a goal from raw text fields (e.g. form or CLI values)
    pub fn from_strs(
        current_age: Option<&str>,
        retirement_age: Option<&str>,
        monthly_expenses: Option<&str>,
    ) -> Self {
        Self {
            current_age: current_age.and_then(parse_int_like),
            retirement_age: retirement_age.and_then(parse_int_like),
            monthly_expenses: monthly_expenses.and_then(parse_int_like),
        }
    }

    /// Current age, clamped to [`MIN_AGE`, `MAX_AGE`]
    pub fn current_age(&self) -> i64 {
        self.current_age
            .unwrap_or(DEFAULT_CURRENT_AGE)
            .clamp(MIN_AGE, MAX_AGE)
    }

    /// Retirement age, clamped to [`MIN_AGE`, `MAX_AGE`]
    pub fn retirement_age(&self) -> i64 {
        self.retirement_age
            .unwrap_or(DEFAULT_RETIREMENT_AGE)
            .clamp(MIN_AGE, MAX_AGE)
    }

    pub fn monthly_expenses(&self) -> f64 {
        self.monthly_expenses.unwrap_or(DEFAULT_MONTHLY_EXPENSES) as f64
    }
}

/// Resolved ages and the saving horizon between them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementWindow {
    pub current_age: i64,
    pub retirement_age: i64,
    /// `max(0, retirement_age - current_age)`
    pub years_to_retirement: u32,
}

impl RetirementWindow {
    pub fn from_goal(goal: &GoalInput) -> Self {
        let current_age = goal.current_age();
        let retirement_age = goal.retirement_age();
        // Both ages are clamped, so the gap fits in 0..=82
        let years = (retirement_age - current_age).max(0) as u32;

        Self {
            current_age,
            retirement_age,
            years_to_retirement: years,
        }
    }
}

/// Read the leading integer of a string: optional sign then digits.
/// `"45abc"` gives 45, `"3.7"` gives 3, `"abc"` and `""` give `None`.
pub fn parse_int_like(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn int_from_float(value: f64) -> Option<i64> {
    if value.is_finite() && value.abs() < i64::MAX as f64 {
        Some(value.trunc() as i64)
    } else {
        None
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntLike {
    Int(i64),
    Float(f64),
    Text(String),
    #[allow(dead_code)]
    Other(serde::de::IgnoredAny),
}

fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<IntLike> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(IntLike::Int(v)) => Some(v),
        Some(IntLike::Float(v)) => int_from_float(v),
        Some(IntLike::Text(s)) => parse_int_like(&s),
        Some(IntLike::Other(_)) | None => None,
    })
}
