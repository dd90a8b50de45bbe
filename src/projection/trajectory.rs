//! Projection output structures

use crate::assumptions::Scenario;
use serde::{Deserialize, Serialize};

/// Corpus position at one yearly step of the projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearPoint {
    /// Years from now (0 = today)
    pub year: u32,
    pub age: i64,
    pub corpus_rupees: f64,
    /// `corpus_rupees` in lakhs, one decimal
    pub corpus_lakhs: f64,
    pub monthly_investment: f64,
    /// Today's monthly expenses grown by inflation, nearest rupee
    pub inflation_adjusted_expenses: f64,
}

/// Complete projection for one goal under one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub current_age: i64,
    pub retirement_age: i64,
    pub years_to_retirement: u32,

    /// Corpus needed in today's rupees (25x annual expenses)
    pub baseline_corpus: f64,

    pub scenario: Scenario,
    pub annual_return_rate: f64,
    pub inflation_rate: f64,

    /// Level monthly contribution required to reach `future_value`
    pub monthly_investment: f64,

    /// Corpus at the last yearly step. Annual stepping means this differs
    /// slightly from `future_value`, which assumes monthly compounding.
    pub final_corpus_rupees: f64,

    /// Inflation-adjusted corpus target at retirement
    pub future_value: f64,

    pub data: Vec<YearPoint>,
}

impl ProjectionResult {
    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_contributed = self.monthly_investment * 12.0 * self.years_to_retirement as f64;
        let final_monthly_expenses = self
            .data
            .last()
            .map(|p| p.inflation_adjusted_expenses)
            .unwrap_or(0.0);
        let todays_monthly_expenses = self
            .data
            .first()
            .map(|p| p.inflation_adjusted_expenses)
            .unwrap_or(0.0);

        ProjectionSummary {
            years_to_retirement: self.years_to_retirement,
            monthly_investment: self.monthly_investment,
            total_contributed,
            investment_growth: self.final_corpus_rupees - total_contributed,
            final_corpus_rupees: self.final_corpus_rupees,
            future_value: self.future_value,
            target_gap: self.final_corpus_rupees - self.future_value,
            target_in_todays_rupees: self.baseline_corpus,
            todays_monthly_expenses,
            final_monthly_expenses,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub years_to_retirement: u32,
    pub monthly_investment: f64,
    pub total_contributed: f64,
    /// Final corpus minus everything paid in
    pub investment_growth: f64,
    pub final_corpus_rupees: f64,
    pub future_value: f64,
    /// Signed difference between the yearly walk and the closed-form target
    pub target_gap: f64,
    /// The corpus target expressed in today's money
    pub target_in_todays_rupees: f64,
    pub todays_monthly_expenses: f64,
    pub final_monthly_expenses: f64,
}
