//! Core projection engine: goal -> corpus target -> monthly SIP -> yearly trajectory

use crate::assumptions::{Assumptions, Scenario, DEFAULT_CORPUS_MULTIPLE, DEFAULT_INFLATION_RATE};
use crate::format::{round_half_up, to_lakhs};
use crate::goal::{GoalInput, RetirementWindow};
use super::state::CorpusState;
use super::trajectory::{ProjectionResult, YearPoint};

/// Configuration for a projection run
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    /// Annual inflation override. `None` (or a non-finite value) uses the
    /// assumptions' inflation rate.
    pub inflation_rate: Option<f64>,
}

impl ProjectionConfig {
    pub fn with_inflation(inflation_rate: f64) -> Self {
        Self {
            inflation_rate: Some(inflation_rate),
        }
    }
}

/// Resolve ages from a goal and the number of years left to save
pub fn years_to_retirement(goal: &GoalInput) -> RetirementWindow {
    RetirementWindow::from_goal(goal)
}

/// Inflation-adjusted corpus needed at retirement.
///
/// Today's requirement is 25x annual expenses; that baseline is grown by
/// inflation over the saving horizon. With zero years the baseline is
/// returned unchanged.
pub fn future_corpus_target(monthly_expenses: f64, years: u32, inflation_rate: f64) -> f64 {
    corpus_target(monthly_expenses, years, inflation_rate, DEFAULT_CORPUS_MULTIPLE)
}

fn baseline_corpus(monthly_expenses: f64, multiple: f64) -> f64 {
    monthly_expenses * 12.0 * multiple
}

fn corpus_target(monthly_expenses: f64, years: u32, inflation_rate: f64, multiple: f64) -> f64 {
    let baseline = baseline_corpus(monthly_expenses, multiple);
    if years == 0 {
        return baseline;
    }
    baseline * (1.0 + inflation_rate).powf(years as f64)
}

/// Level monthly contribution whose future value (ordinary annuity,
/// monthly compounding) equals `future_value` after `years * 12` months.
///
/// The horizon is floored at one month. A non-positive compounding
/// denominator (zero or negative return) yields 0.
pub fn required_monthly_contribution(future_value: f64, annual_return_rate: f64, years: u32) -> f64 {
    let monthly_rate = annual_return_rate / 12.0;
    let total_months = (years as f64 * 12.0).max(1.0);
    let denominator = (1.0 + monthly_rate).powf(total_months) - 1.0;

    // Also catches NaN
    if !(denominator > 0.0) {
        return 0.0;
    }
    future_value * monthly_rate / denominator
}

/// Full projection with the built-in assumptions.
///
/// `inflation_rate` defaults to 6% when `None`.
pub fn compute_retirement_projections(
    goal: &GoalInput,
    scenario: impl Into<Scenario>,
    inflation_rate: Option<f64>,
) -> ProjectionResult {
    let engine = ProjectionEngine::new(
        Assumptions::default_planning(),
        ProjectionConfig { inflation_rate },
    );
    engine.project_goal(goal, scenario.into())
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Inflation rate this engine projects with
    pub fn inflation_rate(&self) -> f64 {
        match self.config.inflation_rate {
            Some(rate) if rate.is_finite() => rate,
            Some(rate) => {
                log::warn!("non-finite inflation rate {}, using assumptions", rate);
                self.fallback_inflation()
            }
            None => self.fallback_inflation(),
        }
    }

    fn fallback_inflation(&self) -> f64 {
        if self.assumptions.inflation_rate.is_finite() {
            self.assumptions.inflation_rate
        } else {
            DEFAULT_INFLATION_RATE
        }
    }

    /// Run projection for a single goal
    pub fn project_goal(&self, goal: &GoalInput, scenario: Scenario) -> ProjectionResult {
        let window = years_to_retirement(goal);
        let years = window.years_to_retirement;
        let monthly_expenses = goal.monthly_expenses();
        let inflation_rate = self.inflation_rate();
        let annual_return_rate = self.assumptions.annual_rate(scenario);

        let future_value = corpus_target(
            monthly_expenses,
            years,
            inflation_rate,
            self.assumptions.corpus_multiple,
        );
        let monthly_investment = required_monthly_contribution(future_value, annual_return_rate, years);
        let annual_contribution = monthly_investment * 12.0;

        log::debug!(
            "projecting {} years at {} ({:.2}%): target {:.0}, monthly {:.0}",
            years,
            scenario,
            annual_return_rate * 100.0,
            future_value,
            monthly_investment
        );

        let mut data = Vec::with_capacity(years as usize + 1);
        let mut state = CorpusState::start(window.current_age);
        data.push(self.year_point(&state, monthly_investment, monthly_expenses, inflation_rate));

        for _year in 1..=years {
            state.advance_year(annual_return_rate, annual_contribution);
            data.push(self.year_point(&state, monthly_investment, monthly_expenses, inflation_rate));
        }

        ProjectionResult {
            current_age: window.current_age,
            retirement_age: window.retirement_age,
            years_to_retirement: years,
            baseline_corpus: baseline_corpus(monthly_expenses, self.assumptions.corpus_multiple),
            scenario,
            annual_return_rate,
            inflation_rate,
            monthly_investment,
            final_corpus_rupees: state.corpus,
            future_value,
            data,
        }
    }

    fn year_point(
        &self,
        state: &CorpusState,
        monthly_investment: f64,
        monthly_expenses: f64,
        inflation_rate: f64,
    ) -> YearPoint {
        YearPoint {
            year: state.year,
            age: state.age,
            corpus_rupees: state.corpus,
            corpus_lakhs: to_lakhs(state.corpus),
            monthly_investment,
            inflation_adjusted_expenses: round_half_up(
                monthly_expenses * (1.0 + inflation_rate).powf(state.year as f64),
                0,
            ),
        }
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(Assumptions::default_planning(), ProjectionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::ScenarioRates;
    use approx::assert_relative_eq;
    use proptest::prelude::{prop_assert, proptest};

    fn sample_goal() -> GoalInput {
        GoalInput::new(30, 60, 50_000)
    }

    #[test]
    fn test_years_to_retirement() {
        let window = years_to_retirement(&sample_goal());
        assert_eq!(window.years_to_retirement, 30);

        let window = years_to_retirement(&GoalInput::new(70, 60, 50_000));
        assert_eq!(window.years_to_retirement, 0);

        let window = years_to_retirement(&GoalInput::default());
        assert_eq!((window.current_age, window.retirement_age), (30, 60));
    }

    #[test]
    fn test_zero_year_target_is_baseline() {
        assert_eq!(future_corpus_target(50_000.0, 0, 0.06), 50_000.0 * 12.0 * 25.0);
        assert_eq!(future_corpus_target(50_000.0, 0, 0.5), 15_000_000.0);
    }

    #[test]
    fn test_target_grows_with_inflation() {
        let expected = 15_000_000.0 * 1.06_f64.powf(10.0);
        assert_relative_eq!(future_corpus_target(50_000.0, 10, 0.06), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_contribution_zero_rate_guard() {
        assert_eq!(required_monthly_contribution(1_000_000.0, 0.0, 20), 0.0);
        assert_eq!(required_monthly_contribution(1_000_000.0, -0.05, 20), 0.0);
        assert_eq!(required_monthly_contribution(1_000_000.0, f64::NAN, 20), 0.0);
    }

    #[test]
    fn test_contribution_same_year_is_finite() {
        // One month horizon: the whole target is due in a single payment
        let payment = required_monthly_contribution(1_200_000.0, 0.12, 0);
        assert!(payment.is_finite());
        assert_relative_eq!(payment, 1_200_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_moderate_reference_scenario() {
        let result = compute_retirement_projections(&sample_goal(), Scenario::Moderate, Some(0.06));

        assert_eq!(result.years_to_retirement, 30);
        assert_relative_eq!(
            result.future_value,
            50_000.0 * 12.0 * 25.0 * 1.06_f64.powf(30.0),
            max_relative = 1e-12
        );
        assert_eq!(result.data.len(), 31);
        assert_eq!(result.data[30].age, 60);
        assert_eq!(result.annual_return_rate, 0.10);
        assert!(
            result.monthly_investment > 38_000.0 && result.monthly_investment < 38_250.0,
            "monthly investment {}",
            result.monthly_investment
        );
    }

    #[test]
    fn test_trajectory_shape() {
        let result = compute_retirement_projections(&GoalInput::new(42, 58, 70_000), "aggressive", None);
        assert_eq!(result.data.len(), result.years_to_retirement as usize + 1);
        assert_eq!(result.data[0].year, 0);
        assert_eq!(result.data[0].corpus_rupees, 0.0);

        for (i, point) in result.data.iter().enumerate() {
            assert_eq!(point.year as usize, i);
            assert_eq!(point.age, 42 + i as i64);
            assert_eq!(point.monthly_investment, result.monthly_investment);
        }
        for pair in result.data.windows(2) {
            let expected = pair[0].corpus_rupees * 1.14 + result.monthly_investment * 12.0;
            assert_relative_eq!(pair[1].corpus_rupees, expected, max_relative = 1e-12);
        }
        assert_eq!(
            result.final_corpus_rupees,
            result.data.last().unwrap().corpus_rupees
        );
    }

    #[test]
    fn test_final_corpus_diverges_from_target() {
        let result = compute_retirement_projections(&sample_goal(), Scenario::Moderate, None);
        // Annual stepping under-accumulates against the monthly closed form
        assert!(result.final_corpus_rupees < result.future_value);
        assert!(result.final_corpus_rupees > 0.8 * result.future_value);
    }

    #[test]
    fn test_expenses_and_lakhs() {
        let result = compute_retirement_projections(&sample_goal(), Scenario::Moderate, Some(0.06));
        assert_eq!(result.data[0].inflation_adjusted_expenses, 50_000.0);
        assert_eq!(result.data[1].inflation_adjusted_expenses, 53_000.0);
        assert_eq!(result.data[2].inflation_adjusted_expenses, 56_180.0);

        for point in &result.data {
            assert_relative_eq!(point.corpus_lakhs, to_lakhs(point.corpus_rupees));
        }
    }

    #[test]
    fn test_higher_return_needs_less_saving() {
        let goal = sample_goal();
        let conservative = compute_retirement_projections(&goal, Scenario::Conservative, None);
        let moderate = compute_retirement_projections(&goal, Scenario::Moderate, None);
        let aggressive = compute_retirement_projections(&goal, Scenario::Aggressive, None);

        assert!(aggressive.monthly_investment < moderate.monthly_investment);
        assert!(moderate.monthly_investment < conservative.monthly_investment);
        assert_eq!(aggressive.future_value, conservative.future_value);
    }

    #[test]
    fn test_unknown_scenario_uses_moderate() {
        let unknown = compute_retirement_projections(&sample_goal(), "balanced", None);
        let moderate = compute_retirement_projections(&sample_goal(), "moderate", None);
        assert_eq!(unknown, moderate);
    }

    #[test]
    fn test_retirement_before_current_age_degrades() {
        let result = compute_retirement_projections(&GoalInput::new(65, 60, 40_000), Scenario::Moderate, None);
        assert_eq!(result.years_to_retirement, 0);
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.data[0].age, 65);
        assert_eq!(result.final_corpus_rupees, 0.0);
        assert_eq!(result.future_value, 40_000.0 * 12.0 * 25.0);
    }

    #[test]
    fn test_huge_retirement_age_stays_bounded() {
        let goal = GoalInput::from_strs(Some("25"), Some("99999999999"), Some("40000"));
        let result = compute_retirement_projections(&goal, Scenario::Moderate, None);

        assert_eq!(result.retirement_age, 100);
        assert_eq!(result.years_to_retirement, 75);
        assert_eq!(result.data.len(), 76);
        assert_eq!(result.data[75].age, 100);
        assert!(result.final_corpus_rupees.is_finite());
    }

    #[test]
    fn test_negative_expenses_round_half_up() {
        // -12.5 rounds up to -12, not away from zero
        let engine = ProjectionEngine::new(
            Assumptions::default_planning(),
            ProjectionConfig::with_inflation(0.25),
        );
        let result = engine.project_goal(&GoalInput::new(30, 31, -10), Scenario::Moderate);
        assert_eq!(result.data[1].inflation_adjusted_expenses, -12.0);
    }

    #[test]
    fn test_todays_target_survives_total_deflation() {
        let result = compute_retirement_projections(&sample_goal(), Scenario::Moderate, Some(-1.0));
        assert_eq!(result.future_value, 0.0);

        let summary = result.summary();
        assert_eq!(summary.target_in_todays_rupees, 15_000_000.0);
        assert!(!summary.target_in_todays_rupees.is_nan());
    }

    #[test]
    fn test_non_finite_inflation_uses_default() {
        let result = compute_retirement_projections(&sample_goal(), Scenario::Moderate, Some(f64::NAN));
        assert_eq!(result.inflation_rate, DEFAULT_INFLATION_RATE);
    }

    #[test]
    fn test_zero_return_assumption_saves_nothing() {
        let assumptions = Assumptions {
            scenario_rates: ScenarioRates {
                moderate: 0.0,
                ..ScenarioRates::STANDARD
            },
            ..Assumptions::default_planning()
        };
        let engine = ProjectionEngine::new(assumptions, ProjectionConfig::default());
        let result = engine.project_goal(&sample_goal(), Scenario::Moderate);

        assert_eq!(result.monthly_investment, 0.0);
        assert!(result.data.iter().all(|p| p.corpus_rupees == 0.0));
        assert!(result.future_value > 0.0);
    }

    #[test]
    fn test_engine_honours_corpus_multiple() {
        let assumptions = Assumptions {
            corpus_multiple: 30.0,
            ..Assumptions::default_planning()
        };
        let engine = ProjectionEngine::new(assumptions, ProjectionConfig::with_inflation(0.0));
        let result = engine.project_goal(&sample_goal(), Scenario::Moderate);
        assert_eq!(result.future_value, 50_000.0 * 12.0 * 30.0);
    }

    #[test]
    fn test_summary() {
        let result = compute_retirement_projections(&sample_goal(), Scenario::Moderate, Some(0.06));
        let summary = result.summary();

        assert_relative_eq!(
            summary.total_contributed,
            result.monthly_investment * 360.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            summary.investment_growth + summary.total_contributed,
            result.final_corpus_rupees,
            max_relative = 1e-12
        );
        assert!(summary.target_gap < 0.0);
        assert_relative_eq!(summary.target_in_todays_rupees, 15_000_000.0, max_relative = 1e-9);
        assert_eq!(summary.todays_monthly_expenses, 50_000.0);
        assert_eq!(summary.final_monthly_expenses, result.data[30].inflation_adjusted_expenses);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = compute_retirement_projections(&GoalInput::new(58, 60, 10_000), Scenario::Moderate, None);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["yearsToRetirement"], 2);
        assert_eq!(json["scenario"], "moderate");
        assert!(json["data"][1]["corpusLakhs"].is_number());
        assert!(json["data"][1]["inflationAdjustedExpenses"].is_number());
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_contribution_decreases_with_more_years(
            future_value in 1_000.0f64..1e9,
            rate_bp in 1u32..3_000,
            years in 0u32..60
        ) {
            let rate = rate_bp as f64 / 10_000.0;
            let sooner = required_monthly_contribution(future_value, rate, years);
            let later = required_monthly_contribution(future_value, rate, years + 1);
            prop_assert!(later < sooner, "years {} -> {}: {} !< {}", years, years + 1, later, sooner);
        }

        #[test]
        fn prop_contribution_increases_with_target(
            future_value in 1_000.0f64..1e9,
            extra in 1.0f64..1e8,
            rate_bp in 1u32..3_000,
            years in 1u32..60
        ) {
            let rate = rate_bp as f64 / 10_000.0;
            let small = required_monthly_contribution(future_value, rate, years);
            let large = required_monthly_contribution(future_value + extra, rate, years);
            prop_assert!(large > small);
        }

        #[test]
        fn prop_trajectory_follows_recurrence(
            current_age in 18i64..60,
            span in 0i64..40,
            expenses in 1_000i64..500_000,
            scenario_idx in 0usize..3,
            inflation_bp in 0u32..1_200
        ) {
            let goal = GoalInput::new(current_age, current_age + span, expenses);
            let scenario = Scenario::ALL[scenario_idx];
            let result = compute_retirement_projections(&goal, scenario, Some(inflation_bp as f64 / 10_000.0));

            prop_assert!(result.years_to_retirement as i64 == span);
            prop_assert!(result.data.len() == span as usize + 1);
            prop_assert!(result.data[0].corpus_rupees == 0.0);

            let rate = result.annual_return_rate;
            for (i, pair) in result.data.windows(2).enumerate() {
                let expected = pair[0].corpus_rupees * (1.0 + rate) + result.monthly_investment * 12.0;
                prop_assert!((pair[1].corpus_rupees - expected).abs() <= 1e-9 * expected.abs().max(1.0));
                prop_assert!(pair[1].age == current_age + i as i64 + 1);
            }
        }
    }
}
