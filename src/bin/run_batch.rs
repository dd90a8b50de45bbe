//! Run projections for every goal in a goals CSV
//!
//! Outputs one summary row per goal

use anyhow::{Context, Result};
use clap::Parser;
use retirement_planner::format::round_half_up;
use retirement_planner::goal::load_goals;
use retirement_planner::{Assumptions, GoalProjection, ProjectionConfig, ScenarioRunner};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Project every goal in a goals CSV")]
struct Args {
    /// Goals file (goal_id,current_age,retirement_age,monthly_expenses,scenario)
    #[arg(long, default_value = "data/sample_goals.csv")]
    goals: PathBuf,

    /// Directory holding scenario_rates.csv and planning.csv
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Annual inflation override as a decimal
    #[arg(long)]
    inflation: Option<f64>,

    /// Summary output file
    #[arg(long, default_value = "batch_projection_output.csv")]
    output: PathBuf,
}

/// One output row per goal
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SummaryRow {
    goal_id: u32,
    scenario: String,
    current_age: i64,
    retirement_age: i64,
    years: u32,
    future_value: f64,
    monthly_investment: f64,
    final_corpus: f64,
    total_contributed: f64,
    target_gap: f64,
}

impl From<&GoalProjection> for SummaryRow {
    fn from(projection: &GoalProjection) -> Self {
        let result = &projection.result;
        let summary = result.summary();
        Self {
            goal_id: projection.goal_id,
            scenario: result.scenario.to_string(),
            current_age: result.current_age,
            retirement_age: result.retirement_age,
            years: result.years_to_retirement,
            future_value: round_half_up(summary.future_value, 0),
            monthly_investment: round_half_up(summary.monthly_investment, 0),
            final_corpus: round_half_up(summary.final_corpus_rupees, 0),
            total_contributed: round_half_up(summary.total_contributed, 0),
            target_gap: round_half_up(summary.target_gap, 0),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let goals = load_goals(&args.goals)
        .with_context(|| format!("loading goals from {}", args.goals.display()))?;
    println!("Loaded {} goals in {:?}", goals.len(), start.elapsed());

    let assumptions = match &args.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => Assumptions::default_planning(),
    };
    let runner = ScenarioRunner::with_assumptions(
        assumptions,
        ProjectionConfig {
            inflation_rate: args.inflation,
        },
    );

    let proj_start = Instant::now();
    let projections = runner.run_batch(&goals);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for projection in &projections {
        writer.serialize(SummaryRow::from(projection))?;
    }
    writer.flush()?;
    println!("Output written to {}", args.output.display());

    let total_sip: f64 = projections.iter().map(|p| p.result.monthly_investment).sum();
    println!("\nBatch Summary:");
    println!("  Goals:            {}", projections.len());
    println!(
        "  Total monthly SIP: {}",
        retirement_planner::format_currency_inr(total_sip)
    );
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
