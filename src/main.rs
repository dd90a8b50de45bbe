//! Retirement Planner CLI
//!
//! Projects a single retirement goal and prints the yearly trajectory

use anyhow::{Context, Result};
use clap::Parser;
use retirement_planner::format::format_currency_inr;
use retirement_planner::{
    Assumptions, GoalInput, ProjectionConfig, ProjectionResult, Scenario, ScenarioRunner,
};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "retirement_planner", about = "Project the monthly SIP needed for a retirement goal")]
struct Args {
    /// Current age (unparsable values fall back to 30)
    #[arg(long)]
    current_age: Option<String>,

    /// Target retirement age (unparsable values fall back to 60)
    #[arg(long)]
    retirement_age: Option<String>,

    /// Monthly expenses in today's rupees (unparsable values fall back to 50000)
    #[arg(long)]
    monthly_expenses: Option<String>,

    /// conservative, moderate or aggressive; anything else means moderate
    #[arg(long, default_value = "moderate")]
    scenario: String,

    /// Annual inflation as a decimal (e.g. 0.06)
    #[arg(long)]
    inflation: Option<f64>,

    /// Directory holding scenario_rates.csv and planning.csv
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Project every scenario side by side
    #[arg(long)]
    compare: bool,

    /// Print results as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Also write the yearly trajectory to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

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

    let goal = GoalInput::from_strs(
        args.current_age.as_deref(),
        args.retirement_age.as_deref(),
        args.monthly_expenses.as_deref(),
    );

    let results = if args.compare {
        runner.compare(&goal)
    } else {
        vec![runner.run(&goal, Scenario::from_name_or_default(&args.scenario))]
    };

    if args.json {
        let json = if args.compare {
            serde_json::to_string_pretty(&results)?
        } else {
            serde_json::to_string_pretty(&results[0])?
        };
        println!("{}", json);
    } else {
        for result in &results {
            print_result(result);
        }
    }

    if let Some(path) = &args.output {
        write_csv(path, &results).with_context(|| format!("writing {}", path.display()))?;
        log::info!("trajectory written to {}", path.display());
    }

    Ok(())
}

fn print_result(result: &ProjectionResult) {
    let summary = result.summary();

    println!(
        "Scenario: {} ({:.1}% return, {:.1}% inflation)",
        result.scenario,
        result.annual_return_rate * 100.0,
        result.inflation_rate * 100.0
    );
    println!(
        "  Age {} -> {} ({} years)",
        result.current_age, result.retirement_age, result.years_to_retirement
    );
    println!("  Corpus target:      {}", format_currency_inr(result.future_value));
    println!("  Monthly SIP:        {}", format_currency_inr(result.monthly_investment));
    println!("  Projected corpus:   {}", format_currency_inr(result.final_corpus_rupees));
    println!("  Total contributed:  {}", format_currency_inr(summary.total_contributed));
    println!();

    println!("{:>4} {:>4} {:>14} {:>10} {:>14}", "Year", "Age", "Corpus", "Lakhs", "Expenses/mo");
    println!("{}", "-".repeat(52));
    for point in &result.data {
        println!(
            "{:>4} {:>4} {:>14} {:>10.1} {:>14}",
            point.year,
            point.age,
            format_currency_inr(point.corpus_rupees),
            point.corpus_lakhs,
            format_currency_inr(point.inflation_adjusted_expenses),
        );
    }
    println!();
}

fn write_csv(path: &Path, results: &[ProjectionResult]) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(
        file,
        "Scenario,Year,Age,CorpusRupees,CorpusLakhs,MonthlyInvestment,InflationAdjustedExpenses"
    )?;
    for result in results {
        for point in &result.data {
            writeln!(
                file,
                "{},{},{},{:.2},{:.1},{:.2},{:.0}",
                result.scenario,
                point.year,
                point.age,
                point.corpus_rupees,
                point.corpus_lakhs,
                point.monthly_investment,
                point.inflation_adjusted_expenses,
            )?;
        }
    }
    Ok(())
}
