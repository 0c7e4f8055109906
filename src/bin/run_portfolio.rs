//! Run schedules for an entire loan portfolio
//!
//! Reads loans from a CSV file, computes every schedule in parallel and
//! writes one summary row per loan.
//! Usage: run_portfolio [LOANS_CSV]
//! The output path defaults to portfolio_summary.csv and can be changed with
//! the SCHEDULE_OUTPUT environment variable.

use anyhow::{Context, Result};
use std::env;
use std::time::Instant;

use loan_amortization::{loan::load_loans, ScheduleRunner};

fn main() -> Result<()> {
    env_logger::init();

    let input_path = env::args().nth(1).unwrap_or_else(|| "data/sample_loans.csv".to_string());
    let output_path = env::var("SCHEDULE_OUTPUT").unwrap_or_else(|_| "portfolio_summary.csv".to_string());

    let start = Instant::now();
    println!("Loading loans from {}...", input_path);
    let loans = load_loans(&input_path).with_context(|| format!("Failed to load loans from {}", input_path))?;
    println!("Loaded {} loans in {:?}", loans.len(), start.elapsed());

    println!("Running schedules...");
    let run_start = Instant::now();
    let results = ScheduleRunner::new().run_portfolio(&loans);
    println!("Schedules complete in {:?}", run_start.elapsed());

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("Failed to create {}", output_path))?;

    let mut failed = 0usize;
    let mut total_principal = 0.0;
    let mut total_interest = 0.0;
    let mut total_outstanding = 0.0;

    for result in &results {
        match result.summary_row() {
            Some(row) => {
                total_principal += row.total_principal;
                total_interest += row.total_interest;
                total_outstanding += row.final_balance;
                writer.serialize(&row)?;
            }
            None => failed += 1,
        }
    }
    writer.flush()?;

    println!("Output written to {}", output_path);

    println!("\nPortfolio Summary:");
    println!("  Loans:              {}", results.len());
    println!("  Failed:             {}", failed);
    println!("  Principal repaid:   ${:.2}", total_principal);
    println!("  Interest charged:   ${:.2}", total_interest);
    println!("  Outstanding at term: ${:.2}", total_outstanding);

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
