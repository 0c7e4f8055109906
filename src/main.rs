//! Loan Amortization CLI
//!
//! Computes the periodic payment, per diem and full schedule for one loan,
//! given either on the command line or as a JSON loan attributes file.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use loan_amortization::{
    get_payments, get_per_diem, get_periodic_payment, list_supported_payment_frequencies,
    loan::load_loan_json, LoanAttributes,
};

/// Loan amortization schedules
#[derive(Parser, Debug)]
#[command(name = "amortize", version, about = "Compute loan payments and amortization schedules")]
struct Cli {
    /// JSON file with loan attributes (overrides the loan flags below)
    #[arg(long)]
    loan_file: Option<PathBuf>,

    /// Original principal
    #[arg(long)]
    amount: Option<f64>,

    /// Nominal annual interest rate as a percent (10 for 10%)
    #[arg(long)]
    rate: Option<f64>,

    /// Payments per year: 1, 2, 4, 6, 12, 24, 26 or 52
    #[arg(long, default_value_t = 12)]
    frequency: u32,

    /// Interest compounding periods per year (2 for Canadian mortgages)
    #[arg(long, default_value_t = 2)]
    compounding: u32,

    /// Months over which principal amortizes
    #[arg(long, default_value_t = 300)]
    amortization_months: u32,

    /// Months until payments stop and the balance falls due
    #[arg(long, default_value_t = 60)]
    term_months: u32,

    /// Date the loan funds (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Date amortization starts (defaults to the start date)
    #[arg(long)]
    adjustment_date: Option<NaiveDate>,

    /// Interest-only loan
    #[arg(long)]
    interest_only: bool,

    /// Payment to make each period when above the required payment
    #[arg(long)]
    preferred_payment: Option<f64>,

    /// Print the schedule as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Write the schedule to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// List supported payment frequencies and exit
    #[arg(long)]
    frequencies: bool,
}

impl Cli {
    fn loan_attributes(&self) -> Result<LoanAttributes> {
        if let Some(ref path) = self.loan_file {
            return load_loan_json(path)
                .with_context(|| format!("Failed to load loan attributes from {}", path.display()));
        }

        let (Some(amount), Some(rate)) = (self.amount, self.rate) else {
            bail!("either --loan-file or both --amount and --rate are required");
        };
        let start_date = self
            .start_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        Ok(LoanAttributes {
            loan_amount: amount,
            preferred_payment: self.preferred_payment,
            start_date: Some(start_date),
            adjustment_date: Some(self.adjustment_date.unwrap_or(start_date)),
            term_in_months: Some(self.term_months),
            interest_only: self.interest_only,
            amortization_period_months: Some(self.amortization_months),
            compounding_periods_per_year: Some(self.compounding),
            payment_frequency: Some(self.frequency),
            interest_rate: rate,
        })
    }
}

fn print_frequencies() {
    println!("{:>8}  {:<14} {}", "Per year", "Label", "Compounding");
    for period in list_supported_payment_frequencies() {
        println!(
            "{:>8}  {:<14} {}",
            period.periods_per_year,
            period.label,
            if period.is_compounding_period { "yes" } else { "" }
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.frequencies {
        print_frequencies();
        return Ok(());
    }

    let attrs = cli.loan_attributes()?;
    let periodic_payment = get_periodic_payment(&attrs).context("Invalid loan attributes")?;
    let per_diem = get_per_diem(&attrs).context("Invalid loan attributes")?;
    let schedule = get_payments(&attrs).context("Failed to generate schedule")?;

    if cli.json {
        let output = serde_json::json!({
            "periodicPayment": periodic_payment,
            "perDiem": per_diem,
            "summary": schedule.summary(),
            "payments": &schedule.payments,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Loan Amortization");
        println!("=================\n");
        println!("  Loan amount:      ${:.2}", attrs.loan_amount);
        println!("  Interest rate:    {}%", attrs.interest_rate);
        println!("  Periodic payment: ${:.2}", periodic_payment);
        println!("  Per diem:         ${:.2}", per_diem);
        println!();

        println!("{:>5} {:>12} {:>12} {:>12} {:>14}", "No.", "Date", "Interest", "Principal", "Balance");
        println!("{}", "-".repeat(59));
        for payment in &schedule {
            println!(
                "{:>5} {:>12} {:>12.2} {:>12.2} {:>14.2}",
                payment.payment_number, payment.date.to_string(), payment.interest, payment.principal, payment.balance,
            );
        }

        let summary = schedule.summary();
        println!("\nSummary:");
        println!("  Regular payments: {}", summary.regular_payments);
        println!("  Total interest:   ${:.2}", summary.total_interest);
        println!("  Total principal:  ${:.2}", summary.total_principal);
        println!("  Balance at term:  ${:.2}", summary.final_balance);
    }

    if let Some(ref path) = cli.csv {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        for payment in &schedule {
            writer.serialize(payment)?;
        }
        writer.flush()?;
        eprintln!("Schedule written to: {}", path.display());
    }

    Ok(())
}
