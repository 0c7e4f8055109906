//! Load loans from CSV portfolios and JSON documents

use chrono::NaiveDate;
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::LoanAttributes;
use crate::error::Result;

/// A loan from a portfolio file, tagged with its identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub loan_id: String,
    pub attributes: LoanAttributes,
}

/// Raw CSV row matching the portfolio columns
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "LoanID")]
    loan_id: String,
    #[serde(rename = "LoanAmount")]
    loan_amount: f64,
    #[serde(rename = "PreferredPayment", default)]
    preferred_payment: Option<f64>,
    #[serde(rename = "StartDate", default)]
    start_date: Option<NaiveDate>,
    #[serde(rename = "AdjustmentDate", default)]
    adjustment_date: Option<NaiveDate>,
    #[serde(rename = "TermInMonths", default)]
    term_in_months: Option<u32>,
    #[serde(rename = "InterestOnly", default)]
    interest_only: bool,
    #[serde(rename = "AmortizationPeriodMonths", default)]
    amortization_period_months: Option<u32>,
    #[serde(rename = "CompoundingPeriodsPerYear", default)]
    compounding_periods_per_year: Option<u32>,
    #[serde(rename = "PaymentFrequency", default)]
    payment_frequency: Option<u32>,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
}

impl CsvRow {
    fn into_record(self) -> LoanRecord {
        LoanRecord {
            loan_id: self.loan_id,
            attributes: LoanAttributes {
                loan_amount: self.loan_amount,
                preferred_payment: self.preferred_payment,
                start_date: self.start_date,
                adjustment_date: self.adjustment_date,
                term_in_months: self.term_in_months,
                interest_only: self.interest_only,
                amortization_period_months: self.amortization_period_months,
                compounding_periods_per_year: self.compounding_periods_per_year,
                payment_frequency: self.payment_frequency,
                interest_rate: self.interest_rate,
            },
        }
    }
}

/// Load all loans from a CSV file
pub fn load_loans<P: AsRef<Path>>(path: P) -> Result<Vec<LoanRecord>> {
    let file = File::open(path)?;
    load_loans_from_reader(file)
}

/// Load loans from any reader (e.g., string buffer, network stream)
///
/// Rows are parsed but not validated; each loan is checked when its schedule
/// is computed so one bad row does not reject the whole portfolio.
pub fn load_loans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<LoanRecord>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut loans = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        loans.push(row.into_record());
    }

    log::debug!("Loaded {} loans", loans.len());
    Ok(loans)
}

/// Load a single loan from a JSON document
pub fn load_loan_json<P: AsRef<Path>>(path: P) -> Result<LoanAttributes> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
