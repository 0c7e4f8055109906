//! Batch schedule runner
//!
//! Computes schedules for many loans in parallel. Each loan is validated and
//! generated independently, so one invalid loan does not fail the batch.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::loan::{LoanAttributes, LoanRecord};
use crate::schedule::{get_payments, get_periodic_payment, Schedule};

/// Outcome of one loan in a batch run
#[derive(Debug)]
pub struct LoanResult {
    pub loan_id: String,
    pub periodic_payment: Result<f64>,
    pub schedule: Result<Schedule>,
}

impl LoanResult {
    /// Flattened summary row for reporting
    pub fn summary_row(&self) -> Option<LoanSummaryRow> {
        let periodic_payment = *self.periodic_payment.as_ref().ok()?;
        let summary = self.schedule.as_ref().ok()?.summary();
        Some(LoanSummaryRow {
            loan_id: self.loan_id.clone(),
            periodic_payment,
            regular_payments: summary.regular_payments,
            adjustment_interest: summary.adjustment_interest,
            total_interest: summary.total_interest,
            total_principal: summary.total_principal,
            final_balance: summary.final_balance,
            final_date: summary.final_date,
        })
    }
}

/// One line of a portfolio report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoanSummaryRow {
    #[serde(rename = "LoanID")]
    pub loan_id: String,
    pub periodic_payment: f64,
    pub regular_payments: u32,
    pub adjustment_interest: f64,
    pub total_interest: f64,
    pub total_principal: f64,
    pub final_balance: f64,
    pub final_date: Option<NaiveDate>,
}

/// Runs schedule calculations for a set of loans
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleRunner;

impl ScheduleRunner {
    pub fn new() -> Self {
        Self
    }

    /// Schedule for a single loan
    pub fn run(&self, attrs: &LoanAttributes) -> Result<Schedule> {
        get_payments(attrs)
    }

    /// Schedules for many loans, computed in parallel, in input order
    pub fn run_batch(&self, loans: &[LoanAttributes]) -> Vec<Result<Schedule>> {
        loans.par_iter().map(get_payments).collect()
    }

    /// Periodic payment and schedule for every loan of a portfolio
    pub fn run_portfolio(&self, loans: &[LoanRecord]) -> Vec<LoanResult> {
        loans
            .par_iter()
            .map(|loan| {
                let periodic_payment = get_periodic_payment(&loan.attributes);
                let schedule = get_payments(&loan.attributes);
                if let Err(ref e) = schedule {
                    log::warn!("Loan {} skipped: {}", loan.loan_id, e);
                }
                LoanResult {
                    loan_id: loan.loan_id.clone(),
                    periodic_payment,
                    schedule,
                }
            })
            .collect()
    }
}
