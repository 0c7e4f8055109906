//! Schedule output records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// 0 for the adjustment payment, then 1..N
    pub payment_number: u32,

    pub date: NaiveDate,

    /// Interest charged for the period
    pub interest: f64,

    /// Principal repaid by this payment
    pub principal: f64,

    /// Principal still owed after this payment
    pub balance: f64,
}

impl Payment {
    /// Total amount paid for the period
    pub fn amount(&self) -> f64 {
        self.interest + self.principal
    }
}

/// Ordered list of payments, adjustment payment first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub payments: Vec<Payment>,
}

impl Schedule {
    pub fn new() -> Self {
        Self { payments: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            payments: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Payment> {
        self.payments.iter()
    }

    /// The period-0 adjustment payment
    pub fn adjustment(&self) -> Option<&Payment> {
        self.payments.first()
    }

    /// Regular payments, excluding the adjustment payment
    pub fn regular_payments(&self) -> &[Payment] {
        self.payments.get(1..).unwrap_or(&[])
    }

    /// Aggregate totals over the whole schedule
    pub fn summary(&self) -> ScheduleSummary {
        let total_interest: f64 = self.payments.iter().map(|p| p.interest).sum();
        let total_principal: f64 = self.payments.iter().map(|p| p.principal).sum();
        let adjustment_interest = self.adjustment().map(|p| p.interest).unwrap_or(0.0);

        let final_balance = self.payments.last().map(|p| p.balance).unwrap_or(0.0);
        let final_date = self.payments.last().map(|p| p.date);

        ScheduleSummary {
            regular_payments: self.regular_payments().len() as u32,
            adjustment_interest,
            total_interest,
            total_principal,
            total_paid: total_interest + total_principal,
            final_balance,
            final_date,
        }
    }
}

impl IntoIterator for Schedule {
    type Item = Payment;
    type IntoIter = std::vec::IntoIter<Payment>;

    fn into_iter(self) -> Self::IntoIter {
        self.payments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Payment;
    type IntoIter = std::slice::Iter<'a, Payment>;

    fn into_iter(self) -> Self::IntoIter {
        self.payments.iter()
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub regular_payments: u32,
    pub adjustment_interest: f64,
    /// Interest including the adjustment payment
    pub total_interest: f64,
    pub total_principal: f64,
    pub total_paid: f64,
    /// Principal outstanding when the term ends (due as a balloon)
    pub final_balance: f64,
    pub final_date: Option<NaiveDate>,
}
