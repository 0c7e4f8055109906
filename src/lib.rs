//! Loan Amortization - periodic payments and payment schedules for term loans
//!
//! This library provides:
//! - Periodic payment amounts for amortized and interest-only loans
//! - Full payment schedules with interest/principal/balance per payment
//! - Per diem interest and the adjustment payment from funding to the first
//!   amortization date
//! - Eight payment frequencies from weekly to annually, with any compounding
//!   frequency between 1 and 52 periods a year
//! - Batch schedule runs over loan portfolios
//!
//! All money outputs are rounded up to the cent.

pub mod error;
pub mod frequency;
pub mod loan;
pub mod runner;
pub mod schedule;

// Re-export commonly used types
pub use error::{AmortizationError, Result};
pub use frequency::{list_supported_payment_frequencies, PaymentFrequency, TimePeriod};
pub use loan::{LoanAttributes, LoanRecord};
pub use runner::ScheduleRunner;
pub use schedule::{get_payments, get_per_diem, get_periodic_payment, Payment, Schedule, ScheduleSummary};
