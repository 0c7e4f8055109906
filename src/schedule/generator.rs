//! Schedule generation for interest-only and amortized loans

use log::{debug, trace, warn};

use super::dates::{days_between, next_date};
use super::formulas::{amortized_periodic_payment, interest_only_periodic_payment, per_diem};
use super::payment::{Payment, Schedule};
use super::rates::period_rate;
use super::rounding::round_money;
use crate::error::{AmortizationError, Result};
use crate::loan::{LoanAttributes, PaymentTerms, RepaymentMode, ScheduleTerms};

/// Payments reserved up front; longer schedules grow as they are built
const PREALLOCATED_PAYMENTS: usize = 1024;

/// Builds the ordered payment list for one loan
///
/// Works on a validated copy of the caller's attributes; the caller's
/// [`LoanAttributes`] are never modified.
#[derive(Debug, Clone)]
pub struct ScheduleGenerator {
    terms: ScheduleTerms,
}

impl ScheduleGenerator {
    /// Validate the attributes needed for a schedule
    pub fn new(attrs: &LoanAttributes) -> Result<Self> {
        Ok(Self {
            terms: attrs.schedule_terms()?,
        })
    }

    /// Number of regular payments in the term. May be fractional, in which
    /// case the last partial period is dropped.
    pub fn payments_in_term(&self) -> f64 {
        (self.terms.term_in_months as f64 / 12.0) * self.terms.payment.frequency.periods_per_year() as f64
    }

    /// Number of the last regular payment. Fails when the term would end past
    /// the last representable calendar date.
    fn last_payment_number(&self) -> Result<u32> {
        let frequency = self.terms.payment.frequency;
        let total = self.payments_in_term().floor();
        if total > f64::from(u32::MAX) {
            return Err(AmortizationError::DateOutOfRange {
                date: self.terms.adjustment_date,
                reason: format!("{} {} payments", total, frequency),
            });
        }

        let last = total as u32;
        if last > 0 {
            next_date(self.terms.adjustment_date, frequency, last)?;
        }
        Ok(last)
    }

    fn empty_schedule(last_payment: u32) -> Schedule {
        Schedule::with_capacity((last_payment as usize).min(PREALLOCATED_PAYMENTS) + 1)
    }

    /// Full schedule: the adjustment payment followed by the regular payments
    pub fn generate(&self) -> Result<Schedule> {
        let payment = &self.terms.payment;
        debug!(
            "Generating {} schedule: amount={:.2} rate={}% frequency={} term={} months",
            if payment.mode == RepaymentMode::InterestOnly { "interest-only" } else { "amortized" },
            payment.base.loan_amount,
            payment.base.interest_rate,
            payment.frequency,
            self.terms.term_in_months,
        );

        let schedule = match payment.mode {
            RepaymentMode::InterestOnly => self.interest_only_payments()?,
            RepaymentMode::Amortized {
                compounding_periods_per_year,
                ..
            } => self.amortized_payments(compounding_periods_per_year)?,
        };

        debug!("Generated {} payments", schedule.len());
        Ok(schedule)
    }

    /// Period 0: interest accrued from funding to the adjustment date
    pub fn adjustment_payment(&self) -> Payment {
        let base = &self.terms.payment.base;
        let days = days_between(self.terms.start_date, self.terms.adjustment_date);
        let amount = per_diem(base.loan_amount, base.interest_rate) * days as f64;

        Payment {
            payment_number: 0,
            date: self.terms.adjustment_date,
            interest: round_money(amount),
            principal: 0.0,
            balance: base.loan_amount,
        }
    }

    /// Interest is recalculated each period on the remaining principal, so a
    /// preferred payment above the interest due reduces later interest. The
    /// schedule always runs the full term.
    fn interest_only_payments(&self) -> Result<Schedule> {
        let base = &self.terms.payment.base;
        let frequency = self.terms.payment.frequency;
        let last_payment = self.last_payment_number()?;

        let first_interest =
            interest_only_periodic_payment(base.loan_amount, base.interest_rate, frequency.periods_per_year());
        if base.preferred_payment > 0.0 && base.preferred_payment < first_interest {
            warn!(
                "Preferred payment {:.2} is below the interest due {:.2}; paying interest only",
                base.preferred_payment, first_interest
            );
        }

        let mut schedule = Self::empty_schedule(last_payment);
        schedule.push(self.adjustment_payment());

        let mut remaining = base.loan_amount;
        let mut payment_number: u32 = 1;

        while payment_number <= last_payment {
            let date = next_date(self.terms.adjustment_date, frequency, payment_number)?;
            let interest =
                interest_only_periodic_payment(remaining, base.interest_rate, frequency.periods_per_year());
            let payment_amount = base.preferred_payment.max(interest);

            let principal = (payment_amount - interest).min(remaining);
            let balance = remaining - principal;
            remaining = balance;

            trace!(
                "Payment {} on {}: interest={:.2} principal={:.2} balance={:.2}",
                payment_number, date, interest, principal, balance
            );
            schedule.push(Payment {
                payment_number,
                date,
                interest,
                principal,
                balance,
            });

            payment_number += 1;
        }

        Ok(schedule)
    }

    /// Level payments on a fixed per-period rate. Stops early once the
    /// balance is paid off, so the schedule can be shorter than the term.
    fn amortized_payments(&self, compounding_periods_per_year: u32) -> Result<Schedule> {
        let terms = &self.terms.payment;
        let base = &terms.base;
        let frequency = terms.frequency;
        let last_payment = self.last_payment_number()?;

        let required = required_payment(terms);
        let payment_amount = if base.preferred_payment < required {
            if base.preferred_payment > 0.0 {
                warn!(
                    "Preferred payment {:.2} is below the required payment {:.2}; using the required payment",
                    base.preferred_payment, required
                );
            }
            required
        } else {
            base.preferred_payment
        };

        let rate = period_rate(base.interest_rate, compounding_periods_per_year, frequency.periods_per_year());

        let mut schedule = Self::empty_schedule(last_payment);
        schedule.push(self.adjustment_payment());

        let mut balance = base.loan_amount;
        let mut payment_number: u32 = 1;

        while payment_number <= last_payment && balance > 0.0 {
            let date = next_date(self.terms.adjustment_date, frequency, payment_number)?;
            let interest = round_money(balance * rate);

            let principal = (payment_amount - interest).min(balance);
            balance -= principal;

            trace!(
                "Payment {} on {}: interest={:.2} principal={:.2} balance={:.2}",
                payment_number, date, interest, principal, balance
            );
            schedule.push(Payment {
                payment_number,
                date,
                interest,
                principal,
                balance,
            });

            payment_number += 1;
        }

        if balance <= 0.0 {
            debug!("Loan paid off after {} payments", payment_number - 1);
        }

        Ok(schedule)
    }
}

/// Unrounded required payment for the loan's repayment mode
pub(crate) fn required_payment(terms: &PaymentTerms) -> f64 {
    let base = &terms.base;
    let payments_per_year = terms.frequency.periods_per_year();

    match terms.mode {
        RepaymentMode::InterestOnly => {
            interest_only_periodic_payment(base.loan_amount, base.interest_rate, payments_per_year)
        }
        RepaymentMode::Amortized {
            amortization_period_months,
            compounding_periods_per_year,
            term_in_months,
        } => amortized_periodic_payment(
            base.loan_amount,
            base.interest_rate,
            compounding_periods_per_year,
            payments_per_year,
            amortization_period_months,
            term_in_months,
        ),
    }
}
