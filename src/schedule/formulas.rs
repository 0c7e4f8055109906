//! Periodic payment and per diem formulas

use super::rates::period_rate;
use super::rounding::round_money;

/// Fixed day count used for per diem interest, leap years included
pub const DAYS_IN_A_YEAR: u32 = 365;

/// Interest-only payment for one period, rounded up to the cent
///
/// Simple interest: the nominal annual rate is split evenly across the
/// payments in a year with no compounding adjustment.
pub fn interest_only_periodic_payment(
    loan_amount: f64,
    annual_rate_percent: f64,
    payments_per_year: u32,
) -> f64 {
    let annual_rate = annual_rate_percent / 100.0;
    let rate_per_period = annual_rate / payments_per_year as f64;
    round_money(loan_amount * rate_per_period)
}

/// Level payment that retires `loan_amount` over the amortization period
///
/// Standard annuity formula on the effective per-payment rate:
///
/// ```text
/// payment = P * j * (1 + j)^n / ((1 + j)^n - 1)
/// ```
///
/// Two cases bypass it and are returned unrounded:
/// - an amortization period under one month is a single bullet payment of the
///   full loan amount
/// - a non-positive rate spreads the loan evenly over the term (not the
///   amortization period)
pub fn amortized_periodic_payment(
    loan_amount: f64,
    annual_rate_percent: f64,
    compounding_periods_per_year: u32,
    payments_per_year: u32,
    amortization_period_months: u32,
    term_in_months: u32,
) -> f64 {
    if amortization_period_months < 1 {
        return loan_amount;
    }
    if annual_rate_percent <= 0.0 {
        return loan_amount / term_in_months as f64;
    }

    let rate = period_rate(annual_rate_percent, compounding_periods_per_year, payments_per_year);
    let periods = payments_per_year as f64 * amortization_period_months as f64 / 12.0;
    let growth = (rate + 1.0).powf(periods);

    round_money((loan_amount * rate * growth) / (growth - 1.0))
}

/// One day of interest on `loan_amount`, rounded up to the cent
pub fn per_diem(loan_amount: f64, annual_rate_percent: f64) -> f64 {
    interest_only_periodic_payment(loan_amount, annual_rate_percent, DAYS_IN_A_YEAR)
}
