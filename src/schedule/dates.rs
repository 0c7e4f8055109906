//! Payment date stepping
//!
//! Thin calendar helpers over `chrono::NaiveDate` plus the stepping rules for
//! each supported payment frequency. Month arithmetic clamps to the last day
//! of shorter months (Jan 31 + 1 month = Feb 28/29).

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{AmortizationError, Result};
use crate::frequency::PaymentFrequency;

/// Semi-monthly references after this day of month roll to the 1st of the
/// following month, so both halves of every month exist
const SEMI_MONTHLY_LAST_ANCHOR_DAY: u32 = 28;

/// Days between the two payments inside one semi-monthly interval
const SEMI_MONTHLY_OFFSET_DAYS: i64 = 14;

/// Day of month at which a semi-monthly anchor counts as a second-half date
const SEMI_MONTHLY_MID_MONTH: u32 = 15;

fn out_of_range(date: NaiveDate, reason: String) -> AmortizationError {
    AmortizationError::DateOutOfRange { date, reason }
}

pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| out_of_range(date, format!("adding {} months", months)))
}

pub fn add_years(date: NaiveDate, years: u32) -> Result<NaiveDate> {
    let months = years
        .checked_mul(12)
        .ok_or_else(|| out_of_range(date, format!("adding {} years", years)))?;
    add_months(date, months)
}

pub fn add_weeks(date: NaiveDate, weeks: u32) -> Result<NaiveDate> {
    add_days(date, i64::from(weeks) * 7)
}

/// Add (or with a negative count, subtract) whole days
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or_else(|| out_of_range(date, format!("adding {} days", days)))
}

pub fn day_of_month(date: NaiveDate) -> u32 {
    date.day()
}

/// Whole days from `from` to `to` (negative when `to` is earlier)
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Date of payment number `step` (1-based) counted from `reference`
///
/// Every frequency except semi-monthly is a plain calendar offset. Semi-monthly
/// payments alternate between the anchor day and a point two weeks away from
/// it:
///
/// - a reference after the 28th is first moved to the 1st of the next month
/// - even steps land on the anchor day, `step / 2` months out
/// - odd steps land 14 days after the anchor when it is in the first half of
///   the month, otherwise 14 days before the next month's anchor
pub fn next_date(reference: NaiveDate, frequency: PaymentFrequency, step: u32) -> Result<NaiveDate> {
    if step == 0 {
        return Err(AmortizationError::invalid("stepNumber", "payment steps start at 1"));
    }

    let scaled = |factor: u32| {
        step.checked_mul(factor)
            .ok_or_else(|| out_of_range(reference, format!("stepping {} payments of {}", step, frequency)))
    };

    match frequency {
        PaymentFrequency::Annually => add_years(reference, step),
        PaymentFrequency::SemiAnnually => add_months(reference, scaled(6)?),
        PaymentFrequency::Quarterly => add_months(reference, scaled(3)?),
        PaymentFrequency::BiMonthly => add_months(reference, scaled(2)?),
        PaymentFrequency::Monthly => add_months(reference, step),
        PaymentFrequency::BiWeekly => add_weeks(reference, scaled(2)?),
        PaymentFrequency::Weekly => add_weeks(reference, step),
        PaymentFrequency::SemiMonthly => semi_monthly_date(reference, step),
    }
}

fn semi_monthly_date(reference: NaiveDate, step: u32) -> Result<NaiveDate> {
    let anchor = if day_of_month(reference) > SEMI_MONTHLY_LAST_ANCHOR_DAY {
        let first = reference
            .with_day(1)
            .ok_or_else(|| out_of_range(reference, "moving to first of month".to_string()))?;
        add_months(first, 1)?
    } else {
        reference
    };

    if step % 2 == 0 {
        return add_months(anchor, step / 2);
    }

    let interval_start = add_months(anchor, (step - 1) / 2)?;
    if day_of_month(anchor) < SEMI_MONTHLY_MID_MONTH {
        add_days(interval_start, SEMI_MONTHLY_OFFSET_DAYS)
    } else {
        add_months(add_days(interval_start, -SEMI_MONTHLY_OFFSET_DAYS)?, 1)
    }
}
