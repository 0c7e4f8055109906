//! Payment and schedule calculations

pub mod dates;
pub mod formulas;
mod generator;
mod payment;
pub mod rates;
pub mod rounding;

pub use dates::next_date;
pub use generator::ScheduleGenerator;
pub use payment::{Payment, Schedule, ScheduleSummary};

use crate::error::Result;
use crate::loan::LoanAttributes;
use formulas::per_diem;
use generator::required_payment;
use rounding::round_money;

/// Regular payment for the loan, rounded up to the cent
///
/// Interest-only loans pay the period's simple interest; amortized loans pay
/// the level annuity payment over the amortization period.
pub fn get_periodic_payment(attrs: &LoanAttributes) -> Result<f64> {
    let terms = attrs.payment_terms()?;
    Ok(round_money(required_payment(&terms)))
}

/// Full amortization schedule, starting with the period-0 adjustment payment
///
/// A preferred payment above the required payment is applied to principal;
/// one below it is ignored and the regular schedule is produced.
pub fn get_payments(attrs: &LoanAttributes) -> Result<Schedule> {
    ScheduleGenerator::new(attrs)?.generate()
}

/// One day of interest on the loan amount, using a 365-day year
pub fn get_per_diem(attrs: &LoanAttributes) -> Result<f64> {
    let base = attrs.base_terms()?;
    Ok(per_diem(base.loan_amount, base.interest_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AmortizationError;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn amortized_loan() -> LoanAttributes {
        LoanAttributes::amortized(10000.0, 10.0, 12, 2, 240)
            .with_dates(date(2018, 1, 1), date(2018, 1, 1))
            .with_term_months(12)
    }

    #[test]
    fn test_periodic_payment_rounds_up() {
        let mut attrs = amortized_loan();
        attrs.interest_only = true;
        assert_eq!(get_periodic_payment(&attrs).unwrap(), 83.34);

        attrs.interest_only = false;
        assert_eq!(get_periodic_payment(&attrs).unwrap(), 95.17);
    }

    #[test]
    fn test_periodic_payment_falls_with_compounding_frequency() {
        let payments: Vec<f64> = [12, 2, 1]
            .iter()
            .map(|&compounding| {
                let mut attrs = amortized_loan();
                attrs.compounding_periods_per_year = Some(compounding);
                get_periodic_payment(&attrs).unwrap()
            })
            .collect();
        assert_eq!(payments, vec![96.51, 95.17, 93.67]);
    }

    #[test]
    fn test_periodic_payment_rounds_straight_line_payment() {
        let mut attrs = amortized_loan();
        attrs.interest_rate = 0.0;
        // 10000 / 12 = 833.33...
        assert_eq!(get_periodic_payment(&attrs).unwrap(), 833.34);
    }

    #[test]
    fn test_interest_only_payment_needs_no_dates() {
        let attrs = LoanAttributes::interest_only(10000.0, 10.0, 4);
        assert_eq!(get_periodic_payment(&attrs).unwrap(), 250.0);
    }

    #[test]
    fn test_per_diem_ignores_mode() {
        let mut attrs = LoanAttributes::new(10000.0, 10.0);
        let expected = (10000.0_f64 * 10.0 / 100.0 / 365.0 * 100.0).ceil() / 100.0;
        assert_eq!(get_per_diem(&attrs).unwrap(), expected);

        attrs.interest_only = true;
        assert_eq!(get_per_diem(&attrs).unwrap(), expected);
    }

    #[test]
    fn test_first_entry_is_adjustment() {
        for interest_only in [true, false] {
            let mut attrs = amortized_loan();
            attrs.interest_only = interest_only;
            let schedule = get_payments(&attrs).unwrap();
            assert_eq!(schedule.payments[0].principal, 0.0);
            assert_eq!(schedule.payments[0].balance, attrs.loan_amount);
        }
    }

    #[test]
    fn test_invalid_input_fails_before_computation() {
        let mut attrs = amortized_loan();
        attrs.payment_frequency = Some(3);
        assert!(matches!(
            get_payments(&attrs).unwrap_err(),
            AmortizationError::InvalidFrequency { field: "paymentFrequency", value: 3 }
        ));

        let mut attrs = amortized_loan();
        attrs.loan_amount = -1.0;
        assert!(matches!(
            get_periodic_payment(&attrs).unwrap_err(),
            AmortizationError::InvalidAttributes { field: "loanAmount", .. }
        ));
        assert!(get_per_diem(&attrs).is_err());
    }
}
