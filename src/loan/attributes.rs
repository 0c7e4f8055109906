//! Loan attributes supplied by callers and their validated working copies

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AmortizationError, Result};
use crate::frequency::{validate_compounding_periods, PaymentFrequency};

/// Terms of a loan as supplied by the caller
///
/// Field names follow the camelCase loan attribute format; snake_case keys
/// are accepted as aliases. Only the fields an operation needs are checked,
/// so a per diem request can omit dates and frequencies entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanAttributes {
    /// Original principal
    #[serde(alias = "loan_amount")]
    pub loan_amount: f64,

    /// Payment the borrower would like to make each period. Anything above
    /// the required payment goes to principal; anything below is ignored.
    #[serde(
        default,
        alias = "preferred_payment",
        alias = "regularPayment",
        alias = "regular_payment"
    )]
    pub preferred_payment: Option<f64>,

    /// Date the loan funds
    #[serde(default, alias = "start_date")]
    pub start_date: Option<NaiveDate>,

    /// Date amortization starts. Interest between the start date and this
    /// date is charged as the adjustment payment.
    #[serde(default, alias = "adjustment_date")]
    pub adjustment_date: Option<NaiveDate>,

    /// Months after the adjustment date at which payments stop and any
    /// remaining principal falls due
    #[serde(default, alias = "term_in_months")]
    pub term_in_months: Option<u32>,

    /// Interest-only loans have no forced amortization
    #[serde(default, alias = "interest_only")]
    pub interest_only: bool,

    /// Months over which principal fully amortizes. Zero means a single
    /// payment of the whole loan amount.
    #[serde(default, alias = "amortization_period_months")]
    pub amortization_period_months: Option<u32>,

    /// Times a year interest compounds, 1 to 52. Canadian mortgages use 2,
    /// American loans typically 12.
    #[serde(default, alias = "compounding_periods_per_year")]
    pub compounding_periods_per_year: Option<u32>,

    /// Payments per year; one of 1, 2, 4, 6, 12, 24, 26, 52
    #[serde(default, alias = "payment_frequency")]
    pub payment_frequency: Option<u32>,

    /// Nominal annual rate as a percent (10.0 for 10%)
    #[serde(alias = "interest_rate")]
    pub interest_rate: f64,
}

impl LoanAttributes {
    /// Minimal attributes: enough for a per diem calculation
    pub fn new(loan_amount: f64, interest_rate: f64) -> Self {
        Self {
            loan_amount,
            preferred_payment: None,
            start_date: None,
            adjustment_date: None,
            term_in_months: None,
            interest_only: false,
            amortization_period_months: None,
            compounding_periods_per_year: None,
            payment_frequency: None,
            interest_rate,
        }
    }

    /// Interest-only loan paid `payment_frequency` times a year
    pub fn interest_only(loan_amount: f64, interest_rate: f64, payment_frequency: u32) -> Self {
        Self {
            interest_only: true,
            payment_frequency: Some(payment_frequency),
            ..Self::new(loan_amount, interest_rate)
        }
    }

    /// Amortizing loan
    pub fn amortized(
        loan_amount: f64,
        interest_rate: f64,
        payment_frequency: u32,
        compounding_periods_per_year: u32,
        amortization_period_months: u32,
    ) -> Self {
        Self {
            payment_frequency: Some(payment_frequency),
            compounding_periods_per_year: Some(compounding_periods_per_year),
            amortization_period_months: Some(amortization_period_months),
            ..Self::new(loan_amount, interest_rate)
        }
    }

    pub fn with_dates(mut self, start_date: NaiveDate, adjustment_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self.adjustment_date = Some(adjustment_date);
        self
    }

    pub fn with_term_months(mut self, term_in_months: u32) -> Self {
        self.term_in_months = Some(term_in_months);
        self
    }

    pub fn with_preferred_payment(mut self, preferred_payment: f64) -> Self {
        self.preferred_payment = Some(preferred_payment);
        self
    }

    /// Check everything a full schedule needs
    pub fn validate(&self) -> Result<()> {
        self.schedule_terms().map(|_| ())
    }

    /// Principal and rate, the inputs shared by every operation
    pub(crate) fn base_terms(&self) -> Result<BaseTerms> {
        if !self.loan_amount.is_finite() || self.loan_amount <= 0.0 {
            return Err(AmortizationError::invalid(
                "loanAmount",
                format!("must be a positive amount, got {}", self.loan_amount),
            ));
        }
        if !self.interest_rate.is_finite() {
            return Err(AmortizationError::invalid(
                "interestRate",
                format!("must be a finite percentage, got {}", self.interest_rate),
            ));
        }

        let preferred_payment = self.preferred_payment.unwrap_or(0.0);
        if !preferred_payment.is_finite() || preferred_payment < 0.0 {
            return Err(AmortizationError::invalid(
                "preferredPayment",
                format!("must be zero or a positive amount, got {}", preferred_payment),
            ));
        }

        Ok(BaseTerms {
            loan_amount: self.loan_amount,
            interest_rate: self.interest_rate,
            preferred_payment,
        })
    }

    /// Inputs for the periodic payment calculation
    pub(crate) fn payment_terms(&self) -> Result<PaymentTerms> {
        let base = self.base_terms()?;
        let frequency = PaymentFrequency::try_from(
            self.payment_frequency
                .ok_or_else(|| AmortizationError::missing("paymentFrequency"))?,
        )?;

        let mode = if self.interest_only {
            RepaymentMode::InterestOnly
        } else {
            let amortization_period_months = self
                .amortization_period_months
                .ok_or_else(|| AmortizationError::missing("amortizationPeriodMonths"))?;
            let compounding_periods_per_year = validate_compounding_periods(
                self.compounding_periods_per_year
                    .ok_or_else(|| AmortizationError::missing("compoundingPeriodsPerYear"))?,
            )?;
            RepaymentMode::Amortized {
                amortization_period_months,
                compounding_periods_per_year,
                term_in_months: self.required_term()?,
            }
        };

        Ok(PaymentTerms { base, frequency, mode })
    }

    /// Inputs for a full schedule
    pub(crate) fn schedule_terms(&self) -> Result<ScheduleTerms> {
        let payment = self.payment_terms()?;
        let term_in_months = self.required_term()?;

        let start_date = self
            .start_date
            .ok_or_else(|| AmortizationError::missing("startDate"))?;
        let adjustment_date = self
            .adjustment_date
            .ok_or_else(|| AmortizationError::missing("adjustmentDate"))?;
        if adjustment_date < start_date {
            return Err(AmortizationError::invalid(
                "adjustmentDate",
                format!("{} is before the start date {}", adjustment_date, start_date),
            ));
        }

        Ok(ScheduleTerms {
            payment,
            start_date,
            adjustment_date,
            term_in_months,
        })
    }

    fn required_term(&self) -> Result<u32> {
        match self.term_in_months {
            None => Err(AmortizationError::missing("termInMonths")),
            Some(0) => Err(AmortizationError::invalid("termInMonths", "must be at least one month")),
            Some(term) => Ok(term),
        }
    }
}

/// Validated principal, rate and preferred payment (absent payment = 0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BaseTerms {
    pub loan_amount: f64,
    pub interest_rate: f64,
    pub preferred_payment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum RepaymentMode {
    InterestOnly,
    Amortized {
        amortization_period_months: u32,
        compounding_periods_per_year: u32,
        term_in_months: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PaymentTerms {
    pub base: BaseTerms,
    pub frequency: PaymentFrequency,
    pub mode: RepaymentMode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScheduleTerms {
    pub payment: PaymentTerms,
    pub start_date: NaiveDate,
    pub adjustment_date: NaiveDate,
    pub term_in_months: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn field_of(err: AmortizationError) -> &'static str {
        match err {
            AmortizationError::InvalidAttributes { field, .. } => field,
            AmortizationError::InvalidFrequency { field, .. } => field,
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_preferred_payment_defaults_to_zero() {
        let base = LoanAttributes::new(10000.0, 10.0).base_terms().unwrap();
        assert_eq!(base.preferred_payment, 0.0);
    }

    #[test]
    fn test_rejects_bad_loan_amount() {
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = LoanAttributes::new(amount, 10.0).base_terms().unwrap_err();
            assert_eq!(field_of(err), "loanAmount");
        }
    }

    #[test]
    fn test_rejects_negative_preferred_payment() {
        let attrs = LoanAttributes::new(10000.0, 10.0).with_preferred_payment(-1.0);
        assert_eq!(field_of(attrs.base_terms().unwrap_err()), "preferredPayment");
    }

    #[test]
    fn test_payment_terms_require_frequency() {
        let err = LoanAttributes::new(10000.0, 10.0).payment_terms().unwrap_err();
        assert_eq!(field_of(err), "paymentFrequency");

        let err = LoanAttributes::interest_only(10000.0, 10.0, 13).payment_terms().unwrap_err();
        assert!(matches!(err, AmortizationError::InvalidFrequency { value: 13, .. }));
    }

    #[test]
    fn test_amortized_terms_checked() {
        let attrs = LoanAttributes::amortized(10000.0, 10.0, 12, 0, 240).with_term_months(12);
        assert!(matches!(
            attrs.payment_terms().unwrap_err(),
            AmortizationError::InvalidFrequency { field: "compoundingPeriodsPerYear", value: 0 }
        ));

        let attrs = LoanAttributes::amortized(10000.0, 10.0, 12, 2, 240);
        assert_eq!(field_of(attrs.payment_terms().unwrap_err()), "termInMonths");

        let attrs = attrs.with_term_months(0);
        assert_eq!(field_of(attrs.payment_terms().unwrap_err()), "termInMonths");
    }

    #[test]
    fn test_interest_only_ignores_amortization_fields() {
        let terms = LoanAttributes::interest_only(10000.0, 10.0, 12).payment_terms().unwrap();
        assert_eq!(terms.mode, RepaymentMode::InterestOnly);
        assert_eq!(terms.frequency, PaymentFrequency::Monthly);
    }

    #[test]
    fn test_schedule_terms_require_dates_in_order() {
        let attrs = LoanAttributes::interest_only(10000.0, 10.0, 12).with_term_months(12);
        assert_eq!(field_of(attrs.schedule_terms().unwrap_err()), "startDate");

        let reversed = attrs.clone().with_dates(date(2018, 1, 15), date(2018, 1, 10));
        assert_eq!(field_of(reversed.schedule_terms().unwrap_err()), "adjustmentDate");

        let ordered = attrs.with_dates(date(2018, 1, 10), date(2018, 1, 15));
        assert!(ordered.validate().is_ok());
    }

    #[test]
    fn test_deserialize_camel_case_with_regular_payment_alias() {
        let json = r#"{
            "loanAmount": 10000,
            "regularPayment": 150,
            "startDate": "2018-01-01",
            "adjustmentDate": "2018-01-01",
            "termInMonths": 12,
            "interestOnly": false,
            "amortizationPeriodMonths": 240,
            "compoundingPeriodsPerYear": 2,
            "paymentFrequency": 12,
            "interestRate": 10
        }"#;
        let attrs: LoanAttributes = serde_json::from_str(json).unwrap();
        assert_eq!(attrs.preferred_payment, Some(150.0));
        assert_eq!(attrs.start_date, Some(date(2018, 1, 1)));
        assert_eq!(attrs.payment_frequency, Some(12));
        assert!(attrs.validate().is_ok());
    }

    #[test]
    fn test_deserialize_minimal() {
        let attrs: LoanAttributes =
            serde_json::from_str(r#"{"loan_amount": 10000, "interest_rate": 10}"#).unwrap();
        assert_eq!(attrs, LoanAttributes::new(10000.0, 10.0));
    }
}
