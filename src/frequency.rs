//! Supported payment frequencies and compounding period checks

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AmortizationError, Result};

/// Smallest accepted number of compounding periods per year
pub const MIN_COMPOUNDING_PERIODS: u32 = 1;

/// Largest accepted number of compounding periods per year (weekly)
pub const MAX_COMPOUNDING_PERIODS: u32 = 52;

/// How often a payment falls due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentFrequency {
    Weekly,
    BiWeekly,
    /// Twice a month, roughly on the start date and two weeks later
    SemiMonthly,
    Monthly,
    /// Every second month
    BiMonthly,
    Quarterly,
    SemiAnnually,
    Annually,
}

impl PaymentFrequency {
    /// Number of payments per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Weekly => 52,
            PaymentFrequency::BiWeekly => 26,
            PaymentFrequency::SemiMonthly => 24,
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::BiMonthly => 6,
            PaymentFrequency::Quarterly => 4,
            PaymentFrequency::SemiAnnually => 2,
            PaymentFrequency::Annually => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentFrequency::Weekly => "weekly",
            PaymentFrequency::BiWeekly => "bi-weekly",
            PaymentFrequency::SemiMonthly => "semi-monthly",
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::BiMonthly => "bi-monthly",
            PaymentFrequency::Quarterly => "quarterly",
            PaymentFrequency::SemiAnnually => "semi-annually",
            PaymentFrequency::Annually => "annually",
        }
    }

    /// Whether the frequency is commonly used as a compounding period
    /// (Canadian mortgages compound semi-annually, US loans monthly)
    pub fn is_compounding_period(&self) -> bool {
        matches!(
            self,
            PaymentFrequency::Monthly | PaymentFrequency::SemiAnnually | PaymentFrequency::Annually
        )
    }

    /// Descriptor for this frequency
    pub fn time_period(&self) -> TimePeriod {
        TimePeriod {
            periods_per_year: self.periods_per_year(),
            label: self.label(),
            is_compounding_period: self.is_compounding_period(),
        }
    }
}

impl TryFrom<u32> for PaymentFrequency {
    type Error = AmortizationError;

    fn try_from(periods_per_year: u32) -> Result<Self> {
        match periods_per_year {
            52 => Ok(PaymentFrequency::Weekly),
            26 => Ok(PaymentFrequency::BiWeekly),
            24 => Ok(PaymentFrequency::SemiMonthly),
            12 => Ok(PaymentFrequency::Monthly),
            6 => Ok(PaymentFrequency::BiMonthly),
            4 => Ok(PaymentFrequency::Quarterly),
            2 => Ok(PaymentFrequency::SemiAnnually),
            1 => Ok(PaymentFrequency::Annually),
            other => Err(AmortizationError::InvalidFrequency {
                field: "paymentFrequency",
                value: other,
            }),
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Public descriptor of a supported payment frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimePeriod {
    pub periods_per_year: u32,
    pub label: &'static str,
    pub is_compounding_period: bool,
}

/// All supported payment frequencies, most frequent first
pub static SUPPORTED_FREQUENCIES: [PaymentFrequency; 8] = [
    PaymentFrequency::Weekly,
    PaymentFrequency::BiWeekly,
    PaymentFrequency::SemiMonthly,
    PaymentFrequency::Monthly,
    PaymentFrequency::BiMonthly,
    PaymentFrequency::Quarterly,
    PaymentFrequency::SemiAnnually,
    PaymentFrequency::Annually,
];

/// Descriptors for every supported payment frequency, in display order
pub fn list_supported_payment_frequencies() -> Vec<TimePeriod> {
    SUPPORTED_FREQUENCIES.iter().map(|f| f.time_period()).collect()
}

/// Check that a compounding frequency lies in [1, 52] periods per year
pub fn validate_compounding_periods(periods_per_year: u32) -> Result<u32> {
    if (MIN_COMPOUNDING_PERIODS..=MAX_COMPOUNDING_PERIODS).contains(&periods_per_year) {
        Ok(periods_per_year)
    } else {
        Err(AmortizationError::InvalidFrequency {
            field: "compoundingPeriodsPerYear",
            value: periods_per_year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_frequency_order() {
        let periods: Vec<u32> = list_supported_payment_frequencies()
            .iter()
            .map(|p| p.periods_per_year)
            .collect();
        assert_eq!(periods, vec![52, 26, 24, 12, 6, 4, 2, 1]);
    }

    #[test]
    fn test_compounding_flags() {
        let compounding: Vec<&str> = list_supported_payment_frequencies()
            .iter()
            .filter(|p| p.is_compounding_period)
            .map(|p| p.label)
            .collect();
        assert_eq!(compounding, vec!["monthly", "semi-annually", "annually"]);
    }

    #[test]
    fn test_round_trip_from_periods() {
        for freq in SUPPORTED_FREQUENCIES.iter() {
            let parsed = PaymentFrequency::try_from(freq.periods_per_year()).unwrap();
            assert_eq!(parsed, *freq);
        }
    }

    #[test]
    fn test_unsupported_frequency() {
        for value in [0, 3, 13, 365] {
            let err = PaymentFrequency::try_from(value).unwrap_err();
            assert!(matches!(err, AmortizationError::InvalidFrequency { value: v, .. } if v == value));
        }
    }

    #[test]
    fn test_compounding_range() {
        assert!(validate_compounding_periods(1).is_ok());
        assert!(validate_compounding_periods(52).is_ok());
        assert!(validate_compounding_periods(0).is_err());
        assert!(validate_compounding_periods(53).is_err());
    }
}
