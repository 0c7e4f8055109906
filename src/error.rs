//! Error types for amortization calculations

use chrono::NaiveDate;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AmortizationError>;

/// Errors reported by the amortization engine
///
/// Every variant is a local validation or input failure. Nothing here is
/// transient, so callers should not retry.
#[derive(Error, Debug)]
pub enum AmortizationError {
    /// Payment frequency or compounding periods outside the supported set
    #[error("Invalid frequency for {field}: {value}")]
    InvalidFrequency {
        field: &'static str,
        value: u32,
    },

    /// Missing or out-of-range loan attribute
    #[error("Invalid loan attribute {field}: {reason}")]
    InvalidAttributes {
        field: &'static str,
        reason: String,
    },

    /// Calendar arithmetic left the representable date range
    #[error("Date out of range from {date}: {reason}")]
    DateOutOfRange {
        date: NaiveDate,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AmortizationError {
    pub(crate) fn missing(field: &'static str) -> Self {
        AmortizationError::InvalidAttributes {
            field,
            reason: "required value is missing".to_string(),
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        AmortizationError::InvalidAttributes {
            field,
            reason: reason.into(),
        }
    }
}
