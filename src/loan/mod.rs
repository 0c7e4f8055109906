//! Loan input data and loaders

mod attributes;
pub mod loader;

pub use attributes::LoanAttributes;
pub(crate) use attributes::{PaymentTerms, RepaymentMode, ScheduleTerms};
pub use loader::{load_loan_json, load_loans, load_loans_from_reader, LoanRecord};
