//! Lender-favoring rounding for money amounts
//!
//! Every monetary output is rounded up (ceiling) to whole cents so that a
//! borrower is never under-charged by a fraction of a cent.

/// Decimal places used for money
pub const MONEY_DECIMALS: i32 = 2;

/// Round `amount` up to `decimals` places. Zero stays exactly zero.
pub fn round_up(amount: f64, decimals: i32) -> f64 {
    if amount == 0.0 {
        return 0.0;
    }
    let precision = 10f64.powi(decimals);
    (amount * precision).ceil() / precision
}

/// Round a money amount up to whole cents
pub fn round_money(amount: f64) -> f64 {
    round_up(amount, MONEY_DECIMALS)
}
