//! Conversion of nominal annual rates into effective per-payment rates

/// Effective interest rate charged once per payment period
///
/// `annual_rate_percent` is the nominal annual rate as a percent (8.25 for
/// 8.25%), compounded `compounding_periods_per_year` times a year. The result is
/// a decimal rate (0.0081 for 0.81%) and is deliberately left unrounded.
///
/// Both period counts must be non-zero; callers validate them upstream.
pub fn period_rate(
    annual_rate_percent: f64,
    compounding_periods_per_year: u32,
    payments_per_year: u32,
) -> f64 {
    debug_assert!(compounding_periods_per_year > 0 && payments_per_year > 0);

    let compounding = compounding_periods_per_year as f64;
    let payments = payments_per_year as f64;

    (1.0 + annual_rate_percent / (compounding * 100.0)).powf(compounding / payments) - 1.0
}
