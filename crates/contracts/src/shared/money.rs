/// Round a currency amount to two decimal places (half away from zero)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Average order value: revenue per transaction, rounded to cents.
///
/// Returns `0.0` when there are no transactions instead of `NaN`/`inf`.
pub fn average_order_value(revenue: f64, transactions: u64) -> f64 {
    if transactions == 0 {
        return 0.0;
    }
    round2(revenue / transactions as f64)
}
