//! Number formatting for dashboard tables
//!
//! Thousands are separated by a space, decimals by a dot.

use contracts::shared::number_format::{format_number, group_thousands};

const THOUSANDS_SEPARATOR: char = ' ';

/// Money with 2 decimals and a thousands separator
///
/// # Example
/// ```ignore
/// assert_eq!(format_money(1234567.891), "1 234 567.89");
/// assert_eq!(format_money(-123.4), "-123.40");
/// ```
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    match formatted.split_once('.') {
        Some((integer, decimals)) => {
            format!("{}.{}", group_thousands(integer, THOUSANDS_SEPARATOR), decimals)
        }
        None => group_thousands(&formatted, THOUSANDS_SEPARATOR),
    }
}

/// Whole count with a thousands separator: 12345 -> "12 345"
pub fn format_count(value: u64) -> String {
    format_number(value, THOUSANDS_SEPARATOR)
}
