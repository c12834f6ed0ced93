/// Insert `separator` between every three digits of an integer string
///
/// A leading `-` is kept in front of the grouped digits.
///
/// # Examples
/// ```
/// use contracts::shared::number_format::group_thousands;
/// assert_eq!(group_thousands("1234567", '.'), "1.234.567");
/// assert_eq!(group_thousands("-1234", ' '), "-1 234");
/// assert_eq!(group_thousands("42", ' '), "42");
/// ```
pub fn group_thousands(integer_part: &str, separator: char) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }

    format!("{}{}", sign, result.chars().rev().collect::<String>())
}

/// Whole number with thousands grouped by `separator`
pub fn format_number(n: u64, separator: char) -> String {
    group_thousands(&n.to_string(), separator)
}
