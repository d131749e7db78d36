/// Integer division rounding toward negative infinity.
///
/// ## Returns
/// - `Some(quotient)` on success.
/// - `None` if `rhs` is zero or the quotient overflows (`i64::MIN / -1`).
///
/// ## Example
/// ```
/// use alpha::util::num::floor_div_checked;
///
/// assert_eq!(floor_div_checked(7, 2), Some(3));
/// assert_eq!(floor_div_checked(-7, 2), Some(-4));
/// assert_eq!(floor_div_checked(7, -2), Some(-4));
/// assert_eq!(floor_div_checked(-7, -2), Some(3));
/// assert_eq!(floor_div_checked(-8, 2), Some(-4));
/// assert_eq!(floor_div_checked(1, 0), None);
/// assert_eq!(floor_div_checked(i64::MIN, -1), None);
/// ```
#[must_use]
pub const fn floor_div_checked(lhs: i64, rhs: i64) -> Option<i64> {
    let Some(quotient) = lhs.checked_div(rhs) else {
        return None;
    };

    if lhs % rhs != 0 && (lhs < 0) != (rhs < 0) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

/// Reads a supplied value as an integer.
///
/// Accepts what a person typing a number would reasonably send: surrounding
/// whitespace, an optional `+` or `-` sign, and single `_` separators between
/// digits.
///
/// ## Returns
/// - `Some(i64)` if the text is an integer that fits in an `i64`.
/// - `None` otherwise.
///
/// ## Example
/// ```
/// use alpha::util::num::parse_integer_input;
///
/// assert_eq!(parse_integer_input(" 42\n"), Some(42));
/// assert_eq!(parse_integer_input("-7"), Some(-7));
/// assert_eq!(parse_integer_input("+1_000"), Some(1000));
/// assert_eq!(parse_integer_input("1__0"), None);
/// assert_eq!(parse_integer_input("3.5"), None);
/// assert_eq!(parse_integer_input(""), None);
/// ```
#[must_use]
pub fn parse_integer_input(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    if !digits.chars().all(|c| c.is_ascii_digit() || c == '_') {
        return None;
    }

    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    format!("{sign}{cleaned}").parse().ok()
}
