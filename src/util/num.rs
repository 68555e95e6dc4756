/// Parses a numeric literal.
///
/// A literal is numeric when it starts with an ASCII digit or `.` and the
/// whole text is a valid, finite `f64`. This accepts `42`, `3.14`, `.5`, `5.`
/// and `2e3`, and rejects `inf`, `NaN`, `1_000` and `12.3.4`. Literals too
/// large to represent, such as `1e400`, are rejected rather than rounded to
/// infinity.
///
/// ## Parameters
/// - `text`: The literal as it appeared in the source.
///
/// ## Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the text is not a decimal number or is out of range.
///
/// ## Example
/// ```
/// use calculation::util::num::parse_number;
///
/// assert_eq!(parse_number("3.5"), Some(3.5));
/// assert_eq!(parse_number(".25"), Some(0.25));
/// assert_eq!(parse_number("inf"), None);
/// assert_eq!(parse_number("12.3.4"), None);
/// assert_eq!(parse_number("1e400"), None);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let first = text.chars().next()?;
    if !(first.is_ascii_digit() || first == '.') {
        return None;
    }
    text.parse().ok().filter(|value: &f64| value.is_finite())
}

/// Renders a result with a fixed number of decimal places.
///
/// Non-finite values are rendered as `inf`, `-inf` and `NaN`.
///
/// ## Example
/// ```
/// use calculation::util::num::format_result;
///
/// assert_eq!(format_result(14.0, 2), "14.00");
/// assert_eq!(format_result(2.0 / 3.0, 3), "0.667");
/// assert_eq!(format_result(f64::INFINITY, 2), "inf");
/// ```
#[must_use]
pub fn format_result(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}
