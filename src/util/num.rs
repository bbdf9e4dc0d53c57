/// Returns `true` if `text` follows the operand grammar.
///
/// The grammar is an optional leading `+` or `-`, then a non-empty run of
/// decimal digits containing at most one `.` and at least one digit. The
/// tokenizer never emits the signed form (a sign always becomes its own
/// operator token), but operands built by hand may carry one.
///
/// ## Example
/// ```
/// use treecalc::util::num::is_operand_text;
///
/// assert!(is_operand_text("42"));
/// assert!(is_operand_text("3.25"));
/// assert!(is_operand_text("7."));
/// assert!(is_operand_text("-4"));
/// assert!(!is_operand_text("1.2.3"));
/// assert!(!is_operand_text("-"));
/// assert!(!is_operand_text("1e5"));
/// ```
#[must_use]
pub fn is_operand_text(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    let mut seen_dot = false;
    let mut seen_digit = false;
    for ch in unsigned.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

/// Parses operand text into an `f64`.
///
/// ## Returns
/// - `Some(f64)`: The value, if `text` satisfies [`is_operand_text`].
/// - `None`: Otherwise.
///
/// ## Example
/// ```
/// use treecalc::util::num::parse_operand;
///
/// assert_eq!(parse_operand("2.5"), Some(2.5));
/// assert_eq!(parse_operand("+8"), Some(8.0));
/// assert_eq!(parse_operand("x"), None);
/// ```
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    if !is_operand_text(text) {
        return None;
    }
    text.parse().ok()
}

/// Significant digits shown by [`format_value`].
const DISPLAY_DIGITS: usize = 6;

/// Formats a value for display with six significant digits.
///
/// Trailing zeros are dropped. Values whose decimal exponent is below `-4`,
/// or at least six, are written in scientific notation with a signed,
/// two-digit exponent, the way C's `%g` does.
///
/// ## Example
/// ```
/// use treecalc::util::num::format_value;
///
/// assert_eq!(format_value(14.0), "14");
/// assert_eq!(format_value(1.0 / 3.0), "0.333333");
/// assert_eq!(format_value(19.62), "19.62");
/// assert_eq!(format_value(123_456.0), "123456");
/// assert_eq!(format_value(1_234_567.0), "1.23457e+06");
/// assert_eq!(format_value(999_999.7), "1e+06");
/// assert_eq!(format_value(0.000_012_5), "1.25e-05");
/// assert_eq!(format_value(-0.5), "-0.5");
/// assert_eq!(format_value(f64::NAN), "nan");
/// assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent is read after rounding, so 999999.7 prints as 1e+06.
    let precision = DISPLAY_DIGITS - 1;
    let scientific = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let max_exponent = i32::try_from(DISPLAY_DIGITS).unwrap_or(i32::MAX);
    if exponent < -4 || exponent >= max_exponent {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs());
    }

    let decimals = usize::try_from(max_exponent - 1 - exponent).unwrap_or(0);
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

/// Drops trailing zeros after a decimal point, and the point itself if
/// nothing follows it.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
