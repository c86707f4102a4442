//! Render-side formatting of operand strings.
//!
//! The entry string is handed to the display sink untouched unless it is
//! too long or its magnitude too large for plain notation, in which case
//! it is reformatted to a fixed 15-significant-digit form. The raw entry
//! state is never mutated here.

/// Longest rendered string shown without reformatting.
const MAX_PLAIN_LEN: usize = 19;

/// Magnitude at which plain notation gives way to 15-significant-digit
/// form.
const NOTATION_LIMIT: f64 = 1e19;

/// Significant digits kept when reformatting.
const PRECISION: usize = 15;

/// Format an entry string for the display sink.
pub(crate) fn format_entry(entry: &str) -> String {
    if let Ok(value) = entry.parse::<f64>() {
        let too_long = entry.chars().count() > MAX_PLAIN_LEN;
        if value.is_finite() && (too_long || value.abs() >= NOTATION_LIMIT) {
            return to_precision(value, PRECISION);
        }
    }
    entry.to_string()
}

/// Default float-to-string conversion for computed values. Negative zero
/// renders as plain `0`.
pub(crate) fn stringify(value: f64) -> String {
    if value == 0.0 && value.is_sign_negative() {
        return "0".to_string();
    }
    value.to_string()
}

/// Format `value` with `digits` significant digits, switching to
/// scientific notation when the decimal exponent is below -6 or at least
/// `digits`.
fn to_precision(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return format!("{:.*}", digits - 1, 0.0);
    }
    let exp = decimal_exponent(value);
    if exp < -6 || exp >= digits as i32 {
        format!("{:.*e}", digits - 1, value)
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        format!("{value:.decimals$}")
    }
}

/// Decimal exponent of a finite, non-zero value, read back from the
/// `LowerExp` rendering so decade boundaries are exact.
fn decimal_exponent(value: f64) -> i32 {
    let sci = format!("{value:e}");
    sci.split('e').nth(1).and_then(|e| e.parse().ok()).unwrap_or(0)
}
