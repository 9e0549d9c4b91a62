//! Number formatting for the calculator display
//!
//! The display is at most 16 characters wide. Values render with up to 16
//! significant digits; very large or very small magnitudes switch to a
//! 10-digit scientific form such as `1.5E+20`.

/// Width of the display in characters, also the digit-entry limit.
pub const MAX_DISPLAY_DIGITS: usize = 16;

/// Significant digits used for scientific output.
const SCIENTIFIC_DIGITS: usize = 10;

/// Magnitude at or above which output goes scientific.
const LARGE_MAGNITUDE: f64 = 1e16;

/// Nonzero magnitude below which output goes scientific.
const SMALL_MAGNITUDE: f64 = 1e-16;

/// Text shown for infinite results.
pub const OVERFLOW_TEXT: &str = "Overflow";

/// Render `value` rounded to `precision` significant digits.
///
/// Uses fixed notation unless the decimal exponent is `>= precision` or
/// `<= -5`, in which case the mantissa is followed by `E`, an explicit sign
/// and at least two exponent digits. Trailing zeros are trimmed.
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if exponent >= precision as i32 || exponent < -4 {
        let mantissa = trim_fraction(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}E{sign}{:02}", exponent.unsigned_abs());
    }

    let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
    let fixed = format!("{:.*}", decimals, value);
    let fixed = trim_fraction(&fixed);
    if fixed == "-0" {
        "0".to_string()
    } else {
        fixed.to_string()
    }
}

/// Strip trailing zeros after a decimal point, then a dangling point.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Round to `places` decimal places.
fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Format a value for the display.
///
/// NaN renders as `nan_text` (the engine passes its current error message),
/// infinities as "Overflow".
pub fn format_number(value: f64, nan_text: &str) -> String {
    if value.is_nan() {
        return nan_text.to_string();
    }
    if value.is_infinite() {
        return OVERFLOW_TEXT.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= LARGE_MAGNITUDE || (magnitude < SMALL_MAGNITUDE && value != 0.0) {
        return format_general(value, SCIENTIFIC_DIGITS);
    }

    let formatted = format_general(value, MAX_DISPLAY_DIGITS);
    if formatted.len() <= MAX_DISPLAY_DIGITS {
        return formatted;
    }

    // Too wide: give up fractional digits until it fits.
    match formatted.find('.') {
        Some(dot) if dot + 1 < MAX_DISPLAY_DIGITS => {
            let places = (MAX_DISPLAY_DIGITS - dot - 1).min(15);
            format_general(round_to(value, places), MAX_DISPLAY_DIGITS)
        }
        _ => formatted,
    }
}

/// Read a display literal back as a number. Error text and partial input
/// such as a bare `-` read as zero.
pub fn parse_display(display: &str) -> f64 {
    display.trim().parse().unwrap_or(0.0)
}

/// Number of digits in a display literal, ignoring sign and decimal point.
pub fn digit_count(display: &str) -> usize {
    display.chars().filter(|c| *c != '.' && *c != '-').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_number(123.0, "Error"), "123");
        assert_eq!(format_number(0.0, "Error"), "0");
        assert_eq!(format_number(-456.0, "Error"), "-456");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(3.14159, "Error"), "3.14159");
        assert_eq!(format_number(0.1 + 0.2, "Error"), "0.3");
        assert_eq!(format_number(0.5, "Error"), "0.5");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_number(-0.0, "Error"), "0");
    }

    #[test]
    fn test_nan_and_infinity() {
        assert_eq!(format_number(f64::NAN, "Error"), "Error");
        assert_eq!(
            format_number(f64::NAN, "Cannot divide by zero"),
            "Cannot divide by zero"
        );
        assert_eq!(format_number(f64::INFINITY, "Error"), "Overflow");
        assert_eq!(format_number(f64::NEG_INFINITY, "Error"), "Overflow");
    }

    #[test]
    fn test_large_goes_scientific() {
        assert_eq!(format_number(1e16, "Error"), "1E+16");
        assert_eq!(format_number(1.5e20, "Error"), "1.5E+20");
        assert_eq!(format_number(-2.5e30, "Error"), "-2.5E+30");
        assert_eq!(format_number(12345678901234567890.0, "Error"), "1.23456789E+19");
    }

    #[test]
    fn test_tiny_goes_scientific() {
        assert_eq!(format_number(1e-20, "Error"), "1E-20");
        assert_eq!(format_number(-3e-17, "Error"), "-3E-17");
    }

    #[test]
    fn test_just_below_large_stays_fixed() {
        assert_eq!(format_number(9999999999999998.0, "Error"), "9999999999999998");
    }

    #[test]
    fn test_too_wide_fraction_is_rounded() {
        assert_eq!(format_number(1.0 / 3.0, "Error"), "0.33333333333333");
        assert_eq!(format_number(2.0 / 3.0, "Error"), "0.66666666666667");
        assert_eq!(format_number(-0.1234567890123456, "Error"), "-0.1234567890123");
    }

    #[test]
    fn test_fits_display() {
        for v in [1.0 / 7.0, 22.0 / 7.0, 1234.0 / 9.0, -5.0 / 3.0] {
            assert!(format_number(v, "Error").len() <= MAX_DISPLAY_DIGITS, "{v}");
        }
    }

    #[test]
    fn test_general_small_exponent() {
        assert_eq!(format_general(0.00001, 16), "1E-05");
        assert_eq!(format_general(0.0001, 16), "0.0001");
    }

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("123."), 123.0);
        assert_eq!(parse_display("-0.5"), -0.5);
        assert_eq!(parse_display("1E+16"), 1e16);
        assert_eq!(parse_display("-"), 0.0);
        assert_eq!(parse_display("Cannot divide by zero"), 0.0);
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count("-12.5"), 3);
        assert_eq!(digit_count("0."), 1);
    }
}
