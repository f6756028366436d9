//! Numeric text handling for the display.
//!
//! The display follows the conventions of a browser calculator: operands are
//! read with `parseFloat` prefix rules and printed the way JavaScript prints
//! numbers, so values like `Infinity` or `1e-7` round-trip through the
//! display unchanged.

/// Fractional digits kept by [`format_result`]
pub const RESULT_FRACTION_DIGITS: usize = 8;

/// Largest decimal exponent still printed in plain notation
const PLAIN_MAX_EXPONENT: i32 = 21;

/// Smallest decimal exponent still printed in plain notation
const PLAIN_MIN_EXPONENT: i32 = -6;

/// Parses the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped, an optional sign is accepted, then either
/// `Infinity` or a decimal literal `digits [. digits] [e[±]digits]`. Trailing
/// garbage is ignored. Returns NaN when no prefix is numeric.
#[must_use]
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Formats a number the way JavaScript's `Number.prototype.toString` does.
///
/// Uses the shortest digit string that round-trips, plain notation for
/// decimal exponents from -6 through 20, exponent notation (`1e+21`,
/// `1.5e-7`) outside that range. Negative zero prints as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_number(-value));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3"
    let sci = format!("{value:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    if k <= n && n <= PLAIN_MAX_EXPONENT {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= PLAIN_MAX_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if PLAIN_MIN_EXPONENT < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", e.abs())
        } else {
            format!("{first}.{rest}e{sign}{}", e.abs())
        }
    }
}

/// Formats the outcome of a pending operation for the display.
///
/// Integral values print as integers; other finite values are rounded to
/// eight fractional digits (exact ties away from zero) and printed with
/// trailing zeros (and a dangling point) removed. Non-finite values print as
/// `Infinity`, `-Infinity` or `NaN`.
#[must_use]
pub fn format_result(value: f64) -> String {
    if !value.is_finite() || value.fract() == 0.0 {
        return format_number(value);
    }

    let fixed = to_fixed(value, RESULT_FRACTION_DIGITS);
    if fixed.ends_with('0') {
        let trimmed = fixed.trim_end_matches('0');
        trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
    } else {
        fixed
    }
}

/// Fractional digits needed to print any finite `f64` without rounding
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Fixed-point text with `fraction_digits` digits, rounding half away from zero.
///
/// Works from the exact decimal expansion of `value`, so a value sitting
/// exactly on a tie (e.g. `1/512`) always rounds up in magnitude.
fn to_fixed(value: f64, fraction_digits: usize) -> String {
    let exact = format!("{:.prec$}", value.abs(), prec = EXACT_FRACTION_DIGITS);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(fraction_digits))
        .collect();

    if frac_part.as_bytes().get(fraction_digits).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (int_digits, frac_digits) = digits.split_at(digits.len() - fraction_digits);
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!(
        "{sign}{}.{}",
        String::from_utf8_lossy(int_digits),
        String::from_utf8_lossy(frac_digits)
    )
}
