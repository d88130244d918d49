//! Display formatting shared by the playground readouts.
//!
//! The trim rules are literal suffix rewrites carried over from the
//! readout strings and must stay bit-for-bit: a trailing `".00"` is
//! stripped entirely, a trailing `".d0"` collapses to `".d"`, and
//! anything else (including `"1.000"`) is left alone.

use serde::{Deserialize, Serialize};

use crate::angle::{normalize_radians, radians_to_degrees};

/// Guard digits rendered before rounding, so a value stored a hair
/// below a decimal boundary (2.345 is 2.34499… as a double) still
/// rounds the way a reader of the decimal expects.
const GUARD_DECIMALS: usize = 12;

/// Fixed-point format to `max_decimals` with trailing-zero trimming.
///
/// Rounding policy: half up on the decimal rendering of the value, so
/// `format_number(2.345, 2)` is `"2.35"` and `format_number(2.5, 0)`
/// is `"3"`.
pub fn format_number(value: f64, max_decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    trim_trailing_zeros(round_half_up(value, max_decimals))
}

/// Sign-prefixed 2-decimal magnitude: `"+ 2.5"`, `"- 0.25"`.
pub fn format_signed(value: f64) -> String {
    let sign = if value >= 0.0 { '+' } else { '-' };
    format!("{} {}", sign, format_number(value.abs(), 2))
}

/// Display mode for angle readouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleMode {
    Degrees,
    Radians,
}

/// Normalized-angle readout: degrees with a `°` suffix, or plain
/// radians to three decimals.
pub fn format_angle(radians: f64, mode: AngleMode) -> String {
    let normalized = normalize_radians(radians);
    match mode {
        AngleMode::Degrees => {
            format!("{}°", format_number(radians_to_degrees(normalized), 2))
        }
        AngleMode::Radians => format_number(normalized, 3),
    }
}

/// Round to `decimals` places, half up, on the guard-digit decimal
/// rendering. Returns a plain fixed-point string.
fn round_half_up(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", GUARD_DECIMALS, value);
    if decimals >= GUARD_DECIMALS {
        return fixed;
    }

    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let round_up = frac_part.as_bytes().get(decimals).is_some_and(|&d| d >= b'5');

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .map(|b| b - b'0')
        .collect();

    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(sign.len() + digits.len() + 1);
    out.push_str(sign);
    for (i, digit) in digits.iter().enumerate() {
        if i == split && decimals > 0 {
            out.push('.');
        }
        out.push(char::from(b'0' + digit));
    }
    out
}

/// The two suffix rewrites, applied in order, exactly as the readouts
/// always have: strip `".00"`, else collapse `".d0"` to `".d"`.
fn trim_trailing_zeros(fixed: String) -> String {
    if let Some(stripped) = fixed.strip_suffix(".00") {
        return stripped.to_string();
    }

    let bytes = fixed.as_bytes();
    let n = bytes.len();
    if n >= 3 && bytes[n - 1] == b'0' && bytes[n - 2].is_ascii_digit() && bytes[n - 3] == b'.' {
        let mut fixed = fixed;
        fixed.pop();
        return fixed;
    }

    fixed
}
