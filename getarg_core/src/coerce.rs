//! Conversions from stored option values to typed values.

use std::num::ParseIntError;

/// Parse the leading integer of `value`, in the manner of C's `atoi`.
///
/// Leading ASCII whitespace is skipped, followed by an optional `+`/`-` sign and then decimal digits up to the first non-digit.
/// A value without any digits parses to `0`.
/// Values beyond the range of `i64` saturate.
///
/// ### Example
/// ```
/// use getarg_core::coerce::atoi;
///
/// assert_eq!(atoi("11"), 11);
/// assert_eq!(atoi("-7days"), -7);
/// assert_eq!(atoi("NaN"), 0);
/// assert_eq!(atoi(""), 0);
/// ```
pub fn atoi(value: &str) -> i64 {
    let trimmed = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .fold(0i64, |total, digit| {
            // Accumulate towards the sign so that i64::MIN is reachable.
            if negative {
                total.saturating_mul(10).saturating_sub(digit)
            } else {
                total.saturating_mul(10).saturating_add(digit)
            }
        })
}

/// Interpret an option value as a boolean.
///
/// The empty value (a bare flag, ex: `-pac`) is `true`.
/// Otherwise the value is `true` iff its [`atoi`] is non-zero; so `"0"` and any non-numeric text are `false`.
///
/// ### Example
/// ```
/// use getarg_core::coerce::interpret_bool;
///
/// assert!(interpret_bool(""));
/// assert!(interpret_bool("1"));
/// assert!(!interpret_bool("0"));
/// assert!(!interpret_bool("yes"));
/// ```
pub fn interpret_bool(value: &str) -> bool {
    value.is_empty() || atoi(value) != 0
}

pub(crate) fn strict_int(value: &str) -> Result<i64, ParseIntError> {
    value.parse::<i64>()
}
