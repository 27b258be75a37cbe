//! Bangladeshi mobile number formatting and validation
//!
//! Numbers are 11 digits, start with `01`, and carry an operator digit in
//! `3..=9` at the third position. The display grouping is `XXX XX XX XX XX`.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Number of digits in a local BD mobile number
pub const PHONE_DIGITS: usize = 11;

/// Digit indices before which the formatter inserts a space
const GROUP_BREAKS: [usize; 4] = [3, 5, 7, 9];

static BD_MOBILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^01[3-9]\d{8}$").expect("BD mobile pattern is a valid regex"));

/// First failing phone check, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("Phone number is too short (must be 11 digits)")]
    TooShort,

    #[error("Phone number is too long (must be 11 digits)")]
    TooLong,

    #[error("Phone number must start with 01")]
    BadPrefix,

    #[error("Invalid operator code (third digit must be 3-9)")]
    BadOperator,

    #[error("Invalid Bangladeshi mobile number")]
    Pattern,
}

/// Strips everything except ASCII digits
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats raw keystrokes into the `XXX XX XX XX XX` display grouping
///
/// Non-digits are dropped and input beyond 11 digits is truncated, so
/// `format_phone(format_phone(s)) == format_phone(s)` for every `s`.
///
/// # Examples
/// ```
/// use dokan_validation::format_phone;
/// assert_eq!(format_phone("01712345678"), "017 12 34 56 78");
/// assert_eq!(format_phone("0171-23"), "017 12 3");
/// ```
pub fn format_phone(s: &str) -> String {
    let mut formatted = String::with_capacity(PHONE_DIGITS + GROUP_BREAKS.len());
    for (i, c) in s
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_DIGITS)
        .enumerate()
    {
        if GROUP_BREAKS.contains(&i) {
            formatted.push(' ');
        }
        formatted.push(c);
    }
    formatted
}

/// Full-pattern check on the digit-only form of `s`
pub fn is_bd_mobile(s: &str) -> bool {
    BD_MOBILE.is_match(&digits_only(s))
}

/// Runs the ordered phone checks: length, prefix, operator digit, pattern
pub fn check_phone(s: &str) -> Result<(), PhoneError> {
    let digits = digits_only(s);

    if digits.len() < PHONE_DIGITS {
        return Err(PhoneError::TooShort);
    }
    if digits.len() > PHONE_DIGITS {
        return Err(PhoneError::TooLong);
    }
    if !digits.starts_with("01") {
        return Err(PhoneError::BadPrefix);
    }
    if !matches!(digits.as_bytes()[2], b'3'..=b'9') {
        return Err(PhoneError::BadOperator);
    }
    if !BD_MOBILE.is_match(&digits) {
        return Err(PhoneError::Pattern);
    }

    Ok(())
}
