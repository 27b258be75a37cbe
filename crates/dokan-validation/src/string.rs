//! String validation functions

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static LETTERS_AND_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("letters pattern is a valid regex"));

/// Why a value fell outside its allowed length range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("must be at least {min} characters")]
    TooShort { min: usize },

    #[error("must be at most {max} characters")]
    TooLong { max: usize },
}

/// True when the value is empty or whitespace only
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Number of characters left after trimming surrounding whitespace
pub fn trimmed_len(s: &str) -> usize {
    s.trim().chars().count()
}

/// Validates the trimmed length of `s` against an inclusive range
///
/// Length is counted in characters, not bytes, so "Café" is 4 long.
pub fn validate_trimmed_length(s: &str, min: usize, max: usize) -> Result<(), LengthError> {
    let len = trimmed_len(s);
    if len < min {
        Err(LengthError::TooShort { min })
    } else if len > max {
        Err(LengthError::TooLong { max })
    } else {
        Ok(())
    }
}

/// ASCII letters and whitespace only
pub fn is_letters_and_spaces(s: &str) -> bool {
    LETTERS_AND_SPACES.is_match(s)
}
