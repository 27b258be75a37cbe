// File: src/rules.rs
// Purpose: Per-field rule evaluation shared by live and submit validation

use crate::field::Field;
use crate::state::FormState;
use dokan_validation::{
    check_phone, is_letters_and_spaces, passwords_match, validate_min_password,
    validate_trimmed_length, MIN_PASSWORD_LEN,
};

pub const SHOP_NAME_MIN: usize = 3;
pub const SHOP_NAME_MAX: usize = 50;
pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 50;

/// Evaluates the detailed rule for `field` against `value`
///
/// `form` supplies cross-field context (the password for confirmation).
/// Blank handling is the caller's concern: live validation clears errors for
/// blank values and submit validation reports them as required.
pub fn validate_field(field: Field, value: &str, form: &FormState) -> Option<String> {
    match field {
        Field::ShopName => validate_trimmed_length(value, SHOP_NAME_MIN, SHOP_NAME_MAX)
            .err()
            .map(|e| format!("{} {}", field.label(), e)),
        Field::Name => validate_name(value),
        Field::Phone => check_phone(value).err().map(|e| e.to_string()),
        Field::Password => validate_min_password(value, MIN_PASSWORD_LEN).err(),
        Field::ConfirmPassword => validate_confirmation(value, form.value(Field::Password)),
    }
}

/// Length is checked first; the letters-only rule applies once length passes
fn validate_name(value: &str) -> Option<String> {
    if let Err(e) = validate_trimmed_length(value, NAME_MIN, NAME_MAX) {
        return Some(format!("{} {}", Field::Name.label(), e));
    }
    if !is_letters_and_spaces(value) {
        return Some("Name can only contain letters and spaces".to_string());
    }
    None
}

/// Mismatch is independent of whether the password itself is valid
pub fn validate_confirmation(confirmation: &str, password: &str) -> Option<String> {
    if passwords_match(password, confirmation) {
        None
    } else {
        Some("Passwords do not match".to_string())
    }
}
