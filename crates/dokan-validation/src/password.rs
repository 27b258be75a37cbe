//! Password validation functions

/// Minimum password length accepted by the registration form
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validates that a password has at least `min` characters
pub fn validate_min_password(password: &str, min: usize) -> Result<(), String> {
    if password.chars().count() >= min {
        Ok(())
    } else {
        Err(format!("Password must contain: at least {} characters", min))
    }
}

/// Passwords are compared exactly, no trimming
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}
