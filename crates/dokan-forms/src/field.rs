// File: src/field.rs
// Purpose: The fixed set of registration form fields

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registration form field
///
/// The set is fixed; serialized names match the payload keys handed to the
/// submission sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    ShopName,
    Name,
    Phone,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 5] = [
        Field::ShopName,
        Field::Name,
        Field::Phone,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Payload key for this field
    pub fn key(self) -> &'static str {
        match self {
            Field::ShopName => "shopName",
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human label used as the subject of error messages
    pub fn label(self) -> &'static str {
        match self {
            Field::ShopName => "Shop name",
            Field::Name => "Name",
            Field::Phone => "Phone number",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm password",
        }
    }

    /// Message shown when the field is blank at submit time
    pub fn required_message(self) -> String {
        format!("{} is required", self.label())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_serde_names() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.key()));
        }
    }

    #[test]
    fn test_serde_uses_payload_keys() {
        let json = serde_json::to_string(&Field::ConfirmPassword).unwrap();
        assert_eq!(json, "\"confirmPassword\"");
    }

    #[test]
    fn test_required_message() {
        assert_eq!(Field::ShopName.required_message(), "Shop name is required");
    }
}
