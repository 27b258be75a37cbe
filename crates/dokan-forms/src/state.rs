// File: src/state.rs
// Purpose: Transient registration form state owned by the screen

use crate::field::Field;
use dokan_validation::format_phone;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Current values, touched set, and error map of the registration form
///
/// Created empty when the screen mounts and reset to empty after a
/// successful submission. Progress is derived on demand, see
/// [`crate::engine::progress`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    values: BTreeMap<Field, String>,
    touched: BTreeSet<Field>,
    errors: BTreeMap<Field, String>,
}

impl FormState {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a user edit and mark the field touched
    ///
    /// Phone input passes through the display formatter first.
    pub fn set_value(&mut self, field: Field, raw: &str) {
        let value = match field {
            Field::Phone => format_phone(raw),
            _ => raw.to_string(),
        };
        self.values.insert(field, value);
        self.touched.insert(field);
    }

    /// Current value, empty string if never set
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Mark every field touched (submit attempt)
    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    /// Set or clear a single field's error, leaving the others alone
    pub fn set_error(&mut self, field: Field, error: Option<String>) {
        match error {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Replace the whole error map
    pub fn replace_errors(&mut self, errors: BTreeMap<Field, String>) {
        self.errors = errors;
    }

    /// Back to the freshly mounted state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
