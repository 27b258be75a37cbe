// File: src/view.rs
// Purpose: What the input surface renders for the current form state

use crate::config::ThemeConfig;
use crate::engine;
use crate::field::Field;
use crate::state::FormState;
use serde::Serialize;
use std::collections::BTreeMap;

/// Display projection of a [`FormState`]
///
/// Errors of untouched fields are held back so a fresh screen is not
/// covered in messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub values: BTreeMap<Field, String>,
    pub errors: BTreeMap<Field, String>,
    pub progress: f32,
    pub progress_color: String,
}

impl FormView {
    pub fn project(form: &FormState, theme: &ThemeConfig) -> Self {
        let values = Field::ALL
            .into_iter()
            .map(|field| (field, form.value(field).to_string()))
            .collect();

        let errors = form
            .errors()
            .iter()
            .filter(|(field, _)| form.is_touched(**field))
            .map(|(field, message)| (*field, message.clone()))
            .collect();

        let progress = engine::progress(form);

        Self {
            values,
            errors,
            progress,
            progress_color: theme.progress_color(progress).to_string(),
        }
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_errors_are_hidden() {
        let mut form = FormState::new();
        form.set_error(Field::Name, Some("Name is required".to_string()));
        let view = FormView::project(&form, &ThemeConfig::default());
        assert!(view.error(Field::Name).is_none());

        form.set_value(Field::Name, "");
        let view = FormView::project(&form, &ThemeConfig::default());
        assert_eq!(view.error(Field::Name), Some("Name is required"));
    }

    #[test]
    fn test_view_serializes_with_payload_keys() {
        let mut form = FormState::new();
        form.set_value(Field::ShopName, "Shop A");
        let view = FormView::project(&form, &ThemeConfig::default());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["values"]["shopName"], "Shop A");
        assert_eq!(json["progressColor"], "#2563EB");
    }
}
