// File: src/engine.rs
// Purpose: Live and submit validation modes plus completeness scoring

use crate::field::Field;
use crate::rules::{validate_confirmation, validate_field};
use crate::state::FormState;
use dokan_validation::{is_blank, is_bd_mobile};
use std::collections::BTreeMap;

/// Re-evaluates one field after an edit, merging into the existing errors
///
/// A blank value clears the field's error rather than flagging it. Editing
/// the password also re-checks a non-blank confirmation; editing the
/// confirmation does not touch the password's error.
pub fn validate_live(form: &mut FormState, field: Field) {
    let value = form.value(field);
    let error = if is_blank(value) {
        None
    } else {
        validate_field(field, value, form)
    };
    form.set_error(field, error);

    if field == Field::Password {
        let confirmation = form.value(Field::ConfirmPassword);
        if !is_blank(confirmation) {
            let error = validate_confirmation(confirmation, form.value(Field::Password));
            form.set_error(Field::ConfirmPassword, error);
        }
    }
}

/// Validates every field from scratch and reports whether the form is accepted
///
/// All fields become touched. Blank fields produce "required" errors; the
/// detailed rules only run when no field is blank.
pub fn validate_submit(form: &mut FormState) -> bool {
    form.touch_all();

    let mut errors: BTreeMap<Field, String> = Field::ALL
        .into_iter()
        .filter(|&field| is_blank(form.value(field)))
        .map(|field| (field, field.required_message()))
        .collect();

    if errors.is_empty() {
        errors = Field::ALL
            .into_iter()
            .filter_map(|field| {
                validate_field(field, form.value(field), form).map(|message| (field, message))
            })
            .collect();
    }

    form.replace_errors(errors);
    form.errors().is_empty()
}

/// Whether a field counts towards the completeness score
///
/// Phone must also pass the full mobile pattern on its own, whatever the
/// error map says.
pub fn is_complete(form: &FormState, field: Field) -> bool {
    let value = form.value(field);
    if is_blank(value) || form.error(field).is_some() {
        return false;
    }
    field != Field::Phone || is_bd_mobile(value)
}

/// Number of fields that are non-empty and currently valid
pub fn completed_fields(form: &FormState) -> usize {
    Field::ALL
        .into_iter()
        .filter(|&field| is_complete(form, field))
        .count()
}

/// Completeness score in `[0, 1]`, one step per field
pub fn progress(form: &FormState) -> f32 {
    completed_fields(form) as f32 / Field::ALL.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled(values: [(Field, &str); 5]) -> FormState {
        let mut form = FormState::new();
        for (field, value) in values {
            form.set_value(field, value);
        }
        form
    }

    fn valid_form() -> FormState {
        filled([
            (Field::ShopName, "Shop A"),
            (Field::Name, "John Doe"),
            (Field::Phone, "01712345678"),
            (Field::Password, "secret"),
            (Field::ConfirmPassword, "secret"),
        ])
    }

    #[test]
    fn test_live_blank_clears_error() {
        let mut form = FormState::new();
        form.set_value(Field::ShopName, "ab");
        validate_live(&mut form, Field::ShopName);
        assert!(form.error(Field::ShopName).is_some());

        form.set_value(Field::ShopName, "");
        validate_live(&mut form, Field::ShopName);
        assert!(form.error(Field::ShopName).is_none());
    }

    #[test]
    fn test_live_keeps_unrelated_errors() {
        let mut form = FormState::new();
        form.set_value(Field::ShopName, "ab");
        validate_live(&mut form, Field::ShopName);
        form.set_value(Field::Name, "John");
        validate_live(&mut form, Field::Name);

        assert!(form.error(Field::ShopName).is_some());
        assert!(form.error(Field::Name).is_none());
    }

    #[test]
    fn test_password_edit_rechecks_confirmation() {
        let mut form = FormState::new();
        form.set_value(Field::Password, "secret");
        form.set_value(Field::ConfirmPassword, "secret");
        validate_live(&mut form, Field::ConfirmPassword);
        assert!(form.error(Field::ConfirmPassword).is_none());

        form.set_value(Field::Password, "secret2");
        validate_live(&mut form, Field::Password);
        assert_eq!(
            form.error(Field::ConfirmPassword),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_password_edit_skips_empty_confirmation() {
        let mut form = FormState::new();
        form.set_value(Field::Password, "secret");
        validate_live(&mut form, Field::Password);
        assert!(form.error(Field::ConfirmPassword).is_none());
    }

    #[test]
    fn test_password_edit_skips_whitespace_confirmation() {
        let mut form = FormState::new();
        form.set_value(Field::ConfirmPassword, "   ");
        validate_live(&mut form, Field::ConfirmPassword);
        form.set_value(Field::Password, "secret");
        validate_live(&mut form, Field::Password);
        assert!(form.error(Field::ConfirmPassword).is_none());
    }

    #[test]
    fn test_confirmation_edit_leaves_password_error() {
        let mut form = FormState::new();
        form.set_value(Field::Password, "abc");
        validate_live(&mut form, Field::Password);
        form.set_value(Field::ConfirmPassword, "abc");
        validate_live(&mut form, Field::ConfirmPassword);

        assert_eq!(
            form.error(Field::Password),
            Some("Password must contain: at least 6 characters")
        );
        assert!(form.error(Field::ConfirmPassword).is_none());
    }

    #[test]
    fn test_submit_empty_form_reports_all_required() {
        let mut form = FormState::new();
        assert!(!validate_submit(&mut form));

        let expected: BTreeMap<Field, String> = Field::ALL
            .into_iter()
            .map(|f| (f, f.required_message()))
            .collect();
        assert_eq!(form.errors(), &expected);
        for field in Field::ALL {
            assert!(form.is_touched(field));
        }
    }

    #[test]
    fn test_submit_required_errors_short_circuit_detailed_rules() {
        let mut form = FormState::new();
        form.set_value(Field::ShopName, "ab");
        form.set_value(Field::Phone, "123");
        assert!(!validate_submit(&mut form));

        assert!(form.error(Field::ShopName).is_none());
        assert!(form.error(Field::Phone).is_none());
        assert_eq!(form.error(Field::Name), Some("Name is required"));
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn test_submit_ignores_stale_live_errors() {
        let mut form = valid_form();
        form.set_error(Field::Name, Some("stale".to_string()));
        assert!(validate_submit(&mut form));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_submit_runs_detailed_rules() {
        let mut form = filled([
            (Field::ShopName, "Shop A"),
            (Field::Name, "John Doe"),
            (Field::Phone, "01212345678"),
            (Field::Password, "abc"),
            (Field::ConfirmPassword, "abc"),
        ]);
        assert!(!validate_submit(&mut form));
        assert_eq!(
            form.error(Field::Phone),
            Some("Invalid operator code (third digit must be 3-9)")
        );
        assert_eq!(
            form.error(Field::Password),
            Some("Password must contain: at least 6 characters")
        );
        assert!(form.error(Field::ConfirmPassword).is_none());
    }

    #[test]
    fn test_submit_accepts_valid_form() {
        let mut form = valid_form();
        assert!(validate_submit(&mut form));
        assert_eq!(completed_fields(&form), 5);
        assert_eq!(progress(&form), 1.0);
    }

    #[test]
    fn test_progress_steps() {
        let mut form = FormState::new();
        assert_eq!(completed_fields(&form), 0);

        form.set_value(Field::ShopName, "Shop A");
        assert_eq!(completed_fields(&form), 1);

        form.set_value(Field::Name, "John");
        validate_live(&mut form, Field::Name);
        assert_eq!(completed_fields(&form), 2);

        form.set_error(Field::Name, Some("nope".to_string()));
        assert_eq!(completed_fields(&form), 1);
    }

    #[test]
    fn test_phone_progress_needs_full_pattern() {
        let mut form = FormState::new();
        // Typed but not yet validated: no error, still not complete
        form.set_value(Field::Phone, "0171");
        assert!(form.error(Field::Phone).is_none());
        assert!(!is_complete(&form, Field::Phone));

        form.set_value(Field::Phone, "01712345678");
        assert!(is_complete(&form, Field::Phone));
    }

    #[test]
    fn test_whitespace_only_is_not_complete() {
        let mut form = FormState::new();
        form.set_value(Field::ShopName, "   ");
        assert!(!is_complete(&form, Field::ShopName));
    }
}
