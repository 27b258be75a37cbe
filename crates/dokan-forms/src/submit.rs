// File: src/submit.rs
// Purpose: Submission gate between the validated form and the sink

use crate::engine;
use crate::field::Field;
use crate::state::FormState;
use anyhow::Result;
use async_trait::async_trait;
use dokan_validation::digits_only;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized registration payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub shop_name: String,
    pub name: String,
    /// 11 digits, no separators
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    /// Build the payload from form values, stripping phone formatting
    pub fn from_form(form: &FormState) -> Self {
        Self {
            shop_name: form.value(Field::ShopName).to_string(),
            name: form.value(Field::Name).to_string(),
            phone: digits_only(form.value(Field::Phone)),
            password: form.value(Field::Password).to_string(),
            confirm_password: form.value(Field::ConfirmPassword).to_string(),
        }
    }
}

/// Receives accepted registrations
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, registration: Registration) -> Result<()>;
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Handed to the sink; the form has been reset
    Accepted(Registration),
    /// Field errors to display; nothing was sent
    Rejected(BTreeMap<Field, String>),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Validates the whole form and, if accepted, hands it to `sink`
///
/// The form is reset only after the sink returns `Ok`. A sink error is
/// returned as-is and the form keeps its values for a retry.
pub async fn submit_form<S>(form: &mut FormState, sink: &S) -> Result<SubmitOutcome>
where
    S: SubmissionSink + ?Sized,
{
    if !engine::validate_submit(form) {
        tracing::debug!(errors = form.errors().len(), "registration rejected");
        return Ok(SubmitOutcome::Rejected(form.errors().clone()));
    }

    let registration = Registration::from_form(form);
    sink.submit(registration.clone()).await?;
    tracing::info!(shop = %registration.shop_name, "registration submitted");

    form.reset();
    Ok(SubmitOutcome::Accepted(registration))
}
