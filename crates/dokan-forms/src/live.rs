// File: src/live.rs
// Purpose: Debounced live validation driver for the registration screen

use crate::config::{Config, ThemeConfig};
use crate::engine;
use crate::field::Field;
use crate::state::FormState;
use crate::submit::{submit_form, SubmissionSink, SubmitOutcome};
use crate::view::FormView;
use anyhow::Result;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;

/// Result of one completed live evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSnapshot {
    /// Field whose edit triggered the evaluation
    pub field: Field,
    /// Value the rules saw
    pub value: String,
    pub errors: BTreeMap<Field, String>,
    pub progress: f32,
}

impl ValidationSnapshot {
    fn capture(field: Field, form: &FormState) -> Self {
        Self {
            field,
            value: form.value(field).to_string(),
            errors: form.errors().clone(),
            progress: engine::progress(form),
        }
    }
}

/// Owns the screen's [`FormState`] and validates edits after a quiet period
///
/// Each field has its own trailing-edge timer: a new edit to a field aborts
/// that field's pending evaluation, so a burst of keystrokes produces one
/// evaluation of the last value. Completed evaluations are broadcast to
/// subscribers.
pub struct LiveValidator {
    form: Arc<Mutex<FormState>>,
    pending: Mutex<HashMap<Field, JoinHandle<()>>>,
    debounce: Duration,
    theme: ThemeConfig,
    snapshots: broadcast::Sender<ValidationSnapshot>,
}

impl LiveValidator {
    pub fn new(config: &Config) -> Self {
        let (snapshots, _) = broadcast::channel(64);

        Self {
            form: Arc::new(Mutex::new(FormState::new())),
            pending: Mutex::new(HashMap::new()),
            debounce: config.form.debounce(),
            theme: config.theme.clone(),
            snapshots,
        }
    }

    /// Receive a [`ValidationSnapshot`] per completed live evaluation
    pub fn subscribe(&self) -> broadcast::Receiver<ValidationSnapshot> {
        self.snapshots.subscribe()
    }

    /// Record a user edit and (re)arm the field's validation timer
    pub async fn on_change(&self, field: Field, raw: &str) {
        self.form.lock().await.set_value(field, raw);

        let form = Arc::clone(&self.form);
        let snapshots = self.snapshots.clone();
        let debounce = self.debounce;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            let mut form = form.lock().await;
            engine::validate_live(&mut form, field);
            let snapshot = ValidationSnapshot::capture(field, &form);
            tracing::debug!(
                field = %field,
                errors = snapshot.errors.len(),
                progress = snapshot.progress,
                "live validation"
            );

            // No subscribers is fine
            let _ = snapshots.send(snapshot);
        });

        if let Some(previous) = self.pending.lock().await.insert(field, handle) {
            if !previous.is_finished() {
                tracing::trace!(field = %field, "superseded pending validation");
            }
            previous.abort();
        }
    }

    /// Drop every pending live evaluation
    pub async fn cancel_pending(&self) {
        for (_, handle) in self.pending.lock().await.drain() {
            handle.abort();
        }
    }

    /// Run submit-mode validation and hand an accepted form to `sink`
    ///
    /// Pending live evaluations are cancelled first so none of them lands on
    /// the reset form.
    pub async fn submit<S>(&self, sink: &S) -> Result<SubmitOutcome>
    where
        S: SubmissionSink + ?Sized,
    {
        self.cancel_pending().await;
        let mut form = self.form.lock().await;
        submit_form(&mut form, sink).await
    }

    /// Copy of the current form state
    pub async fn state(&self) -> FormState {
        self.form.lock().await.clone()
    }

    /// What the input surface should render right now
    pub async fn view(&self) -> FormView {
        FormView::project(&*self.form.lock().await, &self.theme)
    }
}

impl Drop for LiveValidator {
    fn drop(&mut self) {
        for (_, handle) in self.pending.get_mut().drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    fn validator() -> LiveValidator {
        LiveValidator::new(&Config::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_value() {
        let live = validator();
        let mut rx = live.subscribe();

        live.on_change(Field::ShopName, "S").await;
        tokio::time::sleep(Duration::from_millis(100)).await;
        live.on_change(Field::ShopName, "Sh").await;
        tokio::time::sleep(Duration::from_millis(100)).await;
        live.on_change(Field::ShopName, "Shop").await;

        let snapshot = rx.recv().await.unwrap();
        assert_eq!(snapshot.field, Field::ShopName);
        assert_eq!(snapshot.value, "Shop");
        assert!(snapshot.errors.is_empty());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_runs_before_quiet_period() {
        let live = validator();
        let mut rx = live.subscribe();

        live.on_change(Field::ShopName, "ab").await;
        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
        assert!(live.state().await.error(Field::ShopName).is_none());

        tokio::time::sleep(Duration::from_millis(2)).await;
        let snapshot = rx.try_recv().unwrap();
        assert_eq!(
            snapshot.errors.get(&Field::ShopName).map(String::as_str),
            Some("Shop name must be at least 3 characters")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_fields_debounce_independently() {
        let live = validator();
        let mut rx = live.subscribe();

        live.on_change(Field::ShopName, "ab").await;
        live.on_change(Field::Name, "J1").await;

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        let mut fields = vec![first.field, second.field];
        fields.sort();
        assert_eq!(fields, vec![Field::ShopName, Field::Name]);

        let state = live.state().await;
        assert!(state.error(Field::ShopName).is_some());
        assert!(state.error(Field::Name).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_pending_discards_timer() {
        let live = validator();
        let mut rx = live.subscribe();

        live.on_change(Field::ShopName, "ab").await;
        live.cancel_pending().await;
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
        assert!(live.state().await.error(Field::ShopName).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_tracks_progress() {
        let live = validator();
        let mut rx = live.subscribe();

        live.on_change(Field::Phone, "01712345678").await;
        rx.recv().await.unwrap();

        let view = live.view().await;
        assert_eq!(view.values[&Field::Phone], "017 12 34 56 78");
        assert!((view.progress - 0.2).abs() < f32::EPSILON);
    }
}
