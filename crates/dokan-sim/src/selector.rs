//! SIM selection modal state machine

use crate::card::{normalize_cards, SimLabels, SimSelection};
use crate::directory::SimDirectory;
use crate::error::SimError;
use crate::record::SimSettingRecord;
use crate::storage::SettingsStore;
use chrono::Local;
use std::fmt;
use std::sync::Arc;

/// What the modal shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimModalState {
    Closed,
    Loading,
    Ready {
        cards: Vec<SimSelection>,
        selected: SimSelection,
    },
    /// Saving the choice failed; reopen to retry
    Error(String),
}

/// Transient message for the user after a collaborator failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    DirectoryUnavailable(String),
    SettingsUnavailable(String),
    SaveFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::DirectoryUnavailable(reason) => {
                write!(f, "Could not read SIM cards, SMS is off: {}", reason)
            }
            Notice::SettingsUnavailable(reason) => {
                write!(f, "Could not load saved SIM choice: {}", reason)
            }
            Notice::SaveFailed(reason) => write!(f, "Could not save SIM choice: {}", reason),
        }
    }
}

type SelectCallback = Box<dyn Fn(&SimSelection) + Send + Sync>;

/// Drives the SIM modal for one shop
///
/// Collaborator calls are awaited one after another; `&mut self` keeps a
/// second `open` from overlapping one in flight.
pub struct SimSelector {
    shop_id: String,
    directory: Arc<dyn SimDirectory>,
    store: Arc<dyn SettingsStore>,
    labels: SimLabels,
    state: SimModalState,
    selection: Option<SimSelection>,
    on_select: Option<SelectCallback>,
    notices: Vec<Notice>,
}

impl SimSelector {
    pub fn new(
        shop_id: impl Into<String>,
        directory: Arc<dyn SimDirectory>,
        store: Arc<dyn SettingsStore>,
    ) -> Self {
        Self {
            shop_id: shop_id.into(),
            directory,
            store,
            labels: SimLabels::default(),
            state: SimModalState::Closed,
            selection: None,
            on_select: None,
            notices: Vec::new(),
        }
    }

    pub fn with_labels(mut self, labels: SimLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Called with every persisted selection
    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: Fn(&SimSelection) + Send + Sync + 'static,
    {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> &SimModalState {
        &self.state
    }

    /// Last choice confirmed by the user in this session
    pub fn selection(&self) -> Option<&SimSelection> {
        self.selection.as_ref()
    }

    /// Drain pending user notices
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Open the modal and load the card list
    ///
    /// The initial selection prefers `external`, then the card matching the
    /// saved record, then the no-SIM sentinel. Collaborator failures never
    /// leave the modal unusable.
    pub async fn open(&mut self, external: Option<SimSelection>) {
        self.state = SimModalState::Loading;

        let saved = match self.store.get(&self.shop_id).await {
            Ok(saved) => saved,
            Err(e) => {
                tracing::warn!(shop = %self.shop_id, store = self.store.name(), error = %e, "failed to load SIM setting");
                self.notices.push(Notice::SettingsUnavailable(e.to_string()));
                None
            }
        };

        let sentinel = SimSelection::no_sim(&self.labels);
        let cards = match self.directory.list_sim_cards().await {
            Ok(raw) => {
                let mut cards = normalize_cards(&raw, &self.labels);
                cards.push(sentinel.clone());
                cards
            }
            Err(e) => {
                tracing::warn!(shop = %self.shop_id, error = %e, "SIM directory unavailable, falling back to no SIM");
                self.notices.push(Notice::DirectoryUnavailable(e.to_string()));
                vec![sentinel.clone()]
            }
        };

        let selected = initial_selection(&cards, external, saved.as_ref()).unwrap_or(sentinel);
        tracing::debug!(shop = %self.shop_id, cards = cards.len(), selected = %selected.id, "SIM modal ready");

        self.state = SimModalState::Ready { cards, selected };
    }

    /// Persist the card with `id`, notify the callback, and close the modal
    ///
    /// If saving fails the modal moves to [`SimModalState::Error`] and the
    /// callback is not invoked.
    pub async fn select(&mut self, id: &str) -> Result<SimSelection, SimError> {
        let choice = match &self.state {
            SimModalState::Ready { cards, .. } => cards
                .iter()
                .find(|card| card.id == id)
                .cloned()
                .ok_or_else(|| SimError::UnknownSelection(id.to_string()))?,
            _ => return Err(SimError::NotReady),
        };

        let record = SimSettingRecord::for_selection(&self.shop_id, &choice, Local::now());
        if let Err(e) = self.store.put(record).await {
            tracing::warn!(shop = %self.shop_id, store = self.store.name(), error = %e, "failed to save SIM setting");
            self.notices.push(Notice::SaveFailed(e.to_string()));
            self.state = SimModalState::Error(e.to_string());
            return Err(SimError::Persist {
                shop_id: self.shop_id.clone(),
                source: e.into(),
            });
        }

        tracing::info!(shop = %self.shop_id, sim = %choice.id, "SIM selection saved");
        self.selection = Some(choice.clone());
        if let Some(callback) = &self.on_select {
            callback(&choice);
        }
        self.close();

        Ok(choice)
    }

    pub fn close(&mut self) {
        self.state = SimModalState::Closed;
    }
}

/// Selection priority: external choice, then the saved record, else none
///
/// Only listed cards are returned, so the result is always selectable. An
/// external choice that is not listed falls through to the saved record.
fn initial_selection(
    cards: &[SimSelection],
    external: Option<SimSelection>,
    saved: Option<&SimSettingRecord>,
) -> Option<SimSelection> {
    external
        .and_then(|external| cards.iter().find(|card| card.id == external.id))
        .or_else(|| saved.and_then(|record| cards.iter().find(|card| record.matches(card))))
        .cloned()
}
