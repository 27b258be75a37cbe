//! Error types for SIM selection

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Selection requested for an id that is not in the current list
    #[error("unknown SIM selection: {0}")]
    UnknownSelection(String),

    /// `select` called while the modal has no list to choose from
    #[error("SIM modal is not ready")]
    NotReady,

    #[error("failed to save SIM selection for shop {shop_id}")]
    Persist {
        shop_id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("unknown settings store backend: {0}")]
    UnknownBackend(String),
}
