//! SIM directory contract

use crate::card::RawSimInfo;
use anyhow::Result;
use async_trait::async_trait;

/// Lists the SIM cards the device currently exposes
#[async_trait]
pub trait SimDirectory: Send + Sync {
    async fn list_sim_cards(&self) -> Result<Vec<RawSimInfo>>;
}

/// Directory backed by a fixed list
///
/// Stands in for hardware on desktops, in previews, and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSimDirectory {
    cards: Vec<RawSimInfo>,
}

impl StaticSimDirectory {
    pub fn new(cards: Vec<RawSimInfo>) -> Self {
        Self { cards }
    }

    /// A device without SIM cards
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SimDirectory for StaticSimDirectory {
    async fn list_sim_cards(&self) -> Result<Vec<RawSimInfo>> {
        Ok(self.cards.clone())
    }
}
