//! Inventory - per-settlement resource counts

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::resources::ResourceKind;

/// Counts of held resources, keyed by kind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    counts: AHashMap<ResourceKind, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add resources of a kind, initializing the count if absent
    pub fn add(&mut self, kind: ResourceKind, amount: u32) {
        let entry = self.counts.entry(kind).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Get the current count of a kind, or 0 if never added
    pub fn count(&self, kind: ResourceKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }
}
