//! Settlement layer - settlements and their inventories

pub mod inventory;

pub use inventory::Inventory;

use serde::{Deserialize, Serialize};

use crate::core::types::SettlementId;
use crate::resources::ResourceKind;

/// A settlement holding gathered resources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settlement {
    pub id: SettlementId,
    /// Replaceable wholesale; assigning a new Inventory discards the old counts
    pub inventory: Inventory,
}

impl Settlement {
    /// Create a settlement with an empty inventory
    pub fn new() -> Self {
        Self {
            id: SettlementId::new(),
            inventory: Inventory::new(),
        }
    }

    /// Perform the harvest action for a resource kind
    ///
    /// Deposits one unit into this settlement's inventory. Always
    /// succeeds; the kind's capability tag only selects the verb.
    pub fn harvest(&mut self, kind: ResourceKind) {
        tracing::trace!(
            "{} {:?} at settlement {:?}",
            kind.harvest_method().verb(),
            kind,
            self.id
        );
        self.inventory.add(kind, 1);
    }
}

impl Default for Settlement {
    fn default() -> Self {
        Self::new()
    }
}
