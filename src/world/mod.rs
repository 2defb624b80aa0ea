//! World layer - settlements and the economy view

pub mod economy;
pub mod equilibrium;

pub use economy::Economy;
pub use equilibrium::{Equilibrium, EquilibriumLoadError, EquilibriumTable};

use serde::{Deserialize, Serialize};

use crate::settlement::Settlement;

/// The game world: a collection of settlements plus the equilibrium
/// configuration its economy prices against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Replaceable wholesale; may legally be empty
    pub settlements: Vec<Settlement>,
    equilibrium: EquilibriumTable,
}

impl World {
    /// Create an empty world with the default equilibrium table
    pub fn new() -> Self {
        Self::with_equilibrium(EquilibriumTable::with_defaults())
    }

    /// Create an empty world pricing against a custom equilibrium table
    pub fn with_equilibrium(equilibrium: EquilibriumTable) -> Self {
        Self {
            settlements: Vec::new(),
            equilibrium,
        }
    }

    /// The world's economy view
    ///
    /// Constructed fresh on every access and bound by reference, so
    /// valuation always reflects the current settlement inventories.
    pub fn economy(&self) -> Economy<'_> {
        Economy::new(self, &self.equilibrium)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
