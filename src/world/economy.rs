//! Economy - scarcity-driven resource valuation
//!
//! The economy is a stateless view over a world: every valuation
//! re-sums live settlement inventories, so prices always reflect the
//! supply at the moment of the query. Price follows an inverse-supply
//! curve anchored at the kind's equilibrium point: at exactly the
//! equilibrium count in circulation the price equals the base price;
//! scarcity raises it in inverse proportion, abundance lowers it
//! symmetrically.

use crate::core::error::{Result, SteadingError};
use crate::resources::ResourceKind;
use crate::world::equilibrium::EquilibriumTable;
use crate::world::World;

/// Valuation view bound to one world
#[derive(Debug, Clone, Copy)]
pub struct Economy<'a> {
    world: &'a World,
    table: &'a EquilibriumTable,
}

impl<'a> Economy<'a> {
    /// Create an economy bound to a world and an equilibrium table
    pub fn new(world: &'a World, table: &'a EquilibriumTable) -> Self {
        Self { world, table }
    }

    /// Current scarcity-adjusted price of a resource kind
    ///
    /// Sums the kind's count across every settlement in the bound
    /// world. Zero supply prices identically to a supply of one: the
    /// scarcity ceiling, not an infinite price. Kinds without an
    /// equilibrium entry cannot be valued and fail with
    /// [`SteadingError::UnknownResourceKind`].
    pub fn real_value_of(&self, kind: ResourceKind) -> Result<f64> {
        let equilibrium = self
            .table
            .get(kind)
            .ok_or(SteadingError::UnknownResourceKind(kind))?;

        let supply: u64 = self
            .world
            .settlements
            .iter()
            .map(|s| u64::from(s.inventory.count(kind)))
            .sum();
        let effective = supply.max(1);

        let value = equilibrium.price * f64::from(equilibrium.count) / effective as f64;
        tracing::debug!("valued {:?}: supply {} -> {:.2}", kind, supply, value);
        Ok(value)
    }
}
