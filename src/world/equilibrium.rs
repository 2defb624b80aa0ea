//! Equilibrium configuration - per-kind supply/price anchor points
//!
//! An equilibrium entry pins the supply at which a resource trades at
//! its base price. Tables can be built in code or loaded from TOML so
//! scenarios can tune the economy without code changes. Kinds absent
//! from a table cannot be valued at all.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::resources::ResourceKind;

/// The (count, price) anchor at which a resource's market price equals
/// its base price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equilibrium {
    /// Supply at which the resource trades at `price`. Always > 0.
    pub count: u32,
    /// Base price at equilibrium supply. Always > 0.
    pub price: f64,
}

/// Per-kind equilibrium entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquilibriumTable {
    entries: AHashMap<ResourceKind, Equilibrium>,
}

impl EquilibriumTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default equilibria
    ///
    /// Wood, Stone and GoldOre carry no entry: they have no settled
    /// market and querying them is an error.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.insert(ResourceKind::Oak, 10, 10.0);
        table.insert(ResourceKind::CopperOre, 15, 15.0);
        table.insert(ResourceKind::IronOre, 20, 20.0);
        table
    }

    /// Add an equilibrium entry for a kind
    pub fn insert(&mut self, kind: ResourceKind, count: u32, price: f64) {
        debug_assert!(count > 0, "equilibrium count must be positive");
        debug_assert!(price > 0.0, "equilibrium price must be positive");
        self.entries.insert(kind, Equilibrium { count, price });
    }

    /// Get the equilibrium entry for a kind
    pub fn get(&self, kind: ResourceKind) -> Option<&Equilibrium> {
        self.entries.get(&kind)
    }

    /// Load an equilibrium table from a TOML file
    pub fn load_from_toml(path: &std::path::Path) -> Result<Self, EquilibriumLoadError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EquilibriumLoadError::IoError(e.to_string()))?;
        Self::parse_toml(&content)
    }

    /// Parse an equilibrium table from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self, EquilibriumLoadError> {
        let toml_data: TomlEquilibria = toml::from_str(content)
            .map_err(|e| EquilibriumLoadError::ParseError(e.to_string()))?;

        let mut table = Self::new();
        for entry in toml_data.equilibria {
            let (kind, equilibrium) = entry.into_entry()?;
            table.entries.insert(kind, equilibrium);
        }
        Ok(table)
    }
}

/// Error type for equilibrium loading
#[derive(Debug, Clone)]
pub enum EquilibriumLoadError {
    IoError(String),
    ParseError(String),
    InvalidResourceKind(String),
    InvalidEquilibrium(String),
}

impl std::fmt::Display for EquilibriumLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EquilibriumLoadError::IoError(e) => write!(f, "IO error: {}", e),
            EquilibriumLoadError::ParseError(e) => write!(f, "Parse error: {}", e),
            EquilibriumLoadError::InvalidResourceKind(e) => {
                write!(f, "Invalid resource kind: {}", e)
            }
            EquilibriumLoadError::InvalidEquilibrium(e) => {
                write!(f, "Invalid equilibrium: {}", e)
            }
        }
    }
}

impl std::error::Error for EquilibriumLoadError {}

/// TOML representation of the equilibrium file
#[derive(Debug, Deserialize)]
struct TomlEquilibria {
    equilibria: Vec<TomlEquilibrium>,
}

/// TOML representation of a single equilibrium entry
#[derive(Debug, Deserialize)]
struct TomlEquilibrium {
    resource: String,
    count: u32,
    price: f64,
}

impl TomlEquilibrium {
    fn into_entry(self) -> Result<(ResourceKind, Equilibrium), EquilibriumLoadError> {
        let kind = match self.resource.to_lowercase().as_str() {
            "wood" => ResourceKind::Wood,
            "oak" => ResourceKind::Oak,
            "stone" => ResourceKind::Stone,
            "copper_ore" => ResourceKind::CopperOre,
            "iron_ore" => ResourceKind::IronOre,
            "gold_ore" => ResourceKind::GoldOre,
            _ => return Err(EquilibriumLoadError::InvalidResourceKind(self.resource)),
        };

        if self.count == 0 {
            return Err(EquilibriumLoadError::InvalidEquilibrium(format!(
                "{}: count must be positive",
                self.resource
            )));
        }
        if self.price <= 0.0 {
            return Err(EquilibriumLoadError::InvalidEquilibrium(format!(
                "{}: price must be positive",
                self.resource
            )));
        }

        Ok((
            kind,
            Equilibrium {
                count: self.count,
                price: self.price,
            },
        ))
    }
}
