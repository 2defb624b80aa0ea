//! Resource kinds for gatherable resources (wood, stone, ore)
//!
//! Every resource carries exactly one kind. The kind is the key for
//! inventory counting and equilibrium lookup, and each kind is tagged
//! with the harvest action that gathers it.

use serde::{Deserialize, Serialize};

/// Discrete category of a harvestable resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Wood,
    Oak,
    Stone,
    CopperOre,
    IronOre,
    GoldOre,
}

/// Action used to gather a resource from the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarvestMethod {
    Chop,
    Mine,
    Quarry,
}

impl ResourceKind {
    /// All resource kinds
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Wood,
        ResourceKind::Oak,
        ResourceKind::Stone,
        ResourceKind::CopperOre,
        ResourceKind::IronOre,
        ResourceKind::GoldOre,
    ];

    /// The harvest action that gathers this kind
    pub fn harvest_method(&self) -> HarvestMethod {
        match self {
            ResourceKind::Wood | ResourceKind::Oak => HarvestMethod::Chop,
            ResourceKind::Stone => HarvestMethod::Quarry,
            ResourceKind::CopperOre | ResourceKind::IronOre | ResourceKind::GoldOre => {
                HarvestMethod::Mine
            }
        }
    }

    /// Whether felling gathers this kind
    pub fn is_chopable(&self) -> bool {
        self.harvest_method() == HarvestMethod::Chop
    }

    /// Whether mining gathers this kind
    pub fn is_mineable(&self) -> bool {
        self.harvest_method() == HarvestMethod::Mine
    }

    /// Whether quarrying gathers this kind
    pub fn is_quarryable(&self) -> bool {
        self.harvest_method() == HarvestMethod::Quarry
    }
}

impl HarvestMethod {
    /// Verb used in logs and action descriptions
    pub fn verb(&self) -> &'static str {
        match self {
            HarvestMethod::Chop => "chop",
            HarvestMethod::Mine => "mine",
            HarvestMethod::Quarry => "quarry",
        }
    }
}
