//! Resource taxonomy - gatherable resource kinds and their harvest capabilities

pub mod kind;

pub use kind::{HarvestMethod, ResourceKind};
