use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteadingError {
    #[error("Resource has no defined equilibrium: {0:?}")]
    UnknownResourceKind(crate::resources::ResourceKind),

    #[error("Equilibrium config error: {0}")]
    EquilibriumLoad(#[from] crate::world::equilibrium::EquilibriumLoadError),
}

pub type Result<T> = std::result::Result<T, SteadingError>;
