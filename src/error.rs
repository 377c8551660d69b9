use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;


#[derive(Debug, Error)]
pub enum Error {
    /// Guards hold live callbacks and must never be persisted.
    #[error("scoped callbacks cannot be serialized")]
    Serialize,

    /// Reconstructing a guard from external data would run an
    /// attacker-chosen callback on release.
    #[error("scoped callbacks cannot be deserialized")]
    Deserialize,

    #[error("failed to update signal disposition: {0}")]
    Signal(#[from] nix::Error),
}
