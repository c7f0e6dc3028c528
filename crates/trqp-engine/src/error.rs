//! Error types for the TRQP engine.
//!
//! Negative verdicts are not errors: "entity inactive" or "recognition
//! expired" are valid policy outcomes and are encoded as reason codes on
//! the verdict types, never as `RegistryError`. This enum covers input
//! errors (rejected before evaluation) and storage faults only.

/// Engine error types.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Unsupported snapshot file version: {0}")]
    UnsupportedVersion(u32),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, RegistryError>;
