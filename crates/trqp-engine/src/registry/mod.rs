//! Registry data model — entities, grants, vocabularies, and snapshots.
//!
//! The registry module provides:
//! - Entities with authority edges forming the governance forest
//! - Authorization vocabulary and entity→capability join rows
//! - Directional, optionally time-bounded recognition grants
//! - Temporal validity windows
//! - The immutable snapshot the evaluator consumes

pub mod authorization;
pub mod entity;
pub mod metadata;
pub mod recognition;
pub mod snapshot;
pub mod window;

pub use authorization::{AuthorizationGrant, AuthorizationType};
pub use entity::{Entity, EntityId, EntityKind, EntityStatus};
pub use metadata::RegistryMetadata;
pub use recognition::{RecognitionGrant, RecognitionType};
pub use snapshot::{IntegrityFinding, RegistrySnapshot};
pub use window::{ValidityWindow, WindowPosition};
