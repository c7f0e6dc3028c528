//! TRQP Engine — trust-registry query evaluation.
//!
//! Resolves point-in-time authorization and recognition queries against a
//! hierarchical entity/authority graph with temporal validity, status
//! gating, and strictly directional recognition semantics.
//!
//! The engine exposes two pure entry points,
//! [`evaluate_authorization`] and [`evaluate_recognition`], each taking a
//! [`RegistryIndex`] built over an immutable [`RegistrySnapshot`]. No
//! state is kept between calls and nothing is written, so any number of
//! evaluations may run concurrently over one snapshot.
//!
//! Out of scope by design: DID document resolution, cryptographic
//! verification, and storage-layer constraint enforcement. The engine
//! detects broken upstream data (authority cycles, over-long chains)
//! during the walk and reports it through the verdict taxonomy instead
//! of failing.

pub mod error;
pub mod eval;
pub mod index;
pub mod registry;
pub mod storage;
pub mod time;

// Re-export primary types
pub use error::{RegistryError, Result};
pub use eval::{
    evaluate_authorization, evaluate_recognition, AuthorizationQuery, AuthorizationVerdict,
    ChainError, EvalConfig, ReasonCode, RecognitionQuery, RecognitionVerdict,
};
pub use index::RegistryIndex;
pub use registry::{
    AuthorizationGrant, AuthorizationType, Entity, EntityId, EntityKind, EntityStatus,
    IntegrityFinding, RecognitionGrant, RecognitionType, RegistryMetadata, RegistrySnapshot,
    ValidityWindow, WindowPosition,
};
