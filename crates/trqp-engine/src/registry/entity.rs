//! Entities registered in the trust registry.
//!
//! An entity is any registered participant: a governing ecosystem, an
//! organization, a person, a device, or a service. Every non-root entity
//! records the identifier of the ecosystem that governs it, forming the
//! authority forest the evaluator walks.

use serde::{Deserialize, Serialize};

/// Opaque, globally unique trust identifier — typically a DID.
///
/// The engine never inspects identifier structure; equality is exact
/// string comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub String);

impl EntityId {
    /// Create an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// What a registered entity is.
///
/// Only ecosystems may govern other entities or issue recognitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Ecosystem,
    Organization,
    Person,
    Device,
    Service,
}

/// Lifecycle status of an entity.
///
/// Only `Active` entities pass status gating during evaluation; the
/// distinction between `Inactive` and `Suspended` is administrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    Active,
    Inactive,
    Suspended,
}

/// A registered participant of the trust registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Globally unique trust identifier.
    pub id: EntityId,
    /// Governing ecosystem. `None` only for root ecosystems.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority_id: Option<EntityId>,
    /// Entity kind.
    pub kind: EntityKind,
    /// Lifecycle status.
    pub status: EntityStatus,
    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form description; irrelevant to evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Entity {
    /// Create an active entity with no authority (a root ecosystem when
    /// `kind` is [`EntityKind::Ecosystem`]).
    pub fn new(id: impl Into<EntityId>, kind: EntityKind) -> Self {
        Self {
            id: id.into(),
            authority_id: None,
            kind,
            status: EntityStatus::Active,
            name: None,
            description: None,
        }
    }

    /// Set the governing ecosystem identifier.
    pub fn with_authority(mut self, authority_id: impl Into<EntityId>) -> Self {
        self.authority_id = Some(authority_id.into());
        self
    }

    /// Set the lifecycle status.
    pub fn with_status(mut self, status: EntityStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// `true` when the entity passes status gating.
    pub fn is_active(&self) -> bool {
        self.status == EntityStatus::Active
    }

    /// `true` when the entity may govern others and issue recognitions.
    pub fn is_ecosystem(&self) -> bool {
        self.kind == EntityKind::Ecosystem
    }
}
