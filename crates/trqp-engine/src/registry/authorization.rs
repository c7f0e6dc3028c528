//! Authorization vocabulary and grants.
//!
//! An [`AuthorizationType`] defines an (action, resource) pair the registry
//! knows about; it carries no grant by itself. An [`AuthorizationGrant`] is
//! the join row that says "this entity holds this action+resource
//! capability" — many-to-many, with no temporal or directional qualifiers.

use serde::{Deserialize, Serialize};

use super::entity::EntityId;

/// An (action, resource) pair defined by the registry. Vocabulary only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationType {
    /// The action (e.g. "issue", "verify", "revoke").
    pub action: String,
    /// The resource the action applies to (e.g. "credential").
    pub resource: String,
    /// Non-normative information about the pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AuthorizationType {
    /// Create a vocabulary entry.
    pub fn new(action: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            resource: resource.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A direct assignment of an (action, resource) capability to an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationGrant {
    /// The entity holding the capability.
    pub entity_id: EntityId,
    /// Granted action.
    pub action: String,
    /// Granted resource.
    pub resource: String,
}

impl AuthorizationGrant {
    /// Create a grant assigning (action, resource) to `entity_id`.
    pub fn new(
        entity_id: impl Into<EntityId>,
        action: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            action: action.into(),
            resource: resource.into(),
        }
    }

    /// Exact string equality on both fields — no wildcarding, no
    /// namespace-prefix matching. Resource strings may contain
    /// namespace-like colons; they are opaque tokens here.
    pub fn matches(&self, action: &str, resource: &str) -> bool {
        self.action == action && self.resource == resource
    }
}
