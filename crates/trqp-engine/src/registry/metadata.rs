//! Trust registry metadata.
//!
//! Operator-facing description of the registry itself. Carried in the
//! snapshot and surfaced by the CLI; never consulted by the evaluator.

use serde::{Deserialize, Serialize};

use super::entity::EntityId;

/// Metadata describing the registry and its governing ecosystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryMetadata {
    /// Identifier of the ecosystem this registry serves.
    pub ecosystem_id: EntityId,
    /// A description of the trust registry.
    pub description: String,
    /// Identifier of the trust registry itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_registry_id: Option<EntityId>,
    /// Identifier of the governance framework the registry operates under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governance_framework_id: Option<EntityId>,
    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Identifiers of the registry's controllers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controllers: Vec<EntityId>,
}

impl RegistryMetadata {
    pub fn new(ecosystem_id: impl Into<EntityId>, description: impl Into<String>) -> Self {
        Self {
            ecosystem_id: ecosystem_id.into(),
            description: description.into(),
            trust_registry_id: None,
            governance_framework_id: None,
            name: None,
            controllers: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
