//! Recognition vocabulary and grants.
//!
//! Recognition is strictly directional: an ecosystem declares whether it
//! recognizes a target registry for a class of (action, resource), and the
//! existence of A→B carries no implication about B→A. Grants carry an
//! explicit polarity so an ecosystem can also record "we do NOT recognize
//! this registry", and an optional validity window.

use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::window::ValidityWindow;

/// An (action, resource) pair describing a class of recognition,
/// e.g. ("recognize", "ecosystem") or ("recognize", "credential").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionType {
    pub action: String,
    pub resource: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RecognitionType {
    pub fn new(action: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            resource: resource.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A directional recognition declaration owned by an ecosystem.
///
/// The target registry identifier names the recognized counterpart; it is
/// not necessarily a locally registered entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionGrant {
    /// The ecosystem doing the recognizing. Must be of kind ecosystem.
    pub ecosystem_id: EntityId,
    /// Recognition class action.
    pub action: String,
    /// Recognition class resource.
    pub resource: String,
    /// The registry being recognized (or denied).
    pub target_registry_id: EntityId,
    /// Polarity: `true` = recognized, `false` = explicitly denied.
    pub recognized: bool,
    /// Validity window; defaults to always valid.
    #[serde(default)]
    pub window: ValidityWindow,
}

impl RecognitionGrant {
    /// Create a grant with an open validity window.
    pub fn new(
        ecosystem_id: impl Into<EntityId>,
        action: impl Into<String>,
        resource: impl Into<String>,
        target_registry_id: impl Into<EntityId>,
        recognized: bool,
    ) -> Self {
        Self {
            ecosystem_id: ecosystem_id.into(),
            action: action.into(),
            resource: resource.into(),
            target_registry_id: target_registry_id.into(),
            recognized,
            window: ValidityWindow::open(),
        }
    }

    /// Restrict the grant to a validity window.
    pub fn with_window(mut self, window: ValidityWindow) -> Self {
        self.window = window;
        self
    }

    /// Exact match on recognition class and target registry.
    pub fn matches(&self, action: &str, resource: &str, target: &EntityId) -> bool {
        self.action == action && self.resource == resource && self.target_registry_id == *target
    }
}
