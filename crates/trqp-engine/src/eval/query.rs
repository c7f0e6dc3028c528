//! Query records accepted by the evaluator.
//!
//! The boundary layer parses its transport payload into these strongly
//! typed records before evaluation. Time context arrives already parsed:
//! a malformed timestamp string is an input error the boundary rejects via
//! [`crate::time::parse_timestamp`], never a silent default.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::registry::EntityId;

/// "Is `entity_id` authorized by `authority_id` to perform `action` on
/// `resource`, as of `time`?"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationQuery {
    /// The entity that is the subject of the query.
    pub entity_id: EntityId,
    /// The ecosystem being asked — must appear in the entity's authority chain.
    pub authority_id: EntityId,
    /// The action being checked.
    pub action: String,
    /// The resource being checked.
    pub resource: String,
    /// Point-in-time context. `None` means "now".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

impl AuthorizationQuery {
    pub fn new(
        entity_id: impl Into<EntityId>,
        authority_id: impl Into<EntityId>,
        action: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            authority_id: authority_id.into(),
            action: action.into(),
            resource: resource.into(),
            time: None,
        }
    }

    /// Attach a point-in-time context.
    pub fn at(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }
}

/// "Does ecosystem `authority_id` recognize registry `entity_id` for
/// `action` on `resource`, as of `time`?"
///
/// `entity_id` names the candidate recognized registry and may be foreign
/// — it need not be registered locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionQuery {
    /// The candidate recognized registry.
    pub entity_id: EntityId,
    /// The ecosystem expected to be doing the recognizing.
    pub authority_id: EntityId,
    /// The recognition class action.
    pub action: String,
    /// The recognition class resource.
    pub resource: String,
    /// Point-in-time context. `None` means "now".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

impl RecognitionQuery {
    pub fn new(
        entity_id: impl Into<EntityId>,
        authority_id: impl Into<EntityId>,
        action: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            authority_id: authority_id.into(),
            action: action.into(),
            resource: resource.into(),
            time: None,
        }
    }

    /// Attach a point-in-time context.
    pub fn at(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }
}
