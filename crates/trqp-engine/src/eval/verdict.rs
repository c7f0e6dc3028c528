//! Verdicts and the closed reason-code taxonomy.
//!
//! Every evaluation produces a verdict carrying one [`ReasonCode`] from a
//! closed set, so callers can branch on the outcome reliably instead of
//! parsing free text. The human-readable message is derived from the
//! code, never the other way around.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::query::{AuthorizationQuery, RecognitionQuery};
use crate::registry::EntityId;

/// Machine-checkable outcome of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// Authorization query passed every check.
    Verified,
    /// Recognition query found a valid affirmative grant.
    Recognized,
    /// The queried entity is not registered.
    EntityNotFound,
    /// The named authority is nowhere in the entity's chain of governance.
    AuthorityMismatch,
    /// The queried entity exists but is not active.
    EntityInactive,
    /// No grant matches the requested (action, resource) pair.
    GrantNotFound,
    /// The recognizing ecosystem is not registered (or not an ecosystem).
    AuthorityNotFound,
    /// The recognizing ecosystem exists but is not active.
    AuthorityNotActive,
    /// A matching recognition grant explicitly denies the target.
    ExplicitlyDenied,
    /// The matching recognition has a future `valid_from`.
    NotYetValid,
    /// The matching recognition's `valid_until` has passed.
    Expired,
    /// The authority graph contains a cycle (data-integrity failure).
    CycleDetected,
    /// The authority chain exceeds the configured ceiling.
    ChainTooLong,
}

impl ReasonCode {
    /// Stable human-readable message for this code.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Verified => "authorization verified",
            Self::Recognized => "recognition verified",
            Self::EntityNotFound => "entity not found",
            Self::AuthorityMismatch => "authority is not in the entity's chain of governance",
            Self::EntityInactive => "entity not active",
            Self::GrantNotFound => "no matching grant for action and resource",
            Self::AuthorityNotFound => "recognizing ecosystem not found",
            Self::AuthorityNotActive => "recognizing ecosystem not active",
            Self::ExplicitlyDenied => "explicitly not recognized",
            Self::NotYetValid => "recognition not yet valid",
            Self::Expired => "recognition expired",
            Self::CycleDetected => "authority graph contains a cycle",
            Self::ChainTooLong => "authority chain exceeds the configured length limit",
        }
    }

    /// `true` for the two affirmative outcomes.
    pub fn is_affirmative(&self) -> bool {
        matches!(self, Self::Verified | Self::Recognized)
    }

    /// `true` for structural data-integrity failures.
    ///
    /// These must never be conflated with policy outcomes in logs or
    /// alerting: a negative verdict is the system working, a broken
    /// authority graph is not.
    pub fn is_integrity_failure(&self) -> bool {
        matches!(self, Self::CycleDetected | Self::ChainTooLong)
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of an authorization query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationVerdict {
    /// The entity the query asked about.
    pub entity_id: EntityId,
    /// The authority the query named.
    pub authority_id: EntityId,
    /// Queried action.
    pub action: String,
    /// Queried resource.
    pub resource: String,
    /// `true` iff every check passed.
    pub verified: bool,
    /// Machine-checkable outcome.
    pub reason: ReasonCode,
    /// Human-readable message derived from `reason`.
    pub message: String,
    /// The point-in-time context supplied with the query, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_requested: Option<DateTime<Utc>>,
    /// Wall-clock time of evaluation (always the actual clock, regardless
    /// of any query time context).
    pub time_evaluated: DateTime<Utc>,
}

impl AuthorizationVerdict {
    /// Build a verdict echoing the query fields.
    pub fn from_query(query: &AuthorizationQuery, reason: ReasonCode) -> Self {
        Self {
            entity_id: query.entity_id.clone(),
            authority_id: query.authority_id.clone(),
            action: query.action.clone(),
            resource: query.resource.clone(),
            verified: reason == ReasonCode::Verified,
            reason,
            message: reason.message().to_string(),
            time_requested: query.time,
            time_evaluated: crate::time::now(),
        }
    }
}

/// Outcome of a recognition query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionVerdict {
    /// The candidate recognized registry.
    pub entity_id: EntityId,
    /// The ecosystem expected to be doing the recognizing.
    pub authority_id: EntityId,
    /// Queried action.
    pub action: String,
    /// Queried resource.
    pub resource: String,
    /// `true` iff at least one valid affirmative grant matched.
    pub recognized: bool,
    /// Machine-checkable outcome.
    pub reason: ReasonCode,
    /// Human-readable message derived from `reason`.
    pub message: String,
    /// The point-in-time context supplied with the query, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_requested: Option<DateTime<Utc>>,
    /// Wall-clock time of evaluation.
    pub time_evaluated: DateTime<Utc>,
}

impl RecognitionVerdict {
    /// Build a verdict echoing the query fields.
    pub fn from_query(query: &RecognitionQuery, reason: ReasonCode) -> Self {
        Self {
            entity_id: query.entity_id.clone(),
            authority_id: query.authority_id.clone(),
            action: query.action.clone(),
            resource: query.resource.clone(),
            recognized: reason == ReasonCode::Recognized,
            reason,
            message: reason.message().to_string(),
            time_requested: query.time,
            time_evaluated: crate::time::now(),
        }
    }
}
