//! Recognition query evaluation.
//!
//! Recognition asks whether the ecosystem named as `authority_id`
//! recognizes the registry named as `entity_id` for an (action, resource)
//! class at the reference instant. The candidate registry may be foreign;
//! only the recognizing ecosystem must be registered locally.
//!
//! Registries declare trust additively, so multiple grants for the same
//! (class, target) pair are resolved any-match: one currently valid
//! affirmative grant suffices, even if another matching grant is negative
//! or expired. Only when no valid affirmative exists is a failing reason
//! reported, most specific first: an explicit denial beats a temporal
//! failure, and expiry beats not-yet-valid.

use super::query::RecognitionQuery;
use super::verdict::{ReasonCode, RecognitionVerdict};
use crate::index::RegistryIndex;
use crate::registry::WindowPosition;

/// Evaluate a recognition query against an indexed snapshot.
///
/// The reference instant is the query's time context when supplied,
/// otherwise the wall clock at evaluation.
pub fn evaluate_recognition(
    index: &RegistryIndex<'_>,
    query: &RecognitionQuery,
) -> RecognitionVerdict {
    let at = query.time.unwrap_or_else(crate::time::now);
    log::debug!(
        "recognition query: target={} ecosystem={} action={} resource={} at={}",
        query.entity_id,
        query.authority_id,
        query.action,
        query.resource,
        at.to_rfc3339()
    );

    let Some(authority) = index.entity(&query.authority_id) else {
        return RecognitionVerdict::from_query(query, ReasonCode::AuthorityNotFound);
    };
    if !authority.is_ecosystem() {
        log::debug!("{} is registered but not an ecosystem", query.authority_id);
        return RecognitionVerdict::from_query(query, ReasonCode::AuthorityNotFound);
    }
    if !authority.is_active() {
        return RecognitionVerdict::from_query(query, ReasonCode::AuthorityNotActive);
    }

    let mut denied = false;
    let mut expired = false;
    let mut not_yet_valid = false;

    for grant in index.recognitions_of(&query.authority_id) {
        if !grant.matches(&query.action, &query.resource, &query.entity_id) {
            continue;
        }
        // A denial never consults its window: an explicit negative
        // declaration holds regardless of temporal bounds.
        if !grant.recognized {
            denied = true;
            continue;
        }
        match grant.window.position(at) {
            WindowPosition::Inside => {
                return RecognitionVerdict::from_query(query, ReasonCode::Recognized);
            }
            WindowPosition::After => expired = true,
            WindowPosition::Before => not_yet_valid = true,
        }
    }

    let reason = if denied {
        ReasonCode::ExplicitlyDenied
    } else if expired {
        ReasonCode::Expired
    } else if not_yet_valid {
        ReasonCode::NotYetValid
    } else {
        ReasonCode::GrantNotFound
    };
    RecognitionVerdict::from_query(query, reason)
}
