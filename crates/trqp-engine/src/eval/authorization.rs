//! Authorization query evaluation.
//!
//! The decision procedure short-circuits in a fixed order, so a verdict
//! always carries the first failing check:
//!
//! 1. The entity must be registered.
//! 2. The named authority must appear in the entity's authority chain —
//!    the entity's own identifier never counts. Transitive ancestors
//!    match: an ecosystem anywhere above the entity can answer for it.
//! 3. The entity must be active.
//! 4. The entity must hold a grant for exactly (action, resource).
//!
//! A cycle or over-long chain found during step 2 yields a distinct
//! integrity reason code; the evaluator stays available on bad data.

use super::chain::{chain_declares_authority, resolve_authority_chain, ChainError};
use super::query::AuthorizationQuery;
use super::verdict::{AuthorizationVerdict, ReasonCode};
use super::EvalConfig;
use crate::index::RegistryIndex;

/// Evaluate an authorization query against an indexed snapshot.
///
/// Pure and reentrant: no writes, no I/O, no caching across calls. The
/// authorization relation itself has no temporal component; any supplied
/// time context is echoed on the verdict for the caller's benefit.
pub fn evaluate_authorization(
    index: &RegistryIndex<'_>,
    query: &AuthorizationQuery,
    config: &EvalConfig,
) -> AuthorizationVerdict {
    log::debug!(
        "authorization query: entity={} authority={} action={} resource={}",
        query.entity_id,
        query.authority_id,
        query.action,
        query.resource
    );

    let Some(entity) = index.entity(&query.entity_id) else {
        return AuthorizationVerdict::from_query(query, ReasonCode::EntityNotFound);
    };

    let chain = match resolve_authority_chain(index, &query.entity_id, config.max_chain_len) {
        Ok(chain) => chain,
        Err(ChainError::CycleDetected(at)) => {
            log::warn!(
                "authority cycle at {at} while evaluating authorization for {}",
                query.entity_id
            );
            return AuthorizationVerdict::from_query(query, ReasonCode::CycleDetected);
        }
        Err(ChainError::TooLong { start, max_len }) => {
            log::warn!("authority chain from {start} exceeds {max_len} entries");
            return AuthorizationVerdict::from_query(query, ReasonCode::ChainTooLong);
        }
    };

    if !chain_declares_authority(&chain, &query.authority_id) {
        return AuthorizationVerdict::from_query(query, ReasonCode::AuthorityMismatch);
    }

    if !entity.is_active() {
        return AuthorizationVerdict::from_query(query, ReasonCode::EntityInactive);
    }

    if !index.holds_authorization(&query.entity_id, &query.action, &query.resource) {
        return AuthorizationVerdict::from_query(query, ReasonCode::GrantNotFound);
    }

    AuthorizationVerdict::from_query(query, ReasonCode::Verified)
}
