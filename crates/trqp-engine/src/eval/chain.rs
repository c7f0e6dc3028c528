//! Authority chain resolution.
//!
//! Walks authority edges from a starting entity up to its root ecosystem,
//! producing the ordered ancestor chain. The walk is iterative with a
//! visited set: the graph is externally mutable, so a cycle must surface
//! as a first-class error rather than an infinite loop or a stack-depth
//! crash. Valid data never contains cycles; the check is mandatory anyway.

use std::collections::HashSet;

use crate::index::RegistryIndex;
use crate::registry::EntityId;

/// Structural failures of a chain walk.
///
/// These indicate malformed upstream data, not a negative policy outcome;
/// the evaluator surfaces them as distinct reason codes so it stays
/// available even when the authority graph is broken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("Authority cycle detected at entity: {0}")]
    CycleDetected(EntityId),

    #[error("Authority chain starting at {start} exceeds maximum length {max_len}")]
    TooLong { start: EntityId, max_len: usize },
}

/// Resolve the ordered authority chain for `start`.
///
/// The returned sequence runs from the queried entity to its root,
/// inclusive: `[start, authority(start), authority(authority(start)), …]`.
/// `max_len` bounds the chain length (entities visited) as a guard
/// against pathological graphs.
///
/// A declared authority identifier that names no registered entity ends
/// the walk: the dangling identifier is kept as the final chain element,
/// because it is part of the externally recorded chain of governance even
/// though it cannot be walked further.
pub fn resolve_authority_chain(
    index: &RegistryIndex<'_>,
    start: &EntityId,
    max_len: usize,
) -> Result<Vec<EntityId>, ChainError> {
    let mut chain: Vec<EntityId> = Vec::new();
    let mut visited: HashSet<EntityId> = HashSet::new();
    let mut current = start.clone();

    loop {
        if !visited.insert(current.clone()) {
            return Err(ChainError::CycleDetected(current));
        }
        chain.push(current.clone());
        if chain.len() > max_len {
            return Err(ChainError::TooLong {
                start: start.clone(),
                max_len,
            });
        }

        let Some(next) = index.authority_of(&current) else {
            // Root reached (or the starting identifier is unregistered).
            break;
        };

        if index.entity(next).is_none() {
            log::warn!(
                "authority {next} declared by {current} is not a registered entity; chain ends here"
            );
            chain.push(next.clone());
            break;
        }

        current = next.clone();
    }

    Ok(chain)
}

/// `true` when `authority` appears in the chain above the starting entity.
///
/// The first element is the queried entity itself and never counts as its
/// own authority: only an ancestor recorded above it can match.
pub fn chain_declares_authority(chain: &[EntityId], authority: &EntityId) -> bool {
    chain.iter().skip(1).any(|id| id == authority)
}
