//! In-memory index over a registry snapshot.
//!
//! [`RegistryIndex`] is the read-only view every evaluation works from:
//! O(1) entity lookup by identifier, O(1) authority-edge lookup, and
//! per-entity grant sets for both authorizations and recognitions.
//!
//! The index borrows the snapshot and holds no owned record data, so
//! building one per evaluation batch is cheap and the underlying snapshot
//! stays immutable for the whole batch.

use std::collections::HashMap;

use crate::registry::{AuthorizationGrant, Entity, EntityId, RecognitionGrant, RegistrySnapshot};

/// Read-only lookup structure over one snapshot.
pub struct RegistryIndex<'a> {
    /// Primary store: entity identifier → entity record.
    entities: HashMap<&'a str, &'a Entity>,
    /// Secondary index: entity identifier → held authorization grants.
    authorizations: HashMap<&'a str, Vec<&'a AuthorizationGrant>>,
    /// Secondary index: ecosystem identifier → issued recognition grants.
    recognitions: HashMap<&'a str, Vec<&'a RecognitionGrant>>,
}

impl<'a> RegistryIndex<'a> {
    /// Build the index from a snapshot.
    ///
    /// When the snapshot contains duplicate entity identifiers the later
    /// record wins; [`RegistrySnapshot::validate`] flags duplicates as a
    /// storage-layer integrity violation.
    pub fn build(snapshot: &'a RegistrySnapshot) -> Self {
        let mut entities = HashMap::with_capacity(snapshot.entities.len());
        for entity in &snapshot.entities {
            entities.insert(entity.id.as_str(), entity);
        }

        let mut authorizations: HashMap<&str, Vec<&AuthorizationGrant>> = HashMap::new();
        for grant in &snapshot.authorization_grants {
            authorizations
                .entry(grant.entity_id.as_str())
                .or_default()
                .push(grant);
        }

        let mut recognitions: HashMap<&str, Vec<&RecognitionGrant>> = HashMap::new();
        for grant in &snapshot.recognition_grants {
            recognitions
                .entry(grant.ecosystem_id.as_str())
                .or_default()
                .push(grant);
        }

        Self {
            entities,
            authorizations,
            recognitions,
        }
    }

    /// Look up an entity by identifier.
    pub fn entity(&self, id: &EntityId) -> Option<&'a Entity> {
        self.entities.get(id.as_str()).copied()
    }

    /// Return an entity's direct authority identifier, if it has one.
    pub fn authority_of(&self, id: &EntityId) -> Option<&'a EntityId> {
        self.entity(id).and_then(|e| e.authority_id.as_ref())
    }

    /// Return all authorization grants held by `entity_id`.
    pub fn authorizations_of(&self, entity_id: &EntityId) -> Vec<&'a AuthorizationGrant> {
        self.authorizations
            .get(entity_id.as_str())
            .cloned()
            .unwrap_or_default()
    }

    /// `true` when `entity_id` holds a grant for exactly (action, resource).
    pub fn holds_authorization(&self, entity_id: &EntityId, action: &str, resource: &str) -> bool {
        self.authorizations
            .get(entity_id.as_str())
            .map(|grants| grants.iter().any(|g| g.matches(action, resource)))
            .unwrap_or(false)
    }

    /// Return all recognition grants issued by `ecosystem_id`.
    pub fn recognitions_of(&self, ecosystem_id: &EntityId) -> Vec<&'a RecognitionGrant> {
        self.recognitions
            .get(ecosystem_id.as_str())
            .cloned()
            .unwrap_or_default()
    }

    /// Number of entities in the snapshot.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}
