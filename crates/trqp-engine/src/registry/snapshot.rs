//! Registry snapshot — the immutable record view the engine evaluates against.
//!
//! A snapshot holds every record the evaluator may consult: entities,
//! authorization/recognition vocabularies, and the grant rows. The storage
//! layer owns consistency; the engine only requires that one evaluation
//! sees a single materialized snapshot for its whole duration.

use serde::{Deserialize, Serialize};

use super::authorization::{AuthorizationGrant, AuthorizationType};
use super::entity::{Entity, EntityId, EntityKind};
use super::metadata::RegistryMetadata;
use super::recognition::{RecognitionGrant, RecognitionType};
use super::window::ValidityWindow;

/// All records of a trust registry, consistent as of some instant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Registry self-description; not consulted by the evaluator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RegistryMetadata>,
    /// Registered entities.
    #[serde(default)]
    pub entities: Vec<Entity>,
    /// Authorization vocabulary.
    #[serde(default)]
    pub authorization_types: Vec<AuthorizationType>,
    /// Recognition vocabulary.
    #[serde(default)]
    pub recognition_types: Vec<RecognitionType>,
    /// Entity → (action, resource) join rows.
    #[serde(default)]
    pub authorization_grants: Vec<AuthorizationGrant>,
    /// Ecosystem → target registry recognition rows.
    #[serde(default)]
    pub recognition_grants: Vec<RecognitionGrant>,
}

impl RegistrySnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity.
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    /// Add an authorization grant.
    pub fn with_authorization_grant(mut self, grant: AuthorizationGrant) -> Self {
        self.authorization_grants.push(grant);
        self
    }

    /// Add a recognition grant.
    pub fn with_recognition_grant(mut self, grant: RecognitionGrant) -> Self {
        self.recognition_grants.push(grant);
        self
    }

    /// Set the registry metadata.
    pub fn with_metadata(mut self, metadata: RegistryMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Check the structural invariants the storage layer is supposed to
    /// enforce. Advisory: the evaluator never assumes a snapshot passed
    /// validation, but operators and the CLI use this to surface bad data.
    pub fn validate(&self) -> Vec<IntegrityFinding> {
        let mut findings = Vec::new();

        let mut seen = std::collections::HashSet::new();
        for entity in &self.entities {
            if !seen.insert(entity.id.clone()) {
                findings.push(IntegrityFinding::DuplicateEntity {
                    id: entity.id.clone(),
                });
            }
        }

        let by_id: std::collections::HashMap<&EntityId, &Entity> =
            self.entities.iter().map(|e| (&e.id, e)).collect();

        for entity in &self.entities {
            match &entity.authority_id {
                None => {
                    if entity.kind != EntityKind::Ecosystem {
                        findings.push(IntegrityFinding::MissingAuthority {
                            entity: entity.id.clone(),
                        });
                    }
                }
                Some(authority) => match by_id.get(authority) {
                    None => findings.push(IntegrityFinding::UnknownAuthority {
                        entity: entity.id.clone(),
                        authority: authority.clone(),
                    }),
                    Some(record) if !record.is_ecosystem() => {
                        findings.push(IntegrityFinding::AuthorityNotEcosystem {
                            entity: entity.id.clone(),
                            authority: authority.clone(),
                        });
                    }
                    Some(_) => {}
                },
            }
        }

        for grant in &self.recognition_grants {
            match by_id.get(&grant.ecosystem_id) {
                None => findings.push(IntegrityFinding::RecognizerUnknown {
                    ecosystem: grant.ecosystem_id.clone(),
                }),
                Some(record) if !record.is_ecosystem() => {
                    findings.push(IntegrityFinding::RecognizerNotEcosystem {
                        ecosystem: grant.ecosystem_id.clone(),
                    });
                }
                Some(_) => {}
            }
        }

        findings
    }

    /// A small demo registry: one root ecosystem governing a partner
    /// ecosystem and an issuing organization, with the default
    /// authorization vocabulary and one outbound recognition.
    pub fn seeded() -> Self {
        let root = "did:example:rootnet";
        let partners = "did:example:partners";
        let issuer = "did:example:issuer";

        Self::new()
            .with_metadata(
                RegistryMetadata::new(root, "Demo trust registry for the rootnet ecosystem")
                    .with_name("Rootnet Trust Registry"),
            )
            .with_entity(Entity::new(root, EntityKind::Ecosystem).with_name("Rootnet"))
            .with_entity(
                Entity::new(partners, EntityKind::Ecosystem)
                    .with_authority(root)
                    .with_name("Rootnet Partners"),
            )
            .with_entity(
                Entity::new(issuer, EntityKind::Organization)
                    .with_authority(partners)
                    .with_name("Demo Issuer"),
            )
            .with_types()
            .with_authorization_grant(AuthorizationGrant::new(issuer, "issue", "credential"))
            .with_authorization_grant(AuthorizationGrant::new(issuer, "verify", "credential"))
            .with_recognition_grant(
                RecognitionGrant::new(
                    root,
                    "recognize",
                    "ecosystem",
                    "did:example:partner-registry",
                    true,
                )
                .with_window(ValidityWindow::open()),
            )
    }

    fn with_types(mut self) -> Self {
        self.authorization_types = vec![
            AuthorizationType::new("issue", "credential")
                .with_description("Issue verifiable credentials"),
            AuthorizationType::new("verify", "credential")
                .with_description("Verify verifiable credentials"),
            AuthorizationType::new("revoke", "credential")
                .with_description("Revoke verifiable credentials"),
            AuthorizationType::new("register", "entity")
                .with_description("Register new entities in the ecosystem"),
        ];
        self.recognition_types = vec![
            RecognitionType::new("recognize", "ecosystem")
                .with_description("Recognition of other ecosystems"),
            RecognitionType::new("recognize", "credential")
                .with_description("Recognition of credential types from other ecosystems"),
        ];
        self
    }
}

/// A data-integrity violation found in a snapshot.
///
/// These mirror the storage layer's referential constraints; findings mean
/// the upstream data is malformed, not that evaluation will fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityFinding {
    /// Two entities share the same identifier.
    DuplicateEntity { id: EntityId },
    /// A non-ecosystem entity has no governing authority.
    MissingAuthority { entity: EntityId },
    /// An entity's authority names no registered entity.
    UnknownAuthority { entity: EntityId, authority: EntityId },
    /// An entity's authority is not of kind ecosystem.
    AuthorityNotEcosystem { entity: EntityId, authority: EntityId },
    /// A recognition grant is owned by an unregistered identifier.
    RecognizerUnknown { ecosystem: EntityId },
    /// A recognition grant is owned by a non-ecosystem entity.
    RecognizerNotEcosystem { ecosystem: EntityId },
}

impl std::fmt::Display for IntegrityFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEntity { id } => write!(f, "duplicate entity identifier: {id}"),
            Self::MissingAuthority { entity } => {
                write!(f, "non-ecosystem entity {entity} has no authority")
            }
            Self::UnknownAuthority { entity, authority } => {
                write!(f, "entity {entity} names unknown authority {authority}")
            }
            Self::AuthorityNotEcosystem { entity, authority } => {
                write!(f, "authority {authority} of entity {entity} is not an ecosystem")
            }
            Self::RecognizerUnknown { ecosystem } => {
                write!(f, "recognition grant owned by unregistered identifier {ecosystem}")
            }
            Self::RecognizerNotEcosystem { ecosystem } => {
                write!(f, "recognition grant owned by non-ecosystem entity {ecosystem}")
            }
        }
    }
}
