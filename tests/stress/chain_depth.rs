//! Stress test: authority chains at and beyond the length ceiling.

use trqp_engine::eval::{resolve_authority_chain, ChainError, DEFAULT_MAX_CHAIN_LEN};
use trqp_engine::{
    evaluate_authorization, AuthorizationGrant, AuthorizationQuery, Entity, EntityId, EntityKind,
    EvalConfig, RegistryIndex, RegistrySnapshot,
};

/// Build a registry with a single governance chain of `depth` ecosystems,
/// where `eco-0` is the root and `eco-{depth-1}` is the leaf.
fn chain_registry(depth: usize) -> RegistrySnapshot {
    let mut snapshot =
        RegistrySnapshot::new().with_entity(Entity::new("did:stress:eco-0", EntityKind::Ecosystem));
    for i in 1..depth {
        snapshot = snapshot.with_entity(
            Entity::new(format!("did:stress:eco-{i}"), EntityKind::Ecosystem)
                .with_authority(format!("did:stress:eco-{}", i - 1)),
        );
    }
    snapshot
}

#[test]
fn stress_chain_at_default_ceiling() {
    // Exactly DEFAULT_MAX_CHAIN_LEN entities resolve; one more does not.
    let snapshot = chain_registry(DEFAULT_MAX_CHAIN_LEN);
    let index = RegistryIndex::build(&snapshot);
    let leaf = EntityId::from(format!("did:stress:eco-{}", DEFAULT_MAX_CHAIN_LEN - 1).as_str());

    let chain = resolve_authority_chain(&index, &leaf, DEFAULT_MAX_CHAIN_LEN).unwrap();
    assert_eq!(chain.len(), DEFAULT_MAX_CHAIN_LEN);
    assert_eq!(chain[0], leaf);
    assert_eq!(*chain.last().unwrap(), EntityId::from("did:stress:eco-0"));
}

#[test]
fn stress_chain_beyond_ceiling() {
    let depth = DEFAULT_MAX_CHAIN_LEN + 20;
    let snapshot = chain_registry(depth);
    let index = RegistryIndex::build(&snapshot);
    let leaf = EntityId::from(format!("did:stress:eco-{}", depth - 1).as_str());

    let result = resolve_authority_chain(&index, &leaf, DEFAULT_MAX_CHAIN_LEN);
    assert!(matches!(result, Err(ChainError::TooLong { .. })));
}

#[test]
fn stress_deep_transitive_authorization() {
    // A grant at the bottom of a 50-deep hierarchy verifies against the
    // root at the top.
    let depth = 50;
    let leaf_id = format!("did:stress:eco-{}", depth - 1);
    let snapshot = chain_registry(depth)
        .with_authorization_grant(AuthorizationGrant::new(leaf_id.as_str(), "issue", "credential"));
    let index = RegistryIndex::build(&snapshot);

    let verdict = evaluate_authorization(
        &index,
        &AuthorizationQuery::new(leaf_id.as_str(), "did:stress:eco-0", "issue", "credential"),
        &EvalConfig::default(),
    );
    assert!(verdict.verified, "root authority should match transitively");
}

#[test]
fn stress_large_cycle_detected_without_overflow() {
    // A 1000-node ring must fail fast with CycleDetected from any start,
    // bounded by the chain ceiling (the walk hits the ceiling or the
    // revisit, whichever comes first — either way it terminates).
    let n = 1000;
    let mut snapshot = RegistrySnapshot::new();
    for i in 0..n {
        snapshot = snapshot.with_entity(
            Entity::new(format!("did:stress:ring-{i}"), EntityKind::Ecosystem)
                .with_authority(format!("did:stress:ring-{}", (i + 1) % n)),
        );
    }
    let index = RegistryIndex::build(&snapshot);

    // With a generous ceiling the revisit fires.
    let result = resolve_authority_chain(&index, &EntityId::from("did:stress:ring-0"), n + 10);
    assert!(matches!(result, Err(ChainError::CycleDetected(_))));

    // With the default ceiling the length guard fires first; the verdict
    // is still a clean integrity failure, not a hang.
    let verdict = evaluate_authorization(
        &index,
        &AuthorizationQuery::new("did:stress:ring-0", "did:stress:ring-1", "issue", "credential"),
        &EvalConfig::default(),
    );
    assert!(verdict.reason.is_integrity_failure());
}
