//! Stress test: evaluation over a large registry and concurrent queries.

use std::sync::Arc;

use trqp_engine::{
    evaluate_authorization, evaluate_recognition, AuthorizationGrant, AuthorizationQuery, Entity,
    EntityKind, EvalConfig, ReasonCode, RecognitionGrant, RecognitionQuery, RegistryIndex,
    RegistrySnapshot,
};

/// A registry with one root, `ecosystems` mid-tier ecosystems, and
/// `orgs_per_eco` organizations under each, every org holding one grant.
fn wide_registry(ecosystems: usize, orgs_per_eco: usize) -> RegistrySnapshot {
    let mut snapshot =
        RegistrySnapshot::new().with_entity(Entity::new("did:scale:root", EntityKind::Ecosystem));

    for e in 0..ecosystems {
        let eco_id = format!("did:scale:eco-{e}");
        snapshot = snapshot.with_entity(
            Entity::new(eco_id.as_str(), EntityKind::Ecosystem).with_authority("did:scale:root"),
        );
        for o in 0..orgs_per_eco {
            let org_id = format!("did:scale:eco-{e}-org-{o}");
            snapshot = snapshot
                .with_entity(
                    Entity::new(org_id.as_str(), EntityKind::Organization)
                        .with_authority(eco_id.as_str()),
                )
                .with_authorization_grant(AuthorizationGrant::new(
                    org_id.as_str(),
                    "issue",
                    "credential",
                ));
        }
        snapshot = snapshot.with_recognition_grant(RecognitionGrant::new(
            "did:scale:root",
            "recognize",
            "ecosystem",
            format!("did:foreign:registry-{e}").as_str(),
            true,
        ));
    }
    snapshot
}

#[test]
fn stress_10k_entities_every_org_verifies() {
    let snapshot = wide_registry(100, 100);
    assert!(snapshot.validate().is_empty());

    let index = RegistryIndex::build(&snapshot);
    let config = EvalConfig::default();
    assert_eq!(index.entity_count(), 1 + 100 + 100 * 100);

    // Spot-check a spread of organizations against both tiers.
    for e in (0..100).step_by(17) {
        for o in (0..100).step_by(23) {
            let org = format!("did:scale:eco-{e}-org-{o}");
            let direct = evaluate_authorization(
                &index,
                &AuthorizationQuery::new(
                    org.as_str(),
                    format!("did:scale:eco-{e}").as_str(),
                    "issue",
                    "credential",
                ),
                &config,
            );
            assert!(direct.verified);

            let transitive = evaluate_authorization(
                &index,
                &AuthorizationQuery::new(org.as_str(), "did:scale:root", "issue", "credential"),
                &config,
            );
            assert!(transitive.verified);
        }
    }
}

#[test]
fn stress_concurrent_evaluations_share_one_snapshot() {
    // The engine is reentrant: many threads evaluating against the same
    // snapshot require no coordination.
    let snapshot = Arc::new(wide_registry(20, 20));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let snapshot = Arc::clone(&snapshot);
            std::thread::spawn(move || {
                let index = RegistryIndex::build(&snapshot);
                let config = EvalConfig::default();
                for e in 0..20 {
                    let org = format!("did:scale:eco-{e}-org-{}", t % 20);
                    let verdict = evaluate_authorization(
                        &index,
                        &AuthorizationQuery::new(
                            org.as_str(),
                            "did:scale:root",
                            "issue",
                            "credential",
                        ),
                        &config,
                    );
                    assert!(verdict.verified);

                    let verdict = evaluate_recognition(
                        &index,
                        &RecognitionQuery::new(
                            format!("did:foreign:registry-{e}").as_str(),
                            "did:scale:root",
                            "recognize",
                            "ecosystem",
                        ),
                    );
                    assert_eq!(verdict.reason, ReasonCode::Recognized);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("evaluation thread should not panic");
    }
}
