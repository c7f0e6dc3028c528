//! Query evaluation — the engine core.
//!
//! The eval module provides:
//! - Authority chain resolution with cycle and length guards
//! - Authorization evaluation over the governance hierarchy
//! - Recognition evaluation with polarity and temporal validity
//! - The closed reason-code taxonomy and verdict types
//!
//! Every evaluation is a pure function of (indexed snapshot, query,
//! config) plus the wall clock, so unlimited evaluations may run
//! concurrently against the same snapshot.

pub mod authorization;
pub mod chain;
pub mod query;
pub mod recognition;
pub mod verdict;

pub use authorization::evaluate_authorization;
pub use chain::{chain_declares_authority, resolve_authority_chain, ChainError};
pub use query::{AuthorizationQuery, RecognitionQuery};
pub use recognition::evaluate_recognition;
pub use verdict::{AuthorizationVerdict, ReasonCode, RecognitionVerdict};

/// Default ceiling on authority chain length.
pub const DEFAULT_MAX_CHAIN_LEN: usize = 64;

/// Evaluator tuning knobs.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Maximum authority chain length before the walk fails with
    /// [`ReasonCode::ChainTooLong`].
    pub max_chain_len: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_chain_len: DEFAULT_MAX_CHAIN_LEN,
        }
    }
}
