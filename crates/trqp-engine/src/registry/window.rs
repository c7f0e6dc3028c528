//! Temporal validity windows for recognition grants.
//!
//! A window is `[valid_from, valid_until]` with either bound optional;
//! an absent bound means unbounded in that direction. Bounds are
//! inclusive: an instant equal to either bound is inside the window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Position of an instant relative to a window.
///
/// The distinction between [`Before`](WindowPosition::Before) and
/// [`After`](WindowPosition::After) drives the "not yet valid" versus
/// "expired" diagnostics on recognition verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPosition {
    /// The instant precedes `valid_from`.
    Before,
    /// The instant is inside the window.
    Inside,
    /// The instant exceeds `valid_until`.
    After,
}

/// An optionally open-ended validity interval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityWindow {
    /// Not valid before this instant (None = unbounded).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    /// Not valid after this instant (None = unbounded).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
}

impl ValidityWindow {
    /// A window with both bounds absent — always valid.
    pub fn open() -> Self {
        Self::default()
    }

    /// A window bounded on both ends.
    pub fn between(valid_from: DateTime<Utc>, valid_until: DateTime<Utc>) -> Self {
        Self {
            valid_from: Some(valid_from),
            valid_until: Some(valid_until),
        }
    }

    /// A window with only a lower bound.
    pub fn starting(valid_from: DateTime<Utc>) -> Self {
        Self {
            valid_from: Some(valid_from),
            valid_until: None,
        }
    }

    /// A window with only an upper bound.
    pub fn ending(valid_until: DateTime<Utc>) -> Self {
        Self {
            valid_from: None,
            valid_until: Some(valid_until),
        }
    }

    /// Locate `at` relative to this window.
    pub fn position(&self, at: DateTime<Utc>) -> WindowPosition {
        if let Some(from) = self.valid_from {
            if at < from {
                return WindowPosition::Before;
            }
        }
        if let Some(until) = self.valid_until {
            if at > until {
                return WindowPosition::After;
            }
        }
        WindowPosition::Inside
    }

    /// `true` when `at` falls inside the window.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.position(at) == WindowPosition::Inside
    }
}
