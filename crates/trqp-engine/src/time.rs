//! Time utilities for the TRQP engine.
//!
//! All instants are `chrono::DateTime<Utc>`.

use chrono::{DateTime, Utc};

use crate::error::{RegistryError, Result};

/// Return the current wall-clock time.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Parse an RFC 3339 / ISO-8601 timestamp from a query's time context.
///
/// Malformed input is rejected as an input error, never silently
/// defaulted to "now" — the boundary layer must surface it to the caller.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RegistryError::InvalidTimestamp(format!("{s}: {e}")))
}
