//! Measurement freshness policy.
//!
//! senseBoxes report at their own pace and sometimes stop reporting
//! entirely. A stale reading folded into the average would silently skew
//! it, so measurements older than the configured window are excluded.
//!
//! # Clock injection
//! Nothing here calls `Utc::now()`. The aggregator computes `now` once per
//! cycle and passes it down, which keeps every box judged against the same
//! instant and makes the policy purely deterministic in tests.

use chrono::{DateTime, Duration, Utc};

// ---------------------------------------------------------------------------
// Timestamp parsing
// ---------------------------------------------------------------------------

/// Parse a measurement's `createdAt` as an absolute point in time,
/// normalized to UTC.
///
/// Accepts any RFC 3339 offset form, including the "Z" suffix the
/// openSenseMap API uses.
pub fn parse_created_at(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc))
}

// ---------------------------------------------------------------------------
// Freshness check
// ---------------------------------------------------------------------------

/// Derive the freshness cutoff for one aggregation cycle.
///
/// Computed once before any box is fetched, never stored across cycles.
pub fn freshness_cutoff(now: DateTime<Utc>, window_secs: u64) -> DateTime<Utc> {
    now - Duration::seconds(window_secs as i64)
}

/// Returns `true` if the measurement is strictly newer than the cutoff.
///
/// The boundary is exclusive: a measurement exactly at the cutoff is NOT
/// fresh.
pub fn is_fresh(created_at: DateTime<Utc>, cutoff: DateTime<Utc>) -> bool {
    created_at > cutoff
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
