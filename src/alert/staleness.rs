/// Risk feed staleness detection.
///
/// The rainfall report updates on a daily cycle under normal conditions.
/// During a developing drought, a stale feed is dangerous in a quiet way:
/// the dashboard keeps showing last week's ranking and nobody notices the
/// pipeline stopped. This module provides staleness checking so the host
/// can flag an outdated analysis.
///
/// # Clock injection
/// `is_stale_at` accepts a `now: DateTime<Utc>` parameter rather than
/// calling `Utc::now()` internally. This makes staleness purely
/// deterministic in tests without mocking or time manipulation.

use chrono::{DateTime, Utc};

use crate::analysis::pipeline::RiskFeed;

// ---------------------------------------------------------------------------
// Staleness check
// ---------------------------------------------------------------------------

/// Returns `true` if the feed's `generated_at` is older than
/// `max_age_hours` relative to `now`.
///
/// Staleness is defined as strictly greater than the threshold, measured
/// in whole hours:
///   age > max_age_hours  →  stale
///   age == max_age_hours →  not stale
///
/// A feed stamped in the future (clock skew between host and pipeline)
/// reads as age zero and is never stale.
///
/// # Typical thresholds
/// - Daily report cycle: 30 hours (one missed publication plus slack)
/// - Active drought review: 6 hours
pub fn is_stale_at(feed: &RiskFeed, max_age_hours: u64, now: DateTime<Utc>) -> bool {
    let age_hours = (now - feed.generated_at).num_hours().max(0);
    age_hours > max_age_hours as i64
}

/// Convenience wrapper that uses the real current time.
/// Use `is_stale_at` in tests to keep them deterministic.
pub fn is_stale(feed: &RiskFeed, max_age_hours: u64) -> bool {
    is_stale_at(feed, max_age_hours, Utc::now())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
