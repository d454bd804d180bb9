/// Aid request triage.
///
/// Scores incoming water-tanker requests with a single plausibility
/// check: how much water is being requested per person served. The check
/// is deliberately crude (a declared heuristic, like the WSI) and errs
/// toward flagging; a flagged request is escalated for human review, not
/// rejected.

use crate::logging::{self, DataSource};
use crate::model::{AidRequest, FraudFlag, TriagedRequest};

// ---------------------------------------------------------------------------
// Triage constants
// ---------------------------------------------------------------------------

/// Liters per served person above which a request is implausible. One
/// tanker delivery covers drinking and cooking needs for days; 200 L per
/// person in a single request is already generous.
pub const MAX_LITERS_PER_CAPITA: i64 = 200;

/// Priority score for requests flagged suspicious (escalated for review).
pub const PRIORITY_ESCALATED: f64 = 0.9;

/// Priority score for routine, plausible requests.
pub const PRIORITY_ROUTINE: f64 = 0.5;

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Triage decision over the two numeric fields of a request.
///
/// Requests above `population * 200` liters are suspicious with score
/// 0.9; everything else is genuine with score 0.5. A non-positive
/// population gives a threshold of 0, so any positive volume against it
/// is suspicious. Total over all `i64` inputs: the arithmetic saturates
/// instead of overflowing, and no input panics.
pub fn assess(population: i64, liters_required: i64) -> (f64, FraudFlag) {
    let plausible_limit = population.max(0).saturating_mul(MAX_LITERS_PER_CAPITA);
    if liters_required > plausible_limit {
        (PRIORITY_ESCALATED, FraudFlag::Suspicious)
    } else {
        (PRIORITY_ROUTINE, FraudFlag::Genuine)
    }
}

/// Triages a full aid request into its frozen record.
///
/// Submitted fields pass through untouched; the two derived fields are
/// computed once here and never recomputed. Suspicious requests are
/// logged for the review queue.
pub fn triage_request(request: AidRequest) -> TriagedRequest {
    let (priority_score, fraud_flag) = assess(request.population, request.liters_required);

    if fraud_flag == FraudFlag::Suspicious {
        logging::warn(
            DataSource::Triage,
            Some(&request.location),
            &format!(
                "request from {} flagged: {} L for {} people",
                request.authority, request.liters_required, request.population
            ),
        );
    }

    TriagedRequest {
        authority: request.authority,
        location: request.location,
        population: request.population,
        liters_required: request.liters_required,
        reason: request.reason,
        contact_info: request.contact_info,
        priority_score,
        fraud_flag,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
