//! Water stress threshold checking.
//!
//! Maps a Water Stress Index onto the four severity tiers the dashboard
//! displays, and raises alerts for districts at the critical boundary.
//! Notification dispatch and alert deduplication live with the host
//! application; this module only decides what is alert-worthy.

use crate::model::{DistrictRiskRecord, StressStatus};

// ---------------------------------------------------------------------------
// Tier boundaries
// ---------------------------------------------------------------------------

/// WSI at or above this is Critical (and counts as a critical flag).
pub const CRITICAL_WSI: f64 = 0.8;

/// WSI at or above this (and below critical) is High Stress.
pub const HIGH_STRESS_WSI: f64 = 0.6;

/// WSI at or above this (and below high stress) is Moderate.
pub const MODERATE_WSI: f64 = 0.4;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classifies a Water Stress Index into its severity tier.
///
/// Boundaries are closed above: a WSI exactly at a boundary takes the
/// higher tier. Total over all finite inputs; anything below the
/// moderate boundary is Low Stress.
pub fn classify_wsi(wsi: f64) -> StressStatus {
    if wsi >= CRITICAL_WSI {
        StressStatus::Critical
    } else if wsi >= HIGH_STRESS_WSI {
        StressStatus::HighStress
    } else if wsi >= MODERATE_WSI {
        StressStatus::Moderate
    } else {
        StressStatus::LowStress
    }
}

/// Whether a WSI counts toward the feed's critical-flag total.
pub fn is_critical_flag(wsi: f64) -> bool {
    wsi >= CRITICAL_WSI
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

/// A water stress alert raised when a district reaches the critical tier.
#[derive(Debug, Clone, PartialEq)]
pub struct StressAlert {
    pub status: StressStatus,
    pub message: String,
}

/// Checks whether a ranked district warrants an alert and returns one
/// if so.
///
/// Returns `None` for every tier below Critical; sub-critical stress is
/// visible in the ranked feed and does not page anyone.
pub fn check_water_stress(record: &DistrictRiskRecord) -> Option<StressAlert> {
    if !is_critical_flag(record.wsi) {
        return None;
    }
    Some(StressAlert {
        status: StressStatus::Critical,
        message: format!(
            "{} at critical water stress (WSI {:.2}, rainfall departure {:.0}%)",
            record.district, record.wsi, record.rainfall_departure
        ),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
