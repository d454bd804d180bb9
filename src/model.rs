/// Core data types for the drought monitoring decision core.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic and no I/O — only types and their serde contract.
///
/// Wire-facing types derive Serialize/Deserialize because the allocation
/// dashboard consumes them as JSON; a few fields carry renames to match the
/// payload names that dashboard already expects.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Severity tiers
// ---------------------------------------------------------------------------

/// Water stress severity tiers, in ascending order of severity.
///
/// Declaration order drives the derived `Ord`, so
/// `LowStress < Moderate < HighStress < Critical` holds and the
/// classifier's monotonicity can be asserted directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StressStatus {
    #[serde(rename = "Low Stress")]
    LowStress,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "High Stress")]
    HighStress,
    #[serde(rename = "Critical")]
    Critical,
}

impl std::fmt::Display for StressStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StressStatus::LowStress => write!(f, "Low Stress"),
            StressStatus::Moderate => write!(f, "Moderate"),
            StressStatus::HighStress => write!(f, "High Stress"),
            StressStatus::Critical => write!(f, "Critical"),
        }
    }
}

// ---------------------------------------------------------------------------
// District risk types
// ---------------------------------------------------------------------------

/// One valid district row extracted from an IMD district rainfall report.
///
/// Produced by `ingest::imd` in source row order and consumed by the
/// analysis pipeline. Transient: rebuilt from the report on every run,
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictRow {
    /// Trimmed display name from the report's district-name column.
    pub district: String,
    /// Signed departure-from-normal percentage; negative means deficit.
    pub rainfall_departure: f64,
}

/// A fully scored, classified, and ranked district, as published in the
/// risk feed.
///
/// Built fresh on every run and never mutated afterwards. `status` is
/// always the classification of `wsi`; the pipeline pairs them at
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictRiskRecord {
    /// 1-based position after ranking. Not a stable identifier: the same
    /// district moves between runs as fresh report data shifts its WSI.
    #[serde(rename = "id")]
    pub sequence_id: i64,
    pub district: String,
    pub rainfall_departure: f64,
    /// Water Stress Index in [0.3, 0.9], rounded to 2 decimal places.
    pub wsi: f64,
    pub status: StressStatus,
    /// Synthetic affected-population estimate derived from the departure,
    /// not a census figure. Kept for payload compatibility.
    pub population: i64,
}

// ---------------------------------------------------------------------------
// Aid request triage types
// ---------------------------------------------------------------------------

/// Verification verdict attached to an aid request by triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FraudFlag {
    #[serde(rename = "genuine")]
    Genuine,
    #[serde(rename = "suspicious")]
    Suspicious,
}

impl std::fmt::Display for FraudFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FraudFlag::Genuine => write!(f, "genuine"),
            FraudFlag::Suspicious => write!(f, "suspicious"),
        }
    }
}

/// An incoming water-tanker aid request as submitted by a local authority.
///
/// All fields are caller-supplied and taken as-is. `population` and
/// `liters_required` are signed so out-of-contract submissions still reach
/// triage instead of failing a cast; triage owns the non-positive policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AidRequest {
    pub authority: String,
    pub location: String,
    pub population: i64,
    pub liters_required: i64,
    pub reason: String,
    pub contact_info: String,
}

/// An aid request after triage: the submitted fields plus the two derived
/// ones, computed once and frozen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriagedRequest {
    pub authority: String,
    pub location: String,
    pub population: i64,
    pub liters_required: i64,
    pub reason: String,
    pub contact_info: String,
    /// 0.5 for routine requests, 0.9 for escalated ones.
    pub priority_score: f64,
    /// Serialized as `ai_verification` for the allocation dashboard.
    #[serde(rename = "ai_verification")]
    pub fraud_flag: FraudFlag,
}

// ---------------------------------------------------------------------------
// Row exclusion reasons
// ---------------------------------------------------------------------------

/// Why the ingestor excluded a report row.
///
/// Every skip carries its cause so tests and the debug log can inspect
/// it; at the pipeline boundary all variants fold into "drop the row and
/// keep going".
#[derive(Debug, Clone, PartialEq)]
pub enum RowSkip {
    /// The row is too short to contain the district-name column.
    NameCellAbsent,
    /// The district-name cell is empty, whitespace, or the `nan` marker
    /// the source emits for missing values.
    NameEmpty,
    /// The district-name cell carries repeated-header or summary text
    /// rather than a district name.
    MarkerRow(String),
}

impl std::fmt::Display for RowSkip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowSkip::NameCellAbsent => write!(f, "row has no district-name cell"),
            RowSkip::NameEmpty => write!(f, "district-name cell is empty"),
            RowSkip::MarkerRow(text) => {
                write!(f, "non-data marker row: {}", text)
            }
        }
    }
}

impl std::error::Error for RowSkip {}
