/// Criticality ranking for scored districts.
///
/// Orders the scored records so the worst-hit districts lead the feed,
/// caps the published list, and stamps each record's 1-based sequence id
/// from its final rank position.

use crate::model::DistrictRiskRecord;

/// Maximum number of districts published per feed. The dashboard renders
/// a fixed-height priority board; everything below this cut is noise to
/// the operators reading it.
pub const MAX_PUBLISHED_DISTRICTS: usize = 20;

/// Ranks scored records: WSI descending, ties kept in source order,
/// truncated to `MAX_PUBLISHED_DISTRICTS`, `sequence_id` stamped 1..N by
/// final position.
///
/// Empty input yields an empty ranking, never an error.
pub fn rank_districts(mut records: Vec<DistrictRiskRecord>) -> Vec<DistrictRiskRecord> {
    // sort_by is stable, so equal-WSI districts keep report order.
    // total_cmp gives a total order over f64; the scorer only emits
    // values in [0.3, 0.9] but the sort must not be the place that
    // breaks on a stray NaN.
    records.sort_by(|a, b| b.wsi.total_cmp(&a.wsi));
    records.truncate(MAX_PUBLISHED_DISTRICTS);
    for (index, record) in records.iter_mut().enumerate() {
        record.sequence_id = index as i64 + 1;
    }
    records
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
