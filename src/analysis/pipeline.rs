/// District risk pipeline and feed assembly.
///
/// Chains the decision core end to end: report grid → district rows →
/// scored records → ranked feed. The pipeline is an explicit value (no
/// module-level state), so two layouts can coexist and tests can run it
/// without setup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::alert::thresholds::{classify_wsi, is_critical_flag};
use crate::analysis::{ranking, scoring};
use crate::ingest::imd;
use crate::layout::ReportLayout;
use crate::logging::{self, DataSource};
use crate::model::{DistrictRiskRecord, DistrictRow};
use crate::report_source;

// ---------------------------------------------------------------------------
// Scoring one district
// ---------------------------------------------------------------------------

/// Builds the full risk record for one ingested district row.
///
/// `status` is classified from the rounded WSI that the record carries,
/// so a published record can never disagree with its own tier.
/// `sequence_id` is left at 0 here; ranking owns it.
pub fn score_district(row: DistrictRow) -> DistrictRiskRecord {
    let wsi = scoring::water_stress_index(row.rainfall_departure);
    DistrictRiskRecord {
        sequence_id: 0,
        district: row.district,
        rainfall_departure: row.rainfall_departure,
        wsi,
        status: classify_wsi(wsi),
        population: scoring::estimate_affected_population(row.rainfall_departure),
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// The drought risk pipeline for one report layout.
pub struct RiskPipeline {
    layout: ReportLayout,
}

impl RiskPipeline {
    pub fn new(layout: ReportLayout) -> RiskPipeline {
        RiskPipeline { layout }
    }

    /// Pipeline over the layout of the current IMD report revision.
    pub fn with_default_layout() -> RiskPipeline {
        RiskPipeline::new(ReportLayout::imd_district_cd())
    }

    pub fn layout(&self) -> &ReportLayout {
        &self.layout
    }

    /// Runs ingest → score → classify → rank over a report grid.
    ///
    /// Skipped rows are logged at debug level with their cause, and an
    /// ingest summary is logged after the run. Deterministic: the same
    /// grid always yields the same records in the same order.
    pub fn run(&self, grid: &[Vec<String>]) -> Vec<DistrictRiskRecord> {
        let outcomes = imd::scan_rows(grid, &self.layout);
        let rows_seen = outcomes.len();

        let mut rows = Vec::new();
        let mut skipped = 0usize;
        for outcome in outcomes {
            match outcome {
                Ok(row) => rows.push(row),
                Err(skip) => {
                    skipped += 1;
                    logging::debug(DataSource::Imd, None, &format!("row skipped: {}", skip));
                }
            }
        }
        let parsed = rows.len();

        let records: Vec<DistrictRiskRecord> = rows.into_iter().map(score_district).collect();
        let ranked = ranking::rank_districts(records);

        logging::log_ingest_summary(DataSource::Imd, rows_seen, parsed, skipped);
        ranked
    }

    /// Loads a report file and assembles the feed, stamped with the
    /// caller's clock.
    ///
    /// A missing or unreadable report folds into an empty feed ("0
    /// districts analyzed") after logging; the caller always gets a
    /// feed.
    pub fn run_on_report_at(&self, path: &str, now: DateTime<Utc>) -> RiskFeed {
        match report_source::load_grid(path) {
            Ok(grid) => RiskFeed::assemble(self.run(&grid), now),
            Err(err) => {
                logging::log_report_failure(path, "report load", &err);
                RiskFeed::empty(now)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Feed
// ---------------------------------------------------------------------------

/// The presentation payload the dashboard polls.
///
/// `total_analyzed` and `critical_flags` are counts over the published
/// (ranked, capped) records; they summarize what the feed shows, not the
/// whole report. `generated_at` is caller-supplied so assembly stays
/// deterministic under test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFeed {
    pub districts: Vec<DistrictRiskRecord>,
    pub total_analyzed: usize,
    pub critical_flags: usize,
    pub generated_at: DateTime<Utc>,
}

impl RiskFeed {
    /// Wraps ranked records into the feed shape, computing the counters.
    pub fn assemble(districts: Vec<DistrictRiskRecord>, generated_at: DateTime<Utc>) -> RiskFeed {
        let critical_flags = districts.iter().filter(|r| is_critical_flag(r.wsi)).count();
        RiskFeed {
            total_analyzed: districts.len(),
            critical_flags,
            districts,
            generated_at,
        }
    }

    /// The feed published when no report data is available.
    pub fn empty(generated_at: DateTime<Utc>) -> RiskFeed {
        RiskFeed::assemble(Vec::new(), generated_at)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StressStatus;
    use chrono::TimeZone;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 1, 6, 30, 0).unwrap()
    }

    /// Four non-data rows, then three districts and a summary line.
    fn report_grid() -> Vec<Vec<String>> {
        vec![
            row(&["DISTRICT RAINFALL DISTRIBUTION"]),
            row(&["PERIOD: 01.06.2024 TO 30.09.2024"]),
            row(&["STATE", "DISTRICT", "ACTUAL", "NORMAL", "DEP", "ACTUAL", "NORMAL", "DEP", "DEP"]),
            row(&["", "", "(mm)", "(mm)", "(%)", "(mm)", "(mm)", "(%)", "(%)"]),
            row(&["MH", "PUNE", "", "", "", "", "", "", "-8%"]),
            row(&["MH", "LATUR", "", "", "", "", "", "", "-90%"]),
            row(&["", "DISTRICT TOTAL NORMAL", "", "", "", "", "", "", ""]),
            row(&["MH", "NASHIK", "", "", "", "", "", "", "-65%"]),
        ]
    }

    #[test]
    fn test_pipeline_scores_classifies_and_ranks() {
        let pipeline = RiskPipeline::with_default_layout();
        let records = pipeline.run(&report_grid());

        let names: Vec<&str> = records.iter().map(|r| r.district.as_str()).collect();
        assert_eq!(names, vec!["LATUR", "NASHIK", "PUNE"], "worst deficit first");

        assert_eq!(records[0].wsi, 0.84);
        assert_eq!(records[0].status, StressStatus::Critical);
        assert_eq!(records[0].population, 5000 + 9000);

        assert_eq!(records[1].wsi, 0.69);
        assert_eq!(records[1].status, StressStatus::HighStress);
        assert_eq!(records[1].population, 5000 + 6500);

        assert_eq!(records[2].wsi, 0.35);
        assert_eq!(records[2].status, StressStatus::LowStress);
    }

    #[test]
    fn test_every_published_status_matches_its_wsi() {
        let pipeline = RiskPipeline::with_default_layout();
        for record in pipeline.run(&report_grid()) {
            assert_eq!(
                record.status,
                classify_wsi(record.wsi),
                "record for {} disagrees with its own WSI",
                record.district
            );
        }
    }

    #[test]
    fn test_sequence_ids_follow_rank_positions() {
        let pipeline = RiskPipeline::with_default_layout();
        let records = pipeline.run(&report_grid());
        let ids: Vec<i64> = records.iter().map(|r| r.sequence_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_feed_counts_cover_published_records() {
        let pipeline = RiskPipeline::with_default_layout();
        let feed = RiskFeed::assemble(pipeline.run(&report_grid()), fixed_now());

        assert_eq!(feed.total_analyzed, 3);
        assert_eq!(feed.critical_flags, 1, "only LATUR reaches the critical boundary");
        assert_eq!(feed.generated_at, fixed_now());
    }

    #[test]
    fn test_feed_counts_respect_the_publication_cap() {
        // 25 districts parse, 20 publish; the counters describe the feed
        // the dashboard sees, not the raw report.
        let mut grid = vec![row(&[]), row(&[]), row(&[]), row(&[])];
        for i in 0..25 {
            let departure = format!("-{}%", 30 + i);
            grid.push(row(&["MH", &format!("D{:02}", i), "", "", "", "", "", "", &departure]));
        }

        let pipeline = RiskPipeline::with_default_layout();
        let feed = RiskFeed::assemble(pipeline.run(&grid), fixed_now());
        assert_eq!(feed.total_analyzed, 20);
        assert_eq!(feed.districts.len(), 20);
    }

    #[test]
    fn test_empty_grid_yields_an_empty_feed() {
        let pipeline = RiskPipeline::with_default_layout();
        let feed = RiskFeed::assemble(pipeline.run(&[]), fixed_now());
        assert!(feed.districts.is_empty());
        assert_eq!(feed.total_analyzed, 0);
        assert_eq!(feed.critical_flags, 0);
    }

    #[test]
    fn test_missing_report_file_folds_into_an_empty_feed() {
        let pipeline = RiskPipeline::with_default_layout();
        let feed = pipeline.run_on_report_at("/nonexistent/dromon_rainfall.csv", fixed_now());
        assert_eq!(feed, RiskFeed::empty(fixed_now()));
    }

    #[test]
    fn test_identical_input_produces_byte_identical_feeds() {
        let pipeline = RiskPipeline::with_default_layout();
        let first = RiskFeed::assemble(pipeline.run(&report_grid()), fixed_now());
        let second = RiskFeed::assemble(pipeline.run(&report_grid()), fixed_now());

        let first_json = serde_json::to_string(&first).expect("feed should serialize");
        let second_json = serde_json::to_string(&second).expect("feed should serialize");
        assert_eq!(first_json, second_json, "same input and clock must give the same bytes");
    }

    #[test]
    fn test_feed_serializes_with_the_dashboard_field_names() {
        let pipeline = RiskPipeline::with_default_layout();
        let feed = RiskFeed::assemble(pipeline.run(&report_grid()), fixed_now());
        let value = serde_json::to_value(&feed).expect("feed should serialize");

        let first = &value["districts"][0];
        assert_eq!(first["id"], 1, "sequence_id serializes as `id`");
        assert_eq!(first["district"], "LATUR");
        assert_eq!(first["status"], "Critical");
        assert_eq!(value["total_analyzed"], 3);
        assert_eq!(value["critical_flags"], 1);

        let second = &value["districts"][1];
        assert_eq!(second["status"], "High Stress", "tier names keep their spaces");
    }
}
