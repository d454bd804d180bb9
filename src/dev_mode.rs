/// Development mode utilities for working with saved report files
///
/// When the live IMD publication is unavailable, use this module to
/// replay a previously downloaded report through the pipeline for
/// testing and development.

use chrono::{DateTime, Utc};

use crate::analysis::pipeline::{RiskFeed, RiskPipeline};
use crate::layout::ReportLayout;

/// Environment variable naming the report file to replay.
pub const REPORT_PATH_VAR: &str = "DROMON_REPORT_PATH";

/// Fallback when no path is configured; this is where the download
/// script drops the current report.
const DEFAULT_REPORT_PATH: &str = "./data/district_rainfall.csv";

/// Configuration for development mode report replay
pub struct DevMode {
    /// Report file to replay.
    pub report_path: String,
    /// Layout to read it with (default: the current IMD revision).
    pub layout: ReportLayout,
}

impl DevMode {
    /// Create a dev mode configuration replaying the given report file
    pub fn new(report_path: &str) -> Self {
        Self {
            report_path: report_path.to_string(),
            layout: ReportLayout::imd_district_cd(),
        }
    }

    /// Create a dev mode configuration from the environment.
    ///
    /// Reads `DROMON_REPORT_PATH` (via `.env` if present) and falls back
    /// to the default download location.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let path =
            std::env::var(REPORT_PATH_VAR).unwrap_or_else(|_| DEFAULT_REPORT_PATH.to_string());
        Self::new(&path)
    }

    /// Replay the configured report as if it were the live feed.
    ///
    /// A missing or unreadable file yields the empty feed, same as
    /// production assembly.
    pub fn run_at(&self, now: DateTime<Utc>) -> RiskFeed {
        RiskPipeline::new(self.layout.clone()).run_on_report_at(&self.report_path, now)
    }

    /// Replay with the real clock.
    pub fn run(&self) -> RiskFeed {
        self.run_at(Utc::now())
    }
}
