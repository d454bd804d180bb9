/// Report layout registry for the drought monitoring service.
///
/// Defines the positional column contract of the IMD district rainfall
/// report. The report is a layout-versioned government product, not an
/// API: columns are addressed by fixed index, never discovered from
/// headers at runtime. This module is the single source of truth for
/// those indices — all other modules should take a `ReportLayout` rather
/// than hardcoding column positions.
///
/// When IMD revises the report format, add the new layout here (and bump
/// `version`); `verify::verify_layout` exists to catch the revision
/// before it silently misreads a column.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Layout type
// ---------------------------------------------------------------------------

/// Positional parse contract for one revision of the rainfall report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLayout {
    /// Layout revision tag, e.g. "imd-district-cd-2024".
    pub version: String,
    /// Leading physical rows with no district data (banner, period line,
    /// column header). Constant per layout.
    pub skip_rows: usize,
    /// 0-based column index of the district name.
    pub district_col: usize,
    /// 0-based column index of the cumulative departure-from-normal
    /// percentage for the reporting period.
    pub departure_col: usize,
}

impl ReportLayout {
    /// Layout of the IMD country-wide district rainfall distribution
    /// report (cumulative departure edition) as published today.
    ///
    /// The first four physical rows are the report banner, the period
    /// line, and a two-row column header; district names sit in the
    /// second column and the period departure in the ninth.
    pub fn imd_district_cd() -> ReportLayout {
        ReportLayout {
            version: "imd-district-cd-2024".to_string(),
            skip_rows: 4,
            district_col: 1,
            departure_col: 8,
        }
    }

    /// Parses a layout from TOML text and validates it.
    pub fn from_toml_str(text: &str) -> Result<ReportLayout, LayoutError> {
        let layout: ReportLayout =
            toml::from_str(text).map_err(|e| LayoutError::Parse(e.to_string()))?;
        layout.validate()
    }

    fn validate(self) -> Result<ReportLayout, LayoutError> {
        if self.version.trim().is_empty() {
            return Err(LayoutError::Invalid(
                "layout version must be non-empty".to_string(),
            ));
        }
        if self.district_col == self.departure_col {
            return Err(LayoutError::Invalid(format!(
                "district_col and departure_col must differ (both are {})",
                self.district_col
            )));
        }
        Ok(self)
    }
}

/// Loads and validates a layout from a TOML file on disk.
pub fn load_layout(path: &str) -> Result<ReportLayout, LayoutError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| LayoutError::Io(format!("{}: {}", path, e)))?;
    ReportLayout::from_toml_str(&text)
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can arise when loading or validating a report layout.
#[derive(Debug, PartialEq)]
pub enum LayoutError {
    /// The layout file could not be read.
    Io(String),
    /// The file was read but is not valid TOML for a layout.
    Parse(String),
    /// The layout parsed but fails a structural sanity check.
    Invalid(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::Io(msg) => write!(f, "Layout file error: {}", msg),
            LayoutError::Parse(msg) => write!(f, "Layout parse error: {}", msg),
            LayoutError::Invalid(msg) => write!(f, "Invalid layout: {}", msg),
        }
    }
}

impl std::error::Error for LayoutError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
