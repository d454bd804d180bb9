/// IMD (India Meteorological Department) district rainfall ingestion.
///
/// Extracts district rows from the IMD district rainfall distribution
/// report, a fixed-position CSV table published for the whole country.
/// The report is built for human readers: banner and period rows up top,
/// repeated column headers, summary lines mixed into the data, blank
/// cells, and percentages with stray whitespace. This module reads it
/// positionally against a declared `ReportLayout` and drops what is not
/// district data.
///
/// Report portal: https://mausam.imd.gov.in (District Rainfall
/// Distribution, cumulative departure edition).

use crate::layout::ReportLayout;
use crate::model::{DistrictRow, RowSkip};

// ============================================================================
// Row Extraction
// ============================================================================

/// Scans every data row of a report grid against a layout, keeping the
/// per-row outcome.
///
/// The first `layout.skip_rows` physical rows are never scanned. Each
/// remaining row yields either a `DistrictRow` or the `RowSkip` cause
/// that excluded it; output order is source order. One bad row can never
/// abort the scan.
pub fn scan_rows(grid: &[Vec<String>], layout: &ReportLayout) -> Vec<Result<DistrictRow, RowSkip>> {
    grid.iter()
        .skip(layout.skip_rows)
        .map(|row| parse_data_row(row, layout))
        .collect()
}

/// Extracts only the valid district rows, folding every skip into
/// exclusion.
///
/// This is what the pipeline consumes; use `scan_rows` when the skip
/// causes matter.
pub fn extract_district_rows(grid: &[Vec<String>], layout: &ReportLayout) -> Vec<DistrictRow> {
    scan_rows(grid, layout)
        .into_iter()
        .filter_map(Result::ok)
        .collect()
}

/// Parses one data row (a row past the layout's skip count) against the
/// layout.
pub fn parse_data_row(row: &[String], layout: &ReportLayout) -> Result<DistrictRow, RowSkip> {
    let name_cell = row.get(layout.district_col).ok_or(RowSkip::NameCellAbsent)?;
    let district = name_cell.trim();

    // "nan" is how the upstream export spells a missing name cell.
    if district.is_empty() || district == "nan" {
        return Err(RowSkip::NameEmpty);
    }
    // Repeated column headers and summary lines carry these markers.
    // Case-sensitive on purpose: real district names are mixed-case or
    // unrelated uppercase, and the markers are always uppercase.
    if district.contains("DISTRICT") || district.contains("NORMAL") {
        return Err(RowSkip::MarkerRow(district.to_string()));
    }

    let rainfall_departure = row
        .get(layout.departure_col)
        .map(|cell| parse_departure_cell(cell))
        .unwrap_or(0.0);

    Ok(DistrictRow {
        district: district.to_string(),
        rainfall_departure,
    })
}

/// Parses one departure cell into a signed percentage.
///
/// Trims, strips a single trailing `%`, trims again, then parses. Every
/// failure mode coerces to `0.0`: a district with an unreadable departure
/// still appears in the feed (at the WSI floor) rather than vanishing
/// from it.
pub fn parse_departure_cell(cell: &str) -> f64 {
    let trimmed = cell.trim();
    let stripped = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    match stripped.parse::<f64>() {
        // "inf" and "NaN" parse as f64 but would poison the scoring
        // arithmetic downstream, so they coerce like any other junk.
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Whether a departure cell carries a readable number, as opposed to one
/// that `parse_departure_cell` would coerce to 0.0. Layout verification
/// uses this to tell real zeros from unreadable cells.
pub fn departure_cell_is_numeric(cell: &str) -> bool {
    let trimmed = cell.trim();
    let stripped = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    matches!(stripped.parse::<f64>(), Ok(value) if value.is_finite())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    /// A realistic report fragment: banner, period line, two header rows,
    /// then district data with a summary line mixed in.
    fn report_fixture() -> Vec<Vec<String>> {
        vec![
            row(&["DISTRICT RAINFALL DISTRIBUTION"]),
            row(&["PERIOD: 01.06.2024 TO 30.09.2024"]),
            row(&["STATE", "DISTRICT", "ACTUAL", "NORMAL", "DEP", "ACTUAL", "NORMAL", "DEP", "DEP"]),
            row(&["", "", "(mm)", "(mm)", "(%)", "(mm)", "(mm)", "(%)", "(%)"]),
            row(&["MAHARASHTRA", "LATUR", "210.1", "600.3", "-65", "210.1", "600.3", "-65", "-65%"]),
            row(&["MAHARASHTRA", "PUNE", "480.2", "520.9", "-8", "480.2", "520.9", "-8", "-8%"]),
            row(&["", "DISTRICT TOTAL NORMAL", "", "", "", "", "", "", ""]),
            row(&["MAHARASHTRA", "NASHIK", "602.7", "540.1", "12", "602.7", "540.1", "12", "12%"]),
        ]
    }

    #[test]
    fn test_extracts_districts_in_report_order() {
        let layout = ReportLayout::imd_district_cd();
        let rows = extract_district_rows(&report_fixture(), &layout);

        let names: Vec<&str> = rows.iter().map(|r| r.district.as_str()).collect();
        assert_eq!(
            names,
            vec!["LATUR", "PUNE", "NASHIK"],
            "ingestion must keep source order and drop only non-data rows"
        );
        assert_eq!(rows[0].rainfall_departure, -65.0);
        assert_eq!(rows[2].rainfall_departure, 12.0);
    }

    #[test]
    fn test_leading_rows_are_skipped_by_count_not_content() {
        // Row 2 of the fixture ("STATE", "DISTRICT", ...) would also be
        // caught by the marker filter, but row 1 would parse as a
        // district if the skip count were wrong.
        let layout = ReportLayout::imd_district_cd();
        let rows = extract_district_rows(&report_fixture(), &layout);
        assert!(
            rows.iter().all(|r| r.district != "PERIOD: 01.06.2024 TO 30.09.2024"),
            "banner rows must never surface as districts"
        );
    }

    #[test]
    fn test_summary_marker_rows_are_excluded_with_cause() {
        let layout = ReportLayout::imd_district_cd();
        let outcomes = scan_rows(&report_fixture(), &layout);

        // Fixture row 6 is the summary line; after the 4 skipped rows it
        // is outcome index 2.
        match &outcomes[2] {
            Err(RowSkip::MarkerRow(text)) => {
                assert_eq!(text, "DISTRICT TOTAL NORMAL");
            }
            other => panic!("summary row should skip as MarkerRow, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_and_blank_name_cells_are_excluded() {
        let layout = ReportLayout::imd_district_cd();
        let grid = vec![
            row(&[]),
            row(&[]),
            row(&[]),
            row(&[]),
            row(&["MH", "nan", "", "", "", "", "", "", "-20%"]),
            row(&["MH", "   ", "", "", "", "", "", "", "-20%"]),
            row(&["MH", "SOLAPUR", "", "", "", "", "", "", "-20%"]),
        ];
        let outcomes = scan_rows(&grid, &layout);
        assert_eq!(outcomes[0], Err(RowSkip::NameEmpty));
        assert_eq!(outcomes[1], Err(RowSkip::NameEmpty));
        assert!(outcomes[2].is_ok(), "the real district must survive its neighbors");
    }

    #[test]
    fn test_row_without_a_name_cell_is_excluded() {
        let layout = ReportLayout::imd_district_cd();
        let grid = vec![
            row(&[]),
            row(&[]),
            row(&[]),
            row(&[]),
            row(&["LONE-CELL"]),
        ];
        let outcomes = scan_rows(&grid, &layout);
        assert_eq!(outcomes[0], Err(RowSkip::NameCellAbsent));
    }

    #[test]
    fn test_district_name_is_trimmed() {
        let layout = ReportLayout::imd_district_cd();
        let grid = vec![
            row(&[]),
            row(&[]),
            row(&[]),
            row(&[]),
            row(&["MH", "  BEED  ", "", "", "", "", "", "", "-40"]),
        ];
        let rows = extract_district_rows(&grid, &layout);
        assert_eq!(rows[0].district, "BEED");
    }

    #[test]
    fn test_short_row_with_name_but_no_departure_coerces_to_zero() {
        let layout = ReportLayout::imd_district_cd();
        let grid = vec![
            row(&[]),
            row(&[]),
            row(&[]),
            row(&[]),
            row(&["MH", "BEED"]),
        ];
        let rows = extract_district_rows(&grid, &layout);
        assert_eq!(rows.len(), 1, "a missing departure cell must not drop the district");
        assert_eq!(rows[0].rainfall_departure, 0.0);
    }

    #[test]
    fn test_grid_shorter_than_skip_count_yields_nothing() {
        let layout = ReportLayout::imd_district_cd();
        let grid = vec![row(&["DISTRICT RAINFALL DISTRIBUTION"])];
        assert!(extract_district_rows(&grid, &layout).is_empty());
        assert!(scan_rows(&grid, &layout).is_empty());
    }

    // --- Departure cell parsing --------------------------------------------

    #[test]
    fn test_departure_strips_one_trailing_percent() {
        assert_eq!(parse_departure_cell("-65%"), -65.0);
        assert_eq!(parse_departure_cell(" -65 % "), -65.0);
        assert_eq!(parse_departure_cell("12%"), 12.0);
        assert_eq!(parse_departure_cell("-65.5%"), -65.5);
    }

    #[test]
    fn test_departure_without_percent_sign_still_parses() {
        assert_eq!(parse_departure_cell("-65"), -65.0);
        assert_eq!(parse_departure_cell(" 0 "), 0.0);
    }

    #[test]
    fn test_unreadable_departures_coerce_to_zero() {
        assert_eq!(parse_departure_cell(""), 0.0);
        assert_eq!(parse_departure_cell("   "), 0.0);
        assert_eq!(parse_departure_cell("N.A."), 0.0);
        assert_eq!(parse_departure_cell("--"), 0.0);
        assert_eq!(parse_departure_cell("-65%%"), 0.0, "only one trailing % is stripped");
    }

    #[test]
    fn test_non_finite_departures_coerce_to_zero() {
        assert_eq!(parse_departure_cell("inf"), 0.0);
        assert_eq!(parse_departure_cell("-inf"), 0.0);
        assert_eq!(parse_departure_cell("NaN"), 0.0);
    }

    #[test]
    fn test_numeric_check_tells_real_zeros_from_coerced_ones() {
        assert!(departure_cell_is_numeric("0"));
        assert!(departure_cell_is_numeric("0%"));
        assert!(departure_cell_is_numeric("-65%"));
        assert!(!departure_cell_is_numeric(""));
        assert!(!departure_cell_is_numeric("N.A."));
        assert!(!departure_cell_is_numeric("NaN"));
    }

    #[test]
    fn test_one_garbage_row_never_poisons_the_run() {
        let layout = ReportLayout::imd_district_cd();
        let mut grid = vec![row(&[]), row(&[]), row(&[]), row(&[])];
        grid.push(row(&["MH", "LATUR", "", "", "", "", "", "", "-65%"]));
        grid.push(row(&["@@@@@"]));
        grid.push(row(&["MH", "DISTRICTS BY NORMAL", "", "", "", "", "", "", ""]));
        grid.push(row(&["MH", "PUNE", "", "", "", "", "", "", "garbage"]));
        grid.push(row(&["MH", "NASHIK", "", "", "", "", "", "", "12%"]));

        let rows = extract_district_rows(&grid, &layout);
        let names: Vec<&str> = rows.iter().map(|r| r.district.as_str()).collect();
        assert_eq!(names, vec!["LATUR", "PUNE", "NASHIK"]);
        assert_eq!(rows[1].rainfall_departure, 0.0, "garbage departure coerces, row survives");
    }
}
