//! Report file loading.
//!
//! Turns an on-disk rainfall report into the raw cell grid that
//! `ingest::imd` consumes. This is the only module that touches the
//! filesystem for report data; the pipelines themselves stay I/O-free so
//! they can run over any grid a caller supplies.
//!
//! The report files are government exports: ragged row widths, quoted
//! cells with embedded commas, stray whitespace. The reader is configured
//! to accept all of that and hand every cell through as a plain string.

use std::path::Path;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading a report file.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The report file does not exist (often: not downloaded yet).
    #[error("Report file not found: {0}")]
    Missing(String),

    /// Reading the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file was read but could not be parsed as CSV.
    #[error("CSV error: {0}")]
    Malformed(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Grid loading
// ---------------------------------------------------------------------------

/// Loads a report file into a row-by-column grid of cell strings.
///
/// Rows keep their own widths (`flexible`), no row is treated as a
/// header, and cells are whitespace-trimmed on read. Distinguishes a
/// missing file (`ReportError::Missing`) from an unreadable one so
/// callers can treat "not downloaded yet" as routine.
pub fn load_grid(path: &str) -> Result<Vec<Vec<String>>, ReportError> {
    if !Path::new(path).exists() {
        return Err(ReportError::Missing(path.to_string()));
    }
    let text = std::fs::read_to_string(path)?;
    parse_grid(&text)
}

/// Parses report text already in memory into the same grid shape.
pub fn parse_grid(text: &str) -> Result<Vec<Vec<String>>, ReportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record?;
        grid.push(record.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(grid)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
