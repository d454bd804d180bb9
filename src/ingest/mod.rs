/// Ingestion of government rainfall publications.
///
/// Submodules:
/// - `imd` — positional extraction of district rows from the IMD
///   district rainfall distribution report.

pub mod imd;
