pub mod export;
pub mod facilities;
pub mod parse;

use routelog_core::error::RouteLogError;
use routelog_core::extraction::pdftotext::PdftotextExtractor;
use routelog_core::facilities::{builtin, FacilityTable};
use routelog_core::model::ParsedRoute;
use routelog_core::parsing::ParseConfig;
use std::path::{Path, PathBuf};

/// Load the facility table: a custom file when given, else the
/// builtin Colorado Springs table.
pub fn load_facilities(path: Option<&PathBuf>) -> Result<FacilityTable, RouteLogError> {
    match path {
        Some(p) => FacilityTable::load(p),
        None => builtin::builtin_table(),
    }
}

pub fn build_config(default_city: Option<String>) -> ParseConfig {
    let mut config = ParseConfig::default();
    if let Some(city) = default_city {
        config.default_city = city;
    }
    config
}

/// Parse a manifest file. `.txt` inputs are treated as pre-extracted
/// lines; anything else goes through pdftotext.
pub fn parse_input(
    input_file: &Path,
    facilities: &FacilityTable,
    config: &ParseConfig,
) -> Result<ParsedRoute, RouteLogError> {
    let is_text = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);

    if is_text {
        let text = std::fs::read_to_string(input_file)?;
        Ok(routelog_core::parse_text(&text, facilities, config))
    } else {
        let pdf_bytes = std::fs::read(input_file)?;
        let extractor = PdftotextExtractor::new();
        routelog_core::parse_pdf(&pdf_bytes, &extractor, facilities, config)
    }
}

/// Print dropped-block warnings to stderr.
pub fn report_warnings(route: &ParsedRoute) {
    for w in &route.warnings {
        eprintln!("  warning: {w}");
    }
}
