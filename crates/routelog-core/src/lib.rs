pub mod error;
pub mod extraction;
pub mod facilities;
pub mod infer;
pub mod model;
pub mod parsing;
pub mod sheet;

use error::RouteLogError;
use extraction::PdfExtractor;
use facilities::FacilityTable;
use model::ParsedRoute;
use parsing::ParseConfig;

/// Main API entry point: extract visit records from a route-manifest
/// PDF.
///
/// Text extraction is delegated to the given backend; the parse
/// itself is pure and deterministic. A document with no recognizable
/// stops yields an empty `ParsedRoute`, not an error.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    facilities: &FacilityTable,
    config: &ParseConfig,
) -> Result<ParsedRoute, RouteLogError> {
    let pages = extractor.extract_pages(pdf_bytes)?;

    let all_lines: Vec<&str> = pages
        .iter()
        .flat_map(|p| p.lines.iter().map(|s| s.as_str()))
        .collect();

    Ok(parsing::parse_lines(&all_lines, facilities, config))
}

/// Parse pre-extracted text (one manifest line per text line). Used
/// for `.txt` inputs and tests, skipping the PDF extraction step.
pub fn parse_text(
    text: &str,
    facilities: &FacilityTable,
    config: &ParseConfig,
) -> ParsedRoute {
    let lines: Vec<&str> = text.lines().collect();
    parsing::parse_lines(&lines, facilities, config)
}
