pub mod fields;
pub mod normalize;

use crate::facilities::FacilityTable;
use crate::infer::infer_business_name;
use crate::model::{DropReason, ParseWarning, ParsedRoute, VisitRecord};
use fields::extract_fields;

/// Parser configuration: the default city and the recognized city set
/// for the address/city split. Passed explicitly so parsing stays a
/// pure function of its inputs.
#[derive(Debug, Clone)]
pub struct ParseConfig {
    pub default_city: String,
    /// Recognized city names, compared case-insensitively against the
    /// last comma segment of a location line.
    pub cities: Vec<String>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            default_city: "Colorado Springs".to_string(),
            cities: [
                "Colorado Springs",
                "Denver",
                "Pueblo",
                "Fountain",
                "Monument",
                "Manitou Springs",
                "Castle Rock",
                "Security",
                "Widefield",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl ParseConfig {
    /// Canonical config spelling for a city, matched on normalized text.
    pub fn recognized_city(&self, candidate: &str) -> Option<&str> {
        let key = normalize::normalize_key(candidate);
        if key.is_empty() {
            return None;
        }
        self.cities
            .iter()
            .find(|c| normalize::normalize_key(c) == key)
            .map(|c| c.as_str())
    }
}

/// The stop token found at the start of a stop-start line, still
/// unparsed, plus the remaining text on that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopToken<'a> {
    pub token: &'a str,
    pub rest: &'a str,
}

/// One stop's contiguous block of lines.
#[derive(Debug, Clone)]
struct StopBlock {
    /// The full stop-start line, kept for warnings.
    header_line: String,
    token: String,
    /// Block content: text after the stop token, then following lines.
    lines: Vec<String>,
}

/// Recognize a stop-start line and split off its stop token.
///
/// Recognized shapes:
/// - `"1. ..."`, `"1) ..."`, `"1- ..."` (short token glued to a delimiter)
/// - `"1 - ..."` (numeric token with a detached delimiter)
/// - `"#1 ..."`
/// - `"Stop 1 ..."` (case-insensitive)
/// - a line that is nothing but a number
///
/// A bare leading number with trailing text (e.g. "1400 E Boulder St")
/// is NOT a stop-start line; without a delimiter the number must stand
/// alone, otherwise every address line would open a block.
///
/// The token is returned unparsed: "X." is a recognized stop-start
/// line whose numeric parse fails later, dropping only that block.
pub fn stop_start(line: &str) -> Option<StopToken<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    // "#1 ..." form
    if let Some(after) = line.strip_prefix('#') {
        let after = after.trim_start();
        let token = after.split_whitespace().next()?;
        if is_stop_token(token) {
            let rest = after[token.len()..].trim_start();
            return Some(StopToken { token, rest });
        }
        return None;
    }

    let first = line.split_whitespace().next()?;
    let after_first = line[first.len()..].trim_start();

    // "Stop 1 ..." form. The token must lead with a digit here so that
    // prose like "Stop by later" does not open a block.
    if first.eq_ignore_ascii_case("stop") {
        let second = after_first.split_whitespace().next()?;
        let token = second.trim_end_matches(['.', ':', ')']);
        if is_stop_token(token) && token.starts_with(|c: char| c.is_ascii_digit()) {
            return Some(StopToken {
                token,
                rest: after_first[second.len()..].trim_start(),
            });
        }
        return None;
    }

    // "1." / "1)" / "1-" glued forms
    if let Some(delim_idx) = first.find(['.', ')', '-']) {
        let token = &first[..delim_idx];
        // The delimiter must end the token: "4.46" is a number, not a stop.
        if delim_idx + 1 == first.len() && is_stop_token(token) {
            return Some(StopToken {
                token,
                rest: after_first,
            });
        }
        return None;
    }

    if first.chars().all(|c| c.is_ascii_digit()) {
        // "1 - ..." detached delimiter form
        if let Some(second) = after_first.split_whitespace().next() {
            if second == "-" || second == "." {
                return Some(StopToken {
                    token: first,
                    rest: after_first[second.len()..].trim_start(),
                });
            }
            return None;
        }
        // Line is nothing but a number
        return Some(StopToken {
            token: first,
            rest: "",
        });
    }

    None
}

/// Candidate stop tokens: a short digit run ("1", "12"), or a single
/// other character (a misprint like "X" still marks a boundary).
/// Longer words are prose, not stop numbers.
fn is_stop_token(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    if token.chars().all(|c| c.is_ascii_digit()) {
        return token.len() <= 4;
    }
    token.chars().count() == 1 && token.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Partition lines into per-stop blocks.
///
/// Lines before the first stop-start line are headers and discarded.
/// Pure function: the same lines always yield the same boundaries.
fn segment_blocks(lines: &[&str]) -> Vec<StopBlock> {
    let mut blocks: Vec<StopBlock> = Vec::new();

    for &raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(start) = stop_start(line) {
            let mut block_lines = Vec::new();
            if !start.rest.is_empty() {
                block_lines.push(start.rest.to_string());
            }
            blocks.push(StopBlock {
                header_line: line.to_string(),
                token: start.token.to_string(),
                lines: block_lines,
            });
        } else if let Some(current) = blocks.last_mut() {
            current.lines.push(line.to_string());
        }
        // else: header/footer line before the first stop, discarded
    }

    blocks
}

/// Parse ordered document lines into visit records.
///
/// The core entry point: pure, deterministic, no I/O. Blocks with an
/// unparseable stop token or no recoverable content are dropped with a
/// warning; everything else degrades gracefully to a shorter result.
pub fn parse_lines(lines: &[&str], facilities: &FacilityTable, config: &ParseConfig) -> ParsedRoute {
    let blocks = segment_blocks(lines);
    let stop_lines_seen = blocks.len();

    let mut visits = Vec::new();
    let mut warnings = Vec::new();

    for block in &blocks {
        // Manifest numbering is sometimes misprinted, so the numeric
        // value is only required to parse; encountered order wins and
        // records are renumbered below.
        if block.token.parse::<u32>().is_err() {
            warnings.push(ParseWarning {
                reason: DropReason::UnparseableStopToken,
                line: block.header_line.clone(),
            });
            continue;
        }

        let extracted = extract_fields(&block.lines, config);
        if extracted.address.is_none() && extracted.name_line.is_none() {
            warnings.push(ParseWarning {
                reason: DropReason::NoUsableContent,
                line: block.header_line.clone(),
            });
            continue;
        }

        let address = extracted.address.clone().unwrap_or_default();
        let business_name = infer_business_name(
            &address,
            extracted.name_line.as_deref(),
            &extracted.notes,
            facilities,
        );
        let city = extracted
            .city
            .clone()
            .unwrap_or_else(|| config.default_city.clone());

        visits.push(VisitRecord {
            stop: 0, // renumbered below
            business_name,
            address,
            city,
            notes: extracted.notes,
        });
    }

    for (i, visit) in visits.iter_mut().enumerate() {
        visit.stop = (i + 1) as u32;
    }

    ParsedRoute {
        visits,
        warnings,
        stop_lines_seen,
    }
}
