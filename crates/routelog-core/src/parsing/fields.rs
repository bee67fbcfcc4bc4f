use crate::parsing::normalize::{is_street_suffix, short_street_suffix};
use crate::parsing::ParseConfig;

/// Fields recovered from one stop's block, before name inference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockFields {
    pub address: Option<String>,
    /// City recognized from the address line, if any.
    pub city: Option<String>,
    /// A pre-address line that looks like a standalone business name.
    pub name_line: Option<String>,
    /// Remaining free text, joined with single spaces.
    pub notes: String,
}

/// Separate one block's lines into address, city, name candidate and
/// notes. Total: always produces a value, even for junk input.
pub fn extract_fields(lines: &[String], config: &ParseConfig) -> BlockFields {
    let mut out = BlockFields::default();
    let mut notes: Vec<String> = Vec::new();

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if is_boilerplate(line) {
            continue;
        }

        if out.address.is_none() {
            if let Some((address, city)) = split_address_city(line, config) {
                out.address = Some(address);
                out.city = city;
                continue;
            }
            if out.name_line.is_none() && !is_notes_marker(line) && !leads_with_digit(line) {
                out.name_line = Some(line.to_string());
                continue;
            }
        }

        let note = strip_notes_marker(line);
        if !note.is_empty() {
            notes.push(note.to_string());
        }
    }

    out.notes = notes.join(" ").trim().to_string();
    out
}

/// Try to read a line as a location: an address, optionally followed
/// by a recognized city as the last comma segment.
///
/// "1400 E Boulder St, Colorado Springs" -> ("1400 E Boulder St", Some(city))
/// "111 Main St"                         -> ("111 Main St", None)
/// "Met discharge planner"               -> None
pub fn split_address_city(line: &str, config: &ParseConfig) -> Option<(String, Option<String>)> {
    let line = line.trim();

    let (location, city) = match line.rsplit_once(',') {
        Some((before, last)) => match config.recognized_city(last) {
            Some(city) => (before.trim(), Some(city.to_string())),
            None => (line, None),
        },
        None => (line, None),
    };

    let address = extract_address(location)?;
    Some((clean_address(&address), city))
}

/// Find an address-shaped span in text: a digit run, then words, then
/// a street-suffix token.
fn extract_address(text: &str) -> Option<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    for (i, &tok) in tokens.iter().enumerate() {
        if !tok.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        for (j, &cand) in tokens.iter().enumerate().skip(i + 1) {
            if is_street_suffix(cand) {
                return Some(tokens[i..=j].join(" "));
            }
            if !is_street_word(cand) {
                break;
            }
        }
    }

    None
}

/// Words allowed between the house number and the street suffix.
fn is_street_word(tok: &str) -> bool {
    !tok.is_empty() && tok.chars().all(|c| c.is_alphabetic() || c == '.' || c == '\'')
}

/// Normalize an address span: collapse whitespace, shorten street
/// suffixes (Street -> St), trim stray trailing punctuation.
fn clean_address(address: &str) -> String {
    let cleaned: Vec<String> = address
        .split_whitespace()
        .map(|tok| match short_street_suffix(tok) {
            Some(short) => short.to_string(),
            None => tok.trim_end_matches(',').to_string(),
        })
        .collect();
    cleaned.join(" ")
}

/// Lines leading with a digit read as address fragments (possibly
/// truncated ones), never as business names.
fn leads_with_digit(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_digit())
}

/// Manifest boilerplate that is neither a name nor a note.
fn is_boilerplate(line: &str) -> bool {
    let first = match line.split_whitespace().next() {
        Some(w) => w.trim_end_matches(':'),
        None => return false,
    };
    ["route", "stop", "time", "date", "driver", "vehicle"]
        .iter()
        .any(|kw| first.eq_ignore_ascii_case(kw))
}

fn is_notes_marker(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.starts_with("notes:") || lower.starts_with("note:") || lower == "notes" || lower == "note"
}

/// Drop a leading "Notes:" marker, keeping any text after it.
fn strip_notes_marker(line: &str) -> &str {
    let lower = line.to_lowercase();
    for marker in ["notes:", "note:"] {
        if lower.starts_with(marker) {
            return line[marker.len()..].trim();
        }
    }
    if lower == "notes" || lower == "note" {
        return "";
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ParseConfig {
        ParseConfig::default()
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_address_with_city() {
        let (addr, city) =
            split_address_city("1400 E Boulder St, Colorado Springs", &config()).unwrap();
        assert_eq!(addr, "1400 E Boulder St");
        assert_eq!(city.as_deref(), Some("Colorado Springs"));
    }

    #[test]
    fn test_address_without_city() {
        let (addr, city) = split_address_city("4900 S Monaco St", &config()).unwrap();
        assert_eq!(addr, "4900 S Monaco St");
        assert_eq!(city, None);
    }

    #[test]
    fn test_unrecognized_trailing_segment_stays_in_address() {
        // "Suite 200" is not a city, so the comma segment is kept
        let (addr, city) = split_address_city("111 Main St, Suite 200", &config()).unwrap();
        // extract_address only spans through the suffix token
        assert_eq!(addr, "111 Main St");
        assert_eq!(city, None);
    }

    #[test]
    fn test_non_address_line_rejected() {
        assert!(split_address_city("Met discharge planner", &config()).is_none());
        assert!(split_address_city("UCHealth Memorial Hospital Central", &config()).is_none());
    }

    #[test]
    fn test_city_match_is_case_insensitive() {
        let (_, city) = split_address_city("111 Main St, colorado springs", &config()).unwrap();
        assert_eq!(city.as_deref(), Some("Colorado Springs"));
    }

    #[test]
    fn test_clean_address_shortens_suffixes() {
        let (addr, _) = split_address_city("2222 North Nevada Avenue", &config()).unwrap();
        assert_eq!(addr, "2222 North Nevada Ave");
    }

    #[test]
    fn test_extract_fields_full_block() {
        let block = lines(&[
            "UCHealth Memorial Hospital Central",
            "1400 E Boulder St, Colorado Springs",
            "Met discharge planner",
        ]);
        let f = extract_fields(&block, &config());
        assert_eq!(f.name_line.as_deref(), Some("UCHealth Memorial Hospital Central"));
        assert_eq!(f.address.as_deref(), Some("1400 E Boulder St"));
        assert_eq!(f.city.as_deref(), Some("Colorado Springs"));
        assert_eq!(f.notes, "Met discharge planner");
    }

    #[test]
    fn test_extract_fields_address_only() {
        let block = lines(&["2550 Tenderfoot Hill St, Colorado Springs", "Great visit"]);
        let f = extract_fields(&block, &config());
        assert_eq!(f.name_line, None);
        assert_eq!(f.address.as_deref(), Some("2550 Tenderfoot Hill St"));
        assert_eq!(f.notes, "Great visit");
    }

    #[test]
    fn test_boilerplate_lines_skipped() {
        let block = lines(&[
            "111 Main St",
            "Route 5 continues",
            "Driver: J. Smith",
            "left a card",
        ]);
        let f = extract_fields(&block, &config());
        assert_eq!(f.address.as_deref(), Some("111 Main St"));
        assert_eq!(f.notes, "left a card");
    }

    #[test]
    fn test_notes_marker_stripped_and_joined() {
        let block = lines(&["111 Main St", "Notes: spoke with intake", "follow up next week"]);
        let f = extract_fields(&block, &config());
        assert_eq!(f.notes, "spoke with intake follow up next week");
    }

    #[test]
    fn test_digit_leading_line_is_not_a_name() {
        // A truncated address fragment lacks a street suffix, so it is
        // not an address either; it lands in the notes.
        let block = lines(&["9801 Unremarkable", "follow up"]);
        let f = extract_fields(&block, &config());
        assert_eq!(f.name_line, None);
        assert_eq!(f.address, None);
        assert_eq!(f.notes, "9801 Unremarkable follow up");
    }

    #[test]
    fn test_empty_block_yields_no_fields() {
        let f = extract_fields(&[], &config());
        assert_eq!(f, BlockFields::default());
    }

    #[test]
    fn test_notes_after_name_without_address() {
        let block = lines(&["Penrose front desk", "left paperwork"]);
        let f = extract_fields(&block, &config());
        assert_eq!(f.address, None);
        assert_eq!(f.name_line.as_deref(), Some("Penrose front desk"));
        assert_eq!(f.notes, "left paperwork");
    }
}
