//! Business-name inference: a first-match-wins chain of total rules.
//!
//! Priority order:
//! 1. Known-facility containment match on the block's text
//! 2. Explicit standalone name line, title-cased
//! 3. "<Street> Healthcare Facility" derived from the address
//! 4. "Visit at <address>" placeholder
//!
//! The chain is total, so the result is never empty. Healthcare-route
//! addresses recur across routes; the curated lookup resolves the
//! common case deterministically and the fallbacks trade precision
//! for completeness on unrecognized addresses.

use crate::facilities::FacilityTable;
use crate::parsing::normalize::{is_street_suffix, title_case};

pub fn infer_business_name(
    address: &str,
    name_line: Option<&str>,
    notes: &str,
    facilities: &FacilityTable,
) -> String {
    // 1. Known facility, matched against everything the block said
    // about the location (the original tool searched address + notes).
    let haystack = format!("{} {} {}", address, name_line.unwrap_or(""), notes);
    if let Some(canonical) = facilities.match_text(&haystack) {
        return canonical.to_string();
    }

    // 2. Explicit name line
    if let Some(line) = name_line {
        let name = title_case(line);
        if !name.trim().is_empty() {
            return name;
        }
    }

    // 3. Street-name derivation
    if let Some(street) = street_name(address) {
        return format!("{} Healthcare Facility", street);
    }

    // 4. Placeholder; total even for a blank address
    let address = address.trim();
    if address.is_empty() {
        "Healthcare Facility".to_string()
    } else {
        format!("Visit at {}", address)
    }
}

/// The named part of a street address: first alphabetic token after
/// the house number that is neither a directional nor a suffix.
/// "4900 S Monaco St" -> "Monaco".
fn street_name(address: &str) -> Option<String> {
    address
        .split_whitespace()
        .filter(|tok| !tok.chars().all(|c| c.is_ascii_digit()))
        .filter(|tok| !is_directional(tok))
        .find(|tok| !is_street_suffix(tok) && tok.len() > 2)
        .map(title_case)
}

fn is_directional(tok: &str) -> bool {
    matches!(
        tok.trim_end_matches('.').to_lowercase().as_str(),
        "n" | "s" | "e" | "w" | "north" | "south" | "east" | "west"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facilities::builtin::builtin_table;

    fn table() -> FacilityTable {
        builtin_table().unwrap()
    }

    #[test]
    fn test_facility_match_from_address() {
        let name = infer_business_name("2550 Tenderfoot Hill St", None, "Great visit", &table());
        assert_eq!(name, "Pikes Peak Hospice");
    }

    #[test]
    fn test_facility_match_from_notes() {
        let name = infer_business_name(
            "9999 Nowhere Ln",
            None,
            "dropped brochures at Peak Vista front desk",
            &table(),
        );
        assert_eq!(name, "Peak Vista Community Health Centers");
    }

    #[test]
    fn test_explicit_name_line_used_when_no_facility_matches() {
        let name = infer_business_name(
            "9999 Nowhere Ln",
            Some("sunrise senior living"),
            "",
            &table(),
        );
        assert_eq!(name, "Sunrise Senior Living");
    }

    #[test]
    fn test_facility_match_beats_name_line() {
        let name = infer_business_name(
            "1400 E Boulder St",
            Some("some scribbled text"),
            "",
            &table(),
        );
        assert_eq!(name, "UCHealth Memorial Hospital Central");
    }

    #[test]
    fn test_street_derivation_fallback() {
        let name = infer_business_name("4900 S Monaco St", None, "ETA 11:19 AM", &table());
        assert_eq!(name, "Monaco Healthcare Facility");
    }

    #[test]
    fn test_street_derivation_skips_directionals() {
        let name = infer_business_name("3105 W Arkansas Ave", None, "", &table());
        assert_eq!(name, "Arkansas Healthcare Facility");
    }

    #[test]
    fn test_placeholder_when_street_name_unusable() {
        // every token is a number, directional or suffix
        let name = infer_business_name("12 N St", None, "", &table());
        assert_eq!(name, "Visit at 12 N St");
    }

    #[test]
    fn test_never_empty() {
        let name = infer_business_name("", None, "", &table());
        assert!(!name.trim().is_empty());
        assert_eq!(name, "Healthcare Facility");
    }
}
