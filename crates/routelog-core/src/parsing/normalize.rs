/// Normalize text to a comparison key for facility matching.
///
/// Steps:
/// 1. Lowercase
/// 2. Replace punctuation with spaces
/// 3. Collapse whitespace runs to single spaces and trim
///
/// "1400   E. Boulder St" and "1400 e boulder st" normalize to the
/// same key.
pub fn normalize_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_space = true; // start true to skip leading spaces

    for c in raw.chars() {
        if c.is_alphanumeric() {
            for lc in c.to_lowercase() {
                out.push(lc);
            }
            prev_space = false;
        } else if !prev_space {
            out.push(' ');
            prev_space = true;
        }
    }

    if out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Title-case a free-text line for use as a business name.
///
/// All-lowercase words get their first letter uppercased; words that
/// already carry uppercase letters are kept as written, so acronyms
/// and mixed-case names like "UCHealth" survive.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for (i, word) in raw.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if word.chars().any(|c| c.is_uppercase()) {
            out.push_str(word);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                for uc in first.to_uppercase() {
                    out.push(uc);
                }
                out.extend(chars);
            }
        }
    }
    out
}

/// Check if a word is a recognized street-suffix token.
pub fn is_street_suffix(s: &str) -> bool {
    matches!(
        s.trim_end_matches(['.', ',']).to_lowercase().as_str(),
        "st" | "street"
            | "ave"
            | "avenue"
            | "blvd"
            | "boulevard"
            | "rd"
            | "road"
            | "dr"
            | "drive"
            | "way"
            | "ln"
            | "lane"
            | "ct"
            | "court"
            | "pl"
            | "place"
    )
}

/// Short form for a street-suffix token, or None if not a suffix.
pub fn short_street_suffix(s: &str) -> Option<&'static str> {
    let key = s.trim_end_matches(['.', ',']).to_lowercase();
    let short = match key.as_str() {
        "st" | "street" => "St",
        "ave" | "avenue" => "Ave",
        "blvd" | "boulevard" => "Blvd",
        "rd" | "road" => "Rd",
        "dr" | "drive" => "Dr",
        "way" => "Way",
        "ln" | "lane" => "Ln",
        "ct" | "court" => "Ct",
        "pl" | "place" => "Pl",
        _ => return None,
    };
    Some(short)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_collapses() {
        assert_eq!(normalize_key("1400   E Boulder St"), "1400 e boulder st");
        assert_eq!(normalize_key("1400 E Boulder St"), "1400 e boulder st");
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize_key("St. Francis, Medical-Center"), "st francis medical center");
        assert_eq!(
            normalize_key("Children's Hospital Colorado"),
            "children s hospital colorado"
        );
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_key("  Penrose  "), "penrose");
        assert_eq!(normalize_key(""), "");
        assert_eq!(normalize_key("  ,. "), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("pikes peak hospice"), "Pikes Peak Hospice");
        assert_eq!(title_case("  cedar  springs  hospital "), "Cedar Springs Hospital");
    }

    #[test]
    fn test_title_case_keeps_mixed_case_words() {
        assert_eq!(
            title_case("UCHealth memorial hospital"),
            "UCHealth Memorial Hospital"
        );
        assert_eq!(title_case("VA medical center"), "VA Medical Center");
    }

    #[test]
    fn test_street_suffixes() {
        assert!(is_street_suffix("St"));
        assert!(is_street_suffix("street"));
        assert!(is_street_suffix("Blvd,"));
        assert!(!is_street_suffix("Hospital"));
        assert_eq!(short_street_suffix("Boulevard"), Some("Blvd"));
        assert_eq!(short_street_suffix("Hospice"), None);
    }
}
