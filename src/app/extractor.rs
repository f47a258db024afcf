use std::sync::OnceLock;

use regex_lite::Regex;

/// Codes are maximal runs of uppercase letters and digits, at least this long.
pub const MIN_CODE_LEN: usize = 10;

fn code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"\b[A-Z0-9]{{{},}}\b", MIN_CODE_LEN))
            .expect("code pattern is a valid regex")
    })
}

/// Extract every code from a text document, in order of appearance.
///
/// A code is a maximal run of `A-Z0-9` of length >= 10, delimited by word
/// boundaries: a run embedded in a longer alphanumeric word (e.g. preceded
/// by a lowercase letter or an underscore) does not match. Duplicates are
/// kept as separate entries. This never fails; text with no codes yields
/// an empty list.
pub fn extract_codes(text: &str) -> Vec<String> {
    code_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(extract_codes("").is_empty());
    }

    #[test]
    fn test_too_short_run_does_not_match() {
        // 9 characters: one below the minimum
        assert!(extract_codes("ABC123DEF").is_empty());
        assert!(extract_codes("ABC").is_empty());
    }

    #[test]
    fn test_exact_minimum_matches() {
        assert_eq!(extract_codes("ABCDEFGHIJ"), vec!["ABCDEFGHIJ"]);
    }

    #[test]
    fn test_long_run_matches_once() {
        // 15 characters stay a single token, not split into sub-tokens
        assert_eq!(extract_codes("ABCDE12345FGHIJ"), vec!["ABCDE12345FGHIJ"]);
    }

    #[test]
    fn test_document_order() {
        let text = "AB12CD34EF plain text GH56IJ78KL90";
        assert_eq!(extract_codes(text), vec!["AB12CD34EF", "GH56IJ78KL90"]);
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let text = "ABCDEFGHIJ then ABCDEFGHIJ again";
        assert_eq!(extract_codes(text), vec!["ABCDEFGHIJ", "ABCDEFGHIJ"]);
    }

    #[test]
    fn test_lowercase_neighbor_blocks_match() {
        // The run is embedded in a longer word, so the boundary rule rejects it
        assert!(extract_codes("xABCDEFGHIJ").is_empty());
        assert!(extract_codes("ABCDEFGHIJx").is_empty());
    }

    #[test]
    fn test_underscore_neighbor_blocks_match() {
        assert!(extract_codes("_ABCDEFGHIJ").is_empty());
        assert!(extract_codes("ABCDEFGHIJ_").is_empty());
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        let text = "order:ABCDEFGHIJ,then (KLMNOPQRST).";
        assert_eq!(extract_codes(text), vec!["ABCDEFGHIJ", "KLMNOPQRST"]);
    }

    #[test]
    fn test_no_case_folding() {
        // Lowercase runs never match, even at the right length
        assert!(extract_codes("abcdefghij").is_empty());
    }

    #[test]
    fn test_newlines_delimit_codes() {
        let text = "AAAAAAAAAA\nBBBBBBBBBB\n";
        assert_eq!(extract_codes(text), vec!["AAAAAAAAAA", "BBBBBBBBBB"]);
    }
}
