//! Lexical and structural checks on SWIFT/BIC codes.
//!
//! Layout: 4 letters (institution), 2 letters (country), 2 alphanumerics
//! (location), optionally 3 alphanumerics (branch). Uppercase only.

use regex::Regex;
use std::sync::LazyLock;

/// Branch suffix reserved for the headquarters record of an institution/location.
pub const HEADQUARTERS_SUFFIX: &str = "XXX";

/// Length of the institution + country + location part shared by a
/// headquarters and its branches.
pub const PREFIX_LEN: usize = 8;

static SWIFT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{6}[A-Z0-9]{2}([A-Z0-9]{3})?$").unwrap());

/// Returns true if `code` has the 8- or 11-character SWIFT shape.
pub fn is_well_formed(code: &str) -> bool {
    SWIFT_RE.is_match(code)
}

/// Returns true if characters 5-6 of `code` equal `country_iso2`.
///
/// Codes too short to carry a country part are never consistent.
pub fn is_consistent_with_country(code: &str, country_iso2: &str) -> bool {
    code.get(4..6).is_some_and(|c| c == country_iso2)
}

/// Returns true if `code` carries the headquarters branch suffix.
pub fn is_headquarters_code(code: &str) -> bool {
    code.ends_with(HEADQUARTERS_SUFFIX)
}

/// The institution + country + location prefix of `code`, if it is long enough.
pub fn branch_prefix(code: &str) -> Option<&str> {
    code.get(..PREFIX_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_eight_and_eleven_character_codes() {
        assert!(is_well_formed("TESTPL33"));
        assert!(is_well_formed("TESTPL33XXX"));
        assert!(is_well_formed("AAAABBCC123"));
        assert!(is_well_formed("BPKOPLPW"));
    }

    #[test]
    fn rejects_malformed_codes() {
        for code in [
            "",
            "TEST",
            "TESTPL3",
            "TESTPL33X",
            "TESTPL33XX",
            "TESTPL33XXXX",
            "testpl33xxx",
            "TES1PL33XXX",
            "TEST1L33XXX",
            "TESTPL33XX-",
            " TESTPL33XXX",
        ] {
            assert!(!is_well_formed(code), "{code:?} should be rejected");
        }
    }

    #[test]
    fn country_part_is_characters_five_and_six() {
        assert!(is_consistent_with_country("TESTPL33XXX", "PL"));
        assert!(!is_consistent_with_country("TESTPL33XXX", "DE"));
        assert!(!is_consistent_with_country("TEST", "PL"));
        assert!(!is_consistent_with_country("", "PL"));
    }

    #[test]
    fn headquarters_suffix_and_prefix() {
        assert!(is_headquarters_code("TESTPL33XXX"));
        assert!(!is_headquarters_code("TESTPL33ABC"));
        assert_eq!(branch_prefix("TESTPL33ABC"), Some("TESTPL33"));
        assert_eq!(branch_prefix("TESTPL3"), None);
    }
}
