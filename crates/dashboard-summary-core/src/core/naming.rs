// crates/dashboard-summary-core/src/core/naming.rs
// ============================================================================
// Module: Name Canonicalization
// Description: Canonical dashboard/tab names and summary key derivation.
// Purpose: Keep case-insensitive matching and storage keys consistent.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Dashboard and tab names are matched through [`canonical_name`]: lowercase,
//! alphanumerics only. The same function derives the summary object key, so
//! the config resolver and the summary resolver can never disagree about which
//! dashboard a name refers to.
//!
//! Summary keys are always derived from the *configured* dashboard name. Caller
//! input is only ever used to find the configured entry.

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Object name prefix for per-dashboard summary records.
pub const SUMMARY_OBJECT_PREFIX: &str = "summary-";

// ============================================================================
// SECTION: Canonicalization
// ============================================================================

/// Returns the canonical form of a dashboard or tab name.
#[must_use]
pub fn canonical_name(name: &str) -> String {
    name.chars().filter(|ch| ch.is_alphanumeric()).flat_map(char::to_lowercase).collect()
}

/// Returns true when two names refer to the same entry.
///
/// Names with an empty canonical form never match anything.
#[must_use]
pub fn names_match(left: &str, right: &str) -> bool {
    let left = canonical_name(left);
    !left.is_empty() && left == canonical_name(right)
}

/// Derives the summary object location for a configured dashboard.
#[must_use]
pub fn summary_object_path(summary_location: &str, configured_name: &str) -> String {
    format!(
        "{}/{}{}",
        summary_location.trim_end_matches('/'),
        SUMMARY_OBJECT_PREFIX,
        canonical_name(configured_name)
    )
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::canonical_name;
    use super::names_match;
    use super::summary_object_path;

    #[test]
    fn canonical_name_lowercases_and_drops_punctuation() {
        assert_eq!(canonical_name("Marco"), "marco");
        assert_eq!(canonical_name("Sig-Release 1.30"), "sigrelease130");
    }

    #[test]
    fn names_match_ignores_case() {
        assert!(names_match("Marco", "marco"));
        assert!(names_match("ACME", "acme"));
        assert!(!names_match("Marco", "Polo"));
    }

    #[test]
    fn empty_names_never_match() {
        assert!(!names_match("", ""));
        assert!(!names_match("--", ""));
    }

    #[test]
    fn summary_path_uses_canonical_name() {
        assert_eq!(
            summary_object_path("gs://default/summary", "Marco"),
            "gs://default/summary/summary-marco"
        );
        assert_eq!(
            summary_object_path("gs://default/summary/", "Marco"),
            "gs://default/summary/summary-marco"
        );
    }
}
