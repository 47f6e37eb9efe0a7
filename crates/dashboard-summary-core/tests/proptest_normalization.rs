//! Normalization property-based tests.
//!
//! ## Purpose
//! These tests exercise timestamp normalization and name canonicalization
//! over randomized inputs.
//!
//! ## What is covered
//! - Normalized nanos always stay within `[0, 1e9)`.
//! - Seconds plus nanos round-trip to within a nanosecond for epoch values
//!   built from whole seconds and nanos.
//! - Canonical names are idempotent and name matching is symmetric.
// crates/dashboard-summary-core/tests/proptest_normalization.rs
// ============================================================================
// Module: Normalization Property-Based Tests
// Description: Randomized checks for timestamp and name normalization.
// Purpose: Ensure normalization stays in range and never panics.
// ============================================================================

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::cast_precision_loss,
    reason = "Test-only assertions and helpers are permitted."
)]

use dashboard_summary_core::EpochSeconds;
use dashboard_summary_core::MAX_EPOCH_SECONDS;
use dashboard_summary_core::canonical_name;
use dashboard_summary_core::names_match;
use dashboard_summary_core::normalize;
use proptest::prelude::*;

proptest! {
    #[test]
    fn nanos_stay_in_range(value in 0.0f64..MAX_EPOCH_SECONDS) {
        let timestamp = normalize(EpochSeconds::new(value).unwrap());
        prop_assert!((0..1_000_000_000).contains(&timestamp.nanos));
        prop_assert!(timestamp.seconds >= 0);
    }

    #[test]
    fn seconds_and_nanos_round_trip(seconds in 0i64..1_000_000, nanos in 0i64..1_000_000_000) {
        let value = seconds as f64 + nanos as f64 / 1e9;
        let timestamp = normalize(EpochSeconds::new(value).unwrap());
        let expected = seconds * 1_000_000_000 + nanos;
        let actual = timestamp.seconds * 1_000_000_000 + i64::from(timestamp.nanos);
        prop_assert!((expected - actual).abs() <= 1, "expected {expected}, got {actual}");
    }

    #[test]
    fn canonical_name_is_idempotent(name in "[A-Za-z0-9 _.:/-]{0,48}") {
        let once = canonical_name(&name);
        prop_assert_eq!(canonical_name(&once), once);
    }

    #[test]
    fn name_matching_is_symmetric(left in "[A-Za-z0-9 _-]{0,16}", right in "[A-Za-z0-9 _-]{0,16}") {
        prop_assert_eq!(names_match(&left, &right), names_match(&right, &left));
    }

    #[test]
    fn names_match_their_uppercase_form(name in "[a-z0-9]{1,16}") {
        prop_assert!(names_match(&name, &name.to_uppercase()));
    }
}
