// crates/dashboard-summary-core/src/core/status.rs
// ============================================================================
// Module: Overall Status Projection
// Description: Internal status codes and their external string tokens.
// Purpose: Project persisted status codes into stable uppercase labels.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Persisted summaries carry the overall status as an integer code. The
//! projection table is exhaustive over [`OverallStatus`]; a code outside the
//! table means the producer and this layer disagree about the enumeration and
//! is reported as [`StatusError::UnknownCode`], never as a missing summary.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Overall Status
// ============================================================================

/// Health classification of a tab's most recent results.
///
/// # Invariants
/// - Codes and tokens are stable; they are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallStatus {
    /// No status has been computed.
    NotSet,
    /// Status could not be determined.
    Unknown,
    /// All tests passing.
    Pass,
    /// Tests failing.
    Fail,
    /// Tests flaking.
    Flaky,
    /// Results are stale.
    Stale,
    /// The tab itself is broken.
    Broken,
    /// Results pending.
    Pending,
    /// Failures within the acceptable threshold.
    Acceptable,
}

impl OverallStatus {
    /// Every status value, in code order.
    pub const ALL: [Self; 9] = [
        Self::NotSet,
        Self::Unknown,
        Self::Pass,
        Self::Fail,
        Self::Flaky,
        Self::Stale,
        Self::Broken,
        Self::Pending,
        Self::Acceptable,
    ];

    /// Returns the persisted integer code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::NotSet => 0,
            Self::Unknown => 1,
            Self::Pass => 2,
            Self::Fail => 3,
            Self::Flaky => 4,
            Self::Stale => 5,
            Self::Broken => 6,
            Self::Pending => 7,
            Self::Acceptable => 8,
        }
    }

    /// Returns the status for a persisted code.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::NotSet),
            1 => Some(Self::Unknown),
            2 => Some(Self::Pass),
            3 => Some(Self::Fail),
            4 => Some(Self::Flaky),
            5 => Some(Self::Stale),
            6 => Some(Self::Broken),
            7 => Some(Self::Pending),
            8 => Some(Self::Acceptable),
            _ => None,
        }
    }

    /// Returns the external token for the status.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::NotSet => "NOT_SET",
            Self::Unknown => "UNKNOWN",
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Flaky => "FLAKY",
            Self::Stale => "STALE",
            Self::Broken => "BROKEN",
            Self::Pending => "PENDING",
            Self::Acceptable => "ACCEPTABLE",
        }
    }
}

/// Status projection errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatusError {
    /// The persisted code has no entry in the projection table.
    #[error("unrecognized overall status code {0}")]
    UnknownCode(i32),
}

/// Projects a persisted status code into its external token.
///
/// # Errors
///
/// Returns [`StatusError::UnknownCode`] when the code is not a defined status.
pub const fn project_status(code: i32) -> Result<&'static str, StatusError> {
    match OverallStatus::from_code(code) {
        Some(status) => Ok(status.token()),
        None => Err(StatusError::UnknownCode(code)),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions."
    )]

    use super::OverallStatus;
    use super::StatusError;
    use super::project_status;

    #[test]
    fn every_status_has_a_token() {
        for status in OverallStatus::ALL {
            let token = project_status(status.code()).expect("defined status");
            assert!(!token.is_empty());
            assert_eq!(token, token.to_uppercase());
        }
    }

    #[test]
    fn codes_round_trip_through_the_table() {
        for status in OverallStatus::ALL {
            assert_eq!(OverallStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn flaky_and_acceptable_have_stable_tokens() {
        assert_eq!(project_status(4), Ok("FLAKY"));
        assert_eq!(project_status(8), Ok("ACCEPTABLE"));
    }

    #[test]
    fn unknown_code_is_an_error() {
        assert_eq!(project_status(42), Err(StatusError::UnknownCode(42)));
        assert_eq!(project_status(-1), Err(StatusError::UnknownCode(-1)));
    }
}
