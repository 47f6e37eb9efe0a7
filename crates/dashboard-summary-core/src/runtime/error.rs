// crates/dashboard-summary-core/src/runtime/error.rs
// ============================================================================
// Module: Summary Errors
// Description: Error taxonomy for summary resolution.
// Purpose: Keep not-found, unavailable, and invariant failures distinct.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Every failure of the resolution layer is one of three kinds. All not-found
//! variants collapse to the same external signal, but [`NotFoundKind`] keeps
//! them distinguishable for audit logs. Inner strings are for diagnostics
//! only; transports must not forward them to clients.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Not Found Kinds
// ============================================================================

/// Which lookup failed to find an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundKind {
    /// No dashboard with that name in configuration.
    DashboardNotConfigured,
    /// Dashboard exists but has no tab with that name.
    TabNotConfigured,
    /// Dashboard is configured but has never been summarized.
    DashboardNotSummarized,
    /// Tab is configured but has no summary record.
    TabNotSummarized,
}

impl NotFoundKind {
    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DashboardNotConfigured => "dashboard_not_configured",
            Self::TabNotConfigured => "tab_not_configured",
            Self::DashboardNotSummarized => "dashboard_not_summarized",
            Self::TabNotSummarized => "tab_not_summarized",
        }
    }
}

impl fmt::Display for NotFoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Summary Error
// ============================================================================

/// Summary resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    /// Requested entry does not exist.
    #[error("not found ({kind}): {detail}")]
    NotFound {
        /// Which lookup failed.
        kind: NotFoundKind,
        /// Diagnostic detail.
        detail: String,
    },
    /// A backing store could not be read or held malformed data.
    #[error("unavailable: {0}")]
    Unavailable(String),
    /// Persisted data violated an invariant this layer relies on.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl SummaryError {
    /// Builds a not-found error.
    #[must_use]
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            detail: detail.into(),
        }
    }

    /// Returns the not-found kind when this is a not-found error.
    #[must_use]
    pub const fn not_found_kind(&self) -> Option<NotFoundKind> {
        match self {
            Self::NotFound {
                kind, ..
            } => Some(*kind),
            Self::Unavailable(_) | Self::InvariantViolation(_) => None,
        }
    }

    /// Returns a stable label for audit and metrics.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::NotFound {
                kind, ..
            } => kind.as_str(),
            Self::Unavailable(_) => "unavailable",
            Self::InvariantViolation(_) => "invariant_violation",
        }
    }
}
