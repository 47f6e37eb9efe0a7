// crates/dashboard-summary-store/src/error.rs
// ============================================================================
// Module: Object Read Errors
// Description: Backend-level read failures and their store classification.
// Purpose: Keep backend detail inside the store crate.
// Dependencies: dashboard-summary-core, thiserror
// ============================================================================

//! ## Overview
//! Backends report [`ObjectReadError`]. Only [`ObjectReadError::Missing`]
//! means the object does not exist; everything else collapses into
//! [`StoreError::Unreadable`] when crossing into the core interfaces.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dashboard_summary_core::StoreError;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Object read failures reported by storage backends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectReadError {
    /// The object does not exist.
    #[error("object not found: {0}")]
    Missing(String),
    /// Invalid location or configuration.
    #[error("object store invalid: {0}")]
    Invalid(String),
    /// Local or transport I/O failure.
    #[error("object store io error: {0}")]
    Io(String),
    /// Backend returned an error.
    #[error("object store backend error: {0}")]
    Backend(String),
    /// Object exceeds size limits.
    #[error("object too large: {path} ({actual_bytes} > {max_bytes})")]
    TooLarge {
        /// Object path.
        path: String,
        /// Maximum allowed bytes.
        max_bytes: usize,
        /// Actual size in bytes.
        actual_bytes: usize,
    },
}

impl From<ObjectReadError> for StoreError {
    fn from(err: ObjectReadError) -> Self {
        match err {
            ObjectReadError::Missing(path) => Self::Missing(path),
            other => Self::Unreadable(other.to_string()),
        }
    }
}
