// crates/dashboard-summary-core/src/interfaces/mod.rs
// ============================================================================
// Module: Dashboard Summary Interfaces
// Description: Backend-agnostic read interfaces for configuration and summaries.
// Purpose: Define the collaborator surfaces the resolvers depend on.
// Dependencies: crate::core, async-trait, thiserror
// ============================================================================

//! ## Overview
//! The resolution layer reads two external collaborators: the configuration
//! store and the summary store. Both are read-only from this layer's point of
//! view and may block on remote I/O, so reads are async and are abandoned when
//! the calling future is dropped. Implementations must not retry; retry policy
//! belongs to the storage client.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use thiserror::Error;

use crate::core::config::Configuration;
use crate::core::summary::DashboardSummary;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Store read errors.
///
/// # Invariants
/// - `Missing` is reserved for locations that do not exist; every other
///   failure is `Unreadable` or `Malformed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The location does not exist.
    #[error("store object missing: {0}")]
    Missing(String),
    /// The location exists but could not be read.
    #[error("store read failed: {0}")]
    Unreadable(String),
    /// The location was read but did not decode.
    #[error("store object malformed: {0}")]
    Malformed(String),
}

// ============================================================================
// SECTION: Config Store
// ============================================================================

/// Source of dashboard configuration documents.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Reads the configuration stored at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the location is missing or unreadable.
    async fn read_config(&self, location: &str) -> Result<Configuration, StoreError>;
}

// ============================================================================
// SECTION: Summary Store
// ============================================================================

/// Source of persisted dashboard summaries.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    /// Reads the summary of `dashboard_name` under `location`.
    ///
    /// `dashboard_name` is the configured name; implementations derive the
    /// object key with [`crate::summary_object_path`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Missing`] when the dashboard has never been
    /// summarized, and other variants when the store cannot be read.
    async fn read_summary(
        &self,
        location: &str,
        dashboard_name: &str,
    ) -> Result<DashboardSummary, StoreError>;
}
