// crates/dashboard-summary-core/src/runtime/store.rs
// ============================================================================
// Module: In-Memory Stores
// Description: Map-backed configuration and summary stores.
// Purpose: Provide deterministic stores for tests and embedded use.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! In-memory stores are populated up front and are read-only afterwards, so
//! they need no locking. Configurations are keyed by config location and
//! summaries by the object path from [`crate::summary_object_path`], matching
//! how the object-backed stores lay out storage.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::core::config::Configuration;
use crate::core::naming::summary_object_path;
use crate::core::summary::DashboardSummary;
use crate::interfaces::ConfigStore;
use crate::interfaces::StoreError;
use crate::interfaces::SummaryStore;

// ============================================================================
// SECTION: Config Store
// ============================================================================

/// In-memory configuration store keyed by location.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigStore {
    /// Configurations by location.
    configs: BTreeMap<String, Configuration>,
}

impl InMemoryConfigStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a configuration at `location`.
    #[must_use]
    pub fn with_config(mut self, location: impl Into<String>, config: Configuration) -> Self {
        self.configs.insert(location.into(), config);
        self
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn read_config(&self, location: &str) -> Result<Configuration, StoreError> {
        self.configs.get(location).cloned().ok_or_else(|| StoreError::Missing(location.to_string()))
    }
}

// ============================================================================
// SECTION: Summary Store
// ============================================================================

/// In-memory summary store keyed by summary object path.
#[derive(Debug, Clone, Default)]
pub struct InMemorySummaryStore {
    /// Summaries by object path.
    summaries: BTreeMap<String, DashboardSummary>,
}

impl InMemorySummaryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a summary at an explicit object path.
    #[must_use]
    pub fn with_object(mut self, path: impl Into<String>, summary: DashboardSummary) -> Self {
        self.summaries.insert(path.into(), summary);
        self
    }

    /// Adds a summary for a dashboard under a summary location.
    #[must_use]
    pub fn with_summary(
        self,
        location: &str,
        dashboard_name: &str,
        summary: DashboardSummary,
    ) -> Self {
        self.with_object(summary_object_path(location, dashboard_name), summary)
    }
}

#[async_trait]
impl SummaryStore for InMemorySummaryStore {
    async fn read_summary(
        &self,
        location: &str,
        dashboard_name: &str,
    ) -> Result<DashboardSummary, StoreError> {
        let path = summary_object_path(location, dashboard_name);
        self.summaries.get(&path).cloned().ok_or(StoreError::Missing(path))
    }
}
