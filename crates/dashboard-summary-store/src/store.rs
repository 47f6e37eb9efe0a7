// crates/dashboard-summary-store/src/store.rs
// ============================================================================
// Module: Object-Backed Stores
// Description: JSON configuration and summary stores over the object router.
// Purpose: Implement the core store interfaces against real storage.
// Dependencies: dashboard-summary-core, serde_json, crate::router
// ============================================================================

//! ## Overview
//! Configuration documents live at the config location itself. Summary
//! documents live at the key derived by
//! [`dashboard_summary_core::summary_object_path`]. Both are JSON. Decode
//! failures surface as [`StoreError::Malformed`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use dashboard_summary_core::ConfigStore;
use dashboard_summary_core::Configuration;
use dashboard_summary_core::DashboardSummary;
use dashboard_summary_core::StoreError;
use dashboard_summary_core::SummaryStore;
use dashboard_summary_core::summary_object_path;
use serde::de::DeserializeOwned;

use crate::router::ObjectRouter;

// ============================================================================
// SECTION: Store
// ============================================================================

/// Configuration and summary store backed by an [`ObjectRouter`].
#[derive(Clone)]
pub struct ObjectBackedStore {
    /// Scheme router for raw reads.
    router: Arc<ObjectRouter>,
}

impl ObjectBackedStore {
    /// Creates a store over a router.
    #[must_use]
    pub const fn new(router: Arc<ObjectRouter>) -> Self {
        Self {
            router,
        }
    }

    /// Reads and decodes the JSON document at `location`.
    async fn read_json<T: DeserializeOwned>(&self, location: &str) -> Result<T, StoreError> {
        let bytes = self.router.read(location).await?;
        serde_json::from_slice(&bytes)
            .map_err(|err| StoreError::Malformed(format!("{location}: {err}")))
    }
}

#[async_trait]
impl ConfigStore for ObjectBackedStore {
    async fn read_config(&self, location: &str) -> Result<Configuration, StoreError> {
        self.read_json(location).await
    }
}

#[async_trait]
impl SummaryStore for ObjectBackedStore {
    async fn read_summary(
        &self,
        location: &str,
        dashboard_name: &str,
    ) -> Result<DashboardSummary, StoreError> {
        self.read_json(&summary_object_path(location, dashboard_name)).await
    }
}
