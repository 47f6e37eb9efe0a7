// crates/dashboard-summary-core/src/runtime/service.rs
// ============================================================================
// Module: Summary Assembler
// Description: The tab summary service and its store-backed implementation.
// Purpose: Join configuration and summary records into external summaries.
// Dependencies: crate::{core, interfaces}, async-trait
// ============================================================================

//! ## Overview
//! [`TabSummaryService`] is the single service interface behind every
//! transport. [`SummaryAssembler`] implements it by orchestrating the scope
//! registry, both resolvers, the timestamp normalizer, and the status
//! projector. It holds no per-request state.
//!
//! `get_tab_summary` fails when the requested tab has no record, while
//! `list_tab_summaries` silently skips such tabs. The asymmetry is part of the
//! contract.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::api::DashboardEntry;
use crate::core::api::GetTabSummaryRequest;
use crate::core::api::GetTabSummaryResponse;
use crate::core::api::ListDashboardsRequest;
use crate::core::api::ListDashboardsResponse;
use crate::core::api::ListTabSummariesRequest;
use crate::core::api::ListTabSummariesResponse;
use crate::core::status::project_status;
use crate::core::summary::TabSummary;
use crate::core::summary::TabSummaryRecord;
use crate::core::time::EpochSeconds;
use crate::core::time::Timestamp;
use crate::core::time::normalize;
use crate::interfaces::ConfigStore;
use crate::interfaces::SummaryStore;
use crate::runtime::error::SummaryError;
use crate::runtime::resolver::ConfigResolver;
use crate::runtime::resolver::SummaryResolver;
use crate::runtime::resolver::find_tab;
use crate::runtime::resolver::find_tab_summary;
use crate::runtime::scope::ScopeRegistry;

// ============================================================================
// SECTION: Service Trait
// ============================================================================

/// Tab summary procedures shared by every transport.
#[async_trait]
pub trait TabSummaryService: Send + Sync {
    /// Returns the summaries of every reported tab of a dashboard, in
    /// configured tab order.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError`] when the dashboard is not configured or not
    /// summarized, or when a store is unavailable.
    async fn list_tab_summaries(
        &self,
        request: &ListTabSummariesRequest,
    ) -> Result<ListTabSummariesResponse, SummaryError>;

    /// Returns the summary of one tab.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError`] when the dashboard, tab, or tab record is
    /// missing, or when a store is unavailable.
    async fn get_tab_summary(
        &self,
        request: &GetTabSummaryRequest,
    ) -> Result<GetTabSummaryResponse, SummaryError>;

    /// Returns the dashboards configured in a scope.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Unavailable`] when the configuration cannot be
    /// read.
    async fn list_dashboards(
        &self,
        request: &ListDashboardsRequest,
    ) -> Result<ListDashboardsResponse, SummaryError>;
}

// ============================================================================
// SECTION: Summary Assembler
// ============================================================================

/// Store-backed [`TabSummaryService`].
#[derive(Clone)]
pub struct SummaryAssembler {
    /// Scope lookup table.
    scopes: Arc<ScopeRegistry>,
    /// Configuration lookups.
    configs: ConfigResolver,
    /// Summary record lookups.
    summaries: SummaryResolver,
}

impl SummaryAssembler {
    /// Creates an assembler over the given scope registry and stores.
    #[must_use]
    pub fn new(
        scopes: Arc<ScopeRegistry>,
        config_store: Arc<dyn ConfigStore>,
        summary_store: Arc<dyn SummaryStore>,
    ) -> Self {
        Self {
            scopes,
            configs: ConfigResolver::new(config_store),
            summaries: SummaryResolver::new(summary_store),
        }
    }
}

#[async_trait]
impl TabSummaryService for SummaryAssembler {
    async fn list_tab_summaries(
        &self,
        request: &ListTabSummariesRequest,
    ) -> Result<ListTabSummariesResponse, SummaryError> {
        let locations = self.scopes.resolve(request.scope.as_deref());
        let dashboard = self.configs.find_dashboard(&locations.config, &request.dashboard).await?;
        let summary = self.summaries.find_dashboard_summaries(&locations.summary, &dashboard).await?;
        let mut tab_summaries = Vec::with_capacity(dashboard.dashboard_tab.len());
        for tab in &dashboard.dashboard_tab {
            if let Some(record) = summary.record(&dashboard.name, &tab.name) {
                tab_summaries.push(assemble(record)?);
            }
        }
        Ok(ListTabSummariesResponse {
            tab_summaries,
        })
    }

    async fn get_tab_summary(
        &self,
        request: &GetTabSummaryRequest,
    ) -> Result<GetTabSummaryResponse, SummaryError> {
        let locations = self.scopes.resolve(request.scope.as_deref());
        let dashboard = self.configs.find_dashboard(&locations.config, &request.dashboard).await?;
        let tab = find_tab(&dashboard, &request.tab)?;
        let summary = self.summaries.find_dashboard_summaries(&locations.summary, &dashboard).await?;
        let record = find_tab_summary(&summary, &dashboard, tab)?;
        Ok(GetTabSummaryResponse {
            tab_summary: assemble(record)?,
        })
    }

    async fn list_dashboards(
        &self,
        request: &ListDashboardsRequest,
    ) -> Result<ListDashboardsResponse, SummaryError> {
        let locations = self.scopes.resolve(request.scope.as_deref());
        let config = self.configs.load(&locations.config).await?;
        let dashboards = config
            .dashboards
            .into_iter()
            .map(|dashboard| DashboardEntry {
                name: dashboard.name,
                tab_names: dashboard.dashboard_tab.into_iter().map(|tab| tab.name).collect(),
            })
            .collect();
        Ok(ListDashboardsResponse {
            dashboards,
        })
    }
}

// ============================================================================
// SECTION: Assembly
// ============================================================================

/// Builds the external summary for a persisted record.
fn assemble(record: &TabSummaryRecord) -> Result<TabSummary, SummaryError> {
    let overall_status = project_status(record.overall_status)
        .map_err(|err| SummaryError::InvariantViolation(err.to_string()))?;
    Ok(TabSummary {
        dashboard_name: record.dashboard_name.clone(),
        tab_name: record.dashboard_tab_name.clone(),
        detailed_status_message: record.status.clone(),
        overall_status: overall_status.to_string(),
        latest_passing_build: record.latest_green.clone(),
        last_run_timestamp: checked_timestamp(record.last_run_timestamp, "last_run_timestamp")?,
        last_update_timestamp: checked_timestamp(
            record.last_update_timestamp,
            "last_update_timestamp",
        )?,
    })
}

/// Validates and normalizes a persisted timestamp.
fn checked_timestamp(value: f64, field: &str) -> Result<Timestamp, SummaryError> {
    EpochSeconds::new(value)
        .map(normalize)
        .map_err(|err| SummaryError::Unavailable(format!("malformed {field}: {err}")))
}
