// crates/dashboard-summary-core/src/runtime/resolver.rs
// ============================================================================
// Module: Config and Summary Resolvers
// Description: Store-backed lookups for dashboards, tabs, and summary records.
// Purpose: Translate store reads into not-found / unavailable outcomes.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The resolvers perform exactly one store read per call and never retry.
//!
//! - Any configuration read failure is [`SummaryError::Unavailable`]; a
//!   readable config without the dashboard is not-found.
//! - A missing summary document means the dashboard was never summarized and
//!   is not-found; any other summary read failure is unavailable.
//!
//! Summary keys are derived from the configured dashboard, so callers must
//! resolve configuration first.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use crate::core::config::Configuration;
use crate::core::config::DashboardConfig;
use crate::core::config::TabConfig;
use crate::core::naming::names_match;
use crate::core::summary::DashboardSummary;
use crate::core::summary::TabSummaryRecord;
use crate::interfaces::ConfigStore;
use crate::interfaces::StoreError;
use crate::interfaces::SummaryStore;
use crate::runtime::error::NotFoundKind;
use crate::runtime::error::SummaryError;

// ============================================================================
// SECTION: Config Resolver
// ============================================================================

/// Resolves dashboards and tabs from the configuration store.
#[derive(Clone)]
pub struct ConfigResolver {
    /// Backing configuration store.
    store: Arc<dyn ConfigStore>,
}

impl ConfigResolver {
    /// Creates a resolver over a configuration store.
    #[must_use]
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self {
            store,
        }
    }

    /// Loads the configuration document at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Unavailable`] for every read failure, including
    /// a missing location.
    pub async fn load(&self, location: &str) -> Result<Configuration, SummaryError> {
        self.store
            .read_config(location)
            .await
            .map_err(|err| SummaryError::Unavailable(format!("configuration: {err}")))
    }

    /// Finds a dashboard by case-insensitive name.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Unavailable`] when the configuration cannot be
    /// read, or [`NotFoundKind::DashboardNotConfigured`] when no dashboard
    /// matches.
    pub async fn find_dashboard(
        &self,
        location: &str,
        dashboard_name: &str,
    ) -> Result<DashboardConfig, SummaryError> {
        let config = self.load(location).await?;
        let mut dashboards = config.dashboards;
        let index = dashboards
            .iter()
            .position(|dashboard| names_match(&dashboard.name, dashboard_name))
            .ok_or_else(|| {
                SummaryError::not_found(
                    NotFoundKind::DashboardNotConfigured,
                    format!("dashboard '{dashboard_name}' is not configured"),
                )
            })?;
        Ok(dashboards.swap_remove(index))
    }
}

/// Finds a tab within a configured dashboard by case-insensitive name.
///
/// # Errors
///
/// Returns [`NotFoundKind::TabNotConfigured`] when no tab matches.
pub fn find_tab<'a>(
    dashboard: &'a DashboardConfig,
    tab_name: &str,
) -> Result<&'a TabConfig, SummaryError> {
    dashboard.tab(tab_name).ok_or_else(|| {
        SummaryError::not_found(
            NotFoundKind::TabNotConfigured,
            format!("tab '{tab_name}' is not configured in dashboard '{}'", dashboard.name),
        )
    })
}

// ============================================================================
// SECTION: Summary Resolver
// ============================================================================

/// Resolves persisted summary records from the summary store.
#[derive(Clone)]
pub struct SummaryResolver {
    /// Backing summary store.
    store: Arc<dyn SummaryStore>,
}

impl SummaryResolver {
    /// Creates a resolver over a summary store.
    #[must_use]
    pub fn new(store: Arc<dyn SummaryStore>) -> Self {
        Self {
            store,
        }
    }

    /// Loads the summary document for a configured dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundKind::DashboardNotSummarized`] when no summary exists
    /// yet, or [`SummaryError::Unavailable`] when the store cannot be read.
    pub async fn find_dashboard_summaries(
        &self,
        location: &str,
        dashboard: &DashboardConfig,
    ) -> Result<DashboardSummary, SummaryError> {
        match self.store.read_summary(location, &dashboard.name).await {
            Ok(summary) => Ok(summary),
            Err(StoreError::Missing(_)) => Err(SummaryError::not_found(
                NotFoundKind::DashboardNotSummarized,
                format!("dashboard '{}' has no summary", dashboard.name),
            )),
            Err(err) => Err(SummaryError::Unavailable(format!("summary: {err}"))),
        }
    }
}

/// Selects the summary record of a configured tab.
///
/// # Errors
///
/// Returns [`NotFoundKind::TabNotSummarized`] when the tab has never reported.
pub fn find_tab_summary<'a>(
    summary: &'a DashboardSummary,
    dashboard: &DashboardConfig,
    tab: &TabConfig,
) -> Result<&'a TabSummaryRecord, SummaryError> {
    summary.record(&dashboard.name, &tab.name).ok_or_else(|| {
        SummaryError::not_found(
            NotFoundKind::TabNotSummarized,
            format!("tab '{}' of dashboard '{}' has no summary", tab.name, dashboard.name),
        )
    })
}
