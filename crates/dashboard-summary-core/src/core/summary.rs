// crates/dashboard-summary-core/src/core/summary.rs
// ============================================================================
// Module: Tab Summary Model
// Description: Persisted summary records and the external tab summary shape.
// Purpose: Separate the producer's record format from the served wire format.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`DashboardSummary`] is written by the upstream summarizer, one document per
//! dashboard, holding one [`TabSummaryRecord`] per tab that has ever reported.
//! [`TabSummary`] is the external projection built fresh for every response;
//! it is never persisted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Persisted Records
// ============================================================================

/// Persisted summary document for a single dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Tab records in storage order.
    #[serde(default)]
    pub tab_summaries: Vec<TabSummaryRecord>,
}

impl DashboardSummary {
    /// Returns the record for an exact (dashboard, tab) pair.
    #[must_use]
    pub fn record(&self, dashboard_name: &str, tab_name: &str) -> Option<&TabSummaryRecord> {
        self.tab_summaries.iter().find(|record| {
            record.dashboard_name == dashboard_name && record.dashboard_tab_name == tab_name
        })
    }
}

/// Persisted summary of one dashboard tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabSummaryRecord {
    /// Dashboard name as configured.
    pub dashboard_name: String,
    /// Tab name as configured.
    pub dashboard_tab_name: String,
    /// Free-text status message.
    #[serde(default)]
    pub status: String,
    /// Overall status code (see [`crate::OverallStatus`]).
    #[serde(default)]
    pub overall_status: i32,
    /// Most recent build with all tests passing.
    #[serde(default)]
    pub latest_green: String,
    /// Last run time in float epoch seconds.
    #[serde(default)]
    pub last_run_timestamp: f64,
    /// Last update time in float epoch seconds.
    #[serde(default)]
    pub last_update_timestamp: f64,
}

// ============================================================================
// SECTION: External Summary
// ============================================================================

/// External summary of one dashboard tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabSummary {
    /// Dashboard name as configured.
    pub dashboard_name: String,
    /// Tab name as configured.
    pub tab_name: String,
    /// Detailed status message.
    pub detailed_status_message: String,
    /// Overall status token (e.g. `FLAKY`).
    pub overall_status: String,
    /// Latest passing build identifier.
    pub latest_passing_build: String,
    /// Last run time.
    pub last_run_timestamp: Timestamp,
    /// Last update time.
    pub last_update_timestamp: Timestamp,
}
