// crates/dashboard-summary-core/src/core/api.rs
// ============================================================================
// Module: Summary API Envelopes
// Description: Request and response types for the summary procedures.
// Purpose: Share one typed request/response shape across all transports.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! These envelopes are the typed procedure interface. The JSON-RPC adapter
//! deserializes params straight into the request types; the REST adapter
//! builds them from path and query parameters. Responses serialize to the same
//! camelCase JSON on both faces.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::summary::TabSummary;

// ============================================================================
// SECTION: Tab Summaries
// ============================================================================

/// Request for every reported tab summary of a dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListTabSummariesRequest {
    /// Scope token; empty or absent selects the default scope.
    #[serde(default)]
    pub scope: Option<String>,
    /// Dashboard name (case-insensitive).
    pub dashboard: String,
}

/// Tab summaries in configured tab order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTabSummariesResponse {
    /// One entry per configured tab that has a summary record.
    pub tab_summaries: Vec<TabSummary>,
}

/// Request for a single tab summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetTabSummaryRequest {
    /// Scope token; empty or absent selects the default scope.
    #[serde(default)]
    pub scope: Option<String>,
    /// Dashboard name (case-insensitive).
    pub dashboard: String,
    /// Tab name (case-insensitive).
    pub tab: String,
}

/// A single tab summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTabSummaryResponse {
    /// The requested tab summary.
    pub tab_summary: TabSummary,
}

// ============================================================================
// SECTION: Dashboards
// ============================================================================

/// Request for the dashboards configured in a scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListDashboardsRequest {
    /// Scope token; empty or absent selects the default scope.
    #[serde(default)]
    pub scope: Option<String>,
}

/// Dashboards configured in a scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDashboardsResponse {
    /// Dashboards in configuration order.
    pub dashboards: Vec<DashboardEntry>,
}

/// Configured dashboard listing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardEntry {
    /// Dashboard name as configured.
    pub name: String,
    /// Tab names in configured order.
    pub tab_names: Vec<String>,
}
