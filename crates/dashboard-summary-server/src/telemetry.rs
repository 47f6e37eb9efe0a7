// crates/dashboard-summary-server/src/telemetry.rs
// ============================================================================
// Module: Summary Telemetry
// Description: Observability hooks for summary transports.
// Purpose: Provide metric events and latency buckets without hard deps.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This module exposes a thin metrics interface for request counters and
//! latency histograms. Deployments plug in their own exporter by implementing
//! [`SummaryMetrics`]. Labels never carry scope tokens or storage locations.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default latency buckets in milliseconds for request histograms.
pub const SUMMARY_LATENCY_BUCKETS_MS: &[u64] =
    &[1, 2, 5, 10, 25, 50, 100, 250, 500, 1_000, 2_500, 5_000, 10_000, 30_000, 60_000];

// ============================================================================
// SECTION: Metric Labels
// ============================================================================

/// Transport that carried a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryTransport {
    /// JSON-RPC over `POST /rpc`.
    Rpc,
    /// REST routes.
    Rest,
}

impl SummaryTransport {
    /// Returns a stable label for the transport.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rpc => "rpc",
            Self::Rest => "rest",
        }
    }
}

/// Request method classification.
///
/// # Invariants
/// - Variants are stable for telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMethod {
    /// List the tab summaries of a dashboard.
    ListTabSummaries,
    /// Get one tab summary.
    GetTabSummary,
    /// List configured dashboards.
    ListDashboards,
    /// Invalid or malformed request.
    Invalid,
    /// Unsupported JSON-RPC method.
    Other,
}

impl SummaryMethod {
    /// Returns a stable label for the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListTabSummaries => "ListTabSummaries",
            Self::GetTabSummary => "GetTabSummary",
            Self::ListDashboards => "ListDashboards",
            Self::Invalid => "invalid",
            Self::Other => "other",
        }
    }

    /// Classifies a JSON-RPC method name.
    #[must_use]
    pub fn from_rpc_name(name: &str) -> Self {
        match name {
            "ListTabSummaries" => Self::ListTabSummaries,
            "GetTabSummary" => Self::GetTabSummary,
            "ListDashboards" => Self::ListDashboards,
            _ => Self::Other,
        }
    }
}

/// Request outcome classification.
///
/// # Invariants
/// - Variants are stable for telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// Successful request.
    Ok,
    /// Failed request.
    Error,
}

impl SummaryOutcome {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}

/// Request metric event payload.
///
/// # Invariants
/// - Optional fields are `None` when the request succeeded.
#[derive(Debug, Clone)]
pub struct SummaryMetricEvent {
    /// Transport used for the request.
    pub transport: SummaryTransport,
    /// Method classification.
    pub method: SummaryMethod,
    /// Request outcome.
    pub outcome: SummaryOutcome,
    /// JSON-RPC error code when present.
    pub error_code: Option<i64>,
    /// Normalized error kind label.
    pub error_kind: Option<&'static str>,
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Metrics sink for summary requests and latencies.
pub trait SummaryMetrics: Send + Sync {
    /// Records a request counter event.
    fn record_request(&self, event: SummaryMetricEvent);
    /// Records a latency observation for the request.
    fn record_latency(&self, event: SummaryMetricEvent, latency: Duration);
}

/// No-op metrics sink.
///
/// # Invariants
/// - Metrics are intentionally discarded.
pub struct NoopMetrics;

impl SummaryMetrics for NoopMetrics {
    fn record_request(&self, _event: SummaryMetricEvent) {}

    fn record_latency(&self, _event: SummaryMetricEvent, _latency: Duration) {}
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

    use super::SUMMARY_LATENCY_BUCKETS_MS;
    use super::SummaryMethod;

    #[test]
    fn latency_buckets_ascend_and_cover_the_longest_deadline() {
        assert!(SUMMARY_LATENCY_BUCKETS_MS.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(SUMMARY_LATENCY_BUCKETS_MS.last().is_some_and(|last| *last >= 60_000));
    }

    #[test]
    fn rpc_method_labels_round_trip() {
        for method in
            [SummaryMethod::ListTabSummaries, SummaryMethod::GetTabSummary, SummaryMethod::ListDashboards]
        {
            assert_eq!(SummaryMethod::from_rpc_name(method.as_str()), method);
        }
        assert_eq!(SummaryMethod::from_rpc_name("DeleteDashboard"), SummaryMethod::Other);
    }
}
