// crates/dashboard-summary-core/tests/assembler.rs
// ============================================================================
// Module: Summary Assembler Tests
// Description: End-to-end resolution through in-memory stores.
// Purpose: Verify lookup, join, ordering, and error classification.
// Dependencies: dashboard-summary-core
// ============================================================================
//! ## Overview
//! Drives [`SummaryAssembler`] through list, get, and dashboard listing with
//! in-memory configuration and summary stores.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::sync::Arc;

use async_trait::async_trait;
use dashboard_summary_core::Configuration;
use dashboard_summary_core::ConfigStore;
use dashboard_summary_core::DashboardConfig;
use dashboard_summary_core::DashboardSummary;
use dashboard_summary_core::GetTabSummaryRequest;
use dashboard_summary_core::InMemoryConfigStore;
use dashboard_summary_core::InMemorySummaryStore;
use dashboard_summary_core::ListDashboardsRequest;
use dashboard_summary_core::ListTabSummariesRequest;
use dashboard_summary_core::NotFoundKind;
use dashboard_summary_core::OverallStatus;
use dashboard_summary_core::ScopeRegistry;
use dashboard_summary_core::StoreError;
use dashboard_summary_core::SummaryAssembler;
use dashboard_summary_core::SummaryError;
use dashboard_summary_core::SummaryStore;
use dashboard_summary_core::TabConfig;
use dashboard_summary_core::TabSummary;
use dashboard_summary_core::TabSummaryRecord;
use dashboard_summary_core::TabSummaryService;
use dashboard_summary_core::Timestamp;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

const DEFAULT_SCOPE: &str = "gs://default";

fn dashboard(name: &str, tabs: &[(&str, &str)]) -> DashboardConfig {
    DashboardConfig {
        name: name.to_string(),
        dashboard_tab: tabs
            .iter()
            .map(|(tab, group)| TabConfig {
                name: (*tab).to_string(),
                test_group_name: (*group).to_string(),
            })
            .collect(),
    }
}

fn record(
    tab: &str,
    status: OverallStatus,
    message: &str,
    green: &str,
    timestamp: f64,
) -> TabSummaryRecord {
    TabSummaryRecord {
        dashboard_name: "Marco".to_string(),
        dashboard_tab_name: tab.to_string(),
        status: message.to_string(),
        overall_status: status.code(),
        latest_green: green.to_string(),
        last_run_timestamp: timestamp,
        last_update_timestamp: timestamp,
    }
}

fn marco_config() -> Configuration {
    Configuration {
        dashboards: vec![dashboard(
            "Marco",
            &[
                ("polo-1", "cheesecake"),
                ("polo-2", "tiramisu"),
                ("polo-3", "donut"),
                ("polo-4", "brownie"),
            ],
        )],
    }
}

fn marco_summary() -> DashboardSummary {
    DashboardSummary {
        tab_summaries: vec![
            record(
                "polo-1",
                OverallStatus::Flaky,
                "1/7 tests are passing!",
                "Hulk",
                915_166_800.916_166_782,
            ),
            record("polo-2", OverallStatus::Acceptable, "1/7 tests are passing!", "Lantern", 0.1),
            record(
                "polo-3",
                OverallStatus::Acceptable,
                "1/7 tests are passing!",
                "Hulk",
                916_166_800.0,
            ),
            record(
                "polo-4",
                OverallStatus::Acceptable,
                "1/7 tests are failing!",
                "Lantern",
                0.916_166_782,
            ),
        ],
    }
}

fn assembler(configs: InMemoryConfigStore, summaries: InMemorySummaryStore) -> SummaryAssembler {
    SummaryAssembler::new(
        Arc::new(ScopeRegistry::new(Some(DEFAULT_SCOPE.to_string()), Vec::new())),
        Arc::new(configs),
        Arc::new(summaries),
    )
}

fn marco_assembler() -> SummaryAssembler {
    assembler(
        InMemoryConfigStore::new().with_config("gs://default/config", marco_config()),
        InMemorySummaryStore::new().with_object("gs://default/summary/summary-marco", marco_summary()),
    )
}

fn list_request(dashboard: &str) -> ListTabSummariesRequest {
    ListTabSummariesRequest {
        scope: None,
        dashboard: dashboard.to_string(),
    }
}

fn get_request(dashboard: &str, tab: &str) -> GetTabSummaryRequest {
    GetTabSummaryRequest {
        scope: None,
        dashboard: dashboard.to_string(),
        tab: tab.to_string(),
    }
}

fn ts(seconds: i64, nanos: i32) -> Timestamp {
    Timestamp {
        seconds,
        nanos,
    }
}

fn expected(tab: &str, status: &str, message: &str, green: &str, at: Timestamp) -> TabSummary {
    TabSummary {
        dashboard_name: "Marco".to_string(),
        tab_name: tab.to_string(),
        detailed_status_message: message.to_string(),
        overall_status: status.to_string(),
        latest_passing_build: green.to_string(),
        last_run_timestamp: at,
        last_update_timestamp: at,
    }
}

/// Store that fails every read.
struct BrokenStore;

#[async_trait]
impl ConfigStore for BrokenStore {
    async fn read_config(&self, location: &str) -> Result<Configuration, StoreError> {
        Err(StoreError::Unreadable(location.to_string()))
    }
}

#[async_trait]
impl SummaryStore for BrokenStore {
    async fn read_summary(
        &self,
        location: &str,
        _dashboard_name: &str,
    ) -> Result<DashboardSummary, StoreError> {
        Err(StoreError::Unreadable(location.to_string()))
    }
}

// ============================================================================
// SECTION: List Tab Summaries
// ============================================================================

#[tokio::test]
async fn list_returns_summaries_in_configured_order() {
    let response = marco_assembler().list_tab_summaries(&list_request("marco")).await.unwrap();
    assert_eq!(
        response.tab_summaries,
        vec![
            expected(
                "polo-1",
                "FLAKY",
                "1/7 tests are passing!",
                "Hulk",
                ts(915_166_800, 916_166_782)
            ),
            expected("polo-2", "ACCEPTABLE", "1/7 tests are passing!", "Lantern", ts(0, 100_000_000)),
            expected("polo-3", "ACCEPTABLE", "1/7 tests are passing!", "Hulk", ts(916_166_800, 0)),
            expected("polo-4", "ACCEPTABLE", "1/7 tests are failing!", "Lantern", ts(0, 916_166_782)),
        ]
    );
}

#[tokio::test]
async fn list_follows_config_order_not_storage_order() {
    let mut summary = marco_summary();
    summary.tab_summaries.reverse();
    let assembler = assembler(
        InMemoryConfigStore::new().with_config("gs://default/config", marco_config()),
        InMemorySummaryStore::new().with_object("gs://default/summary/summary-marco", summary),
    );
    let response = assembler.list_tab_summaries(&list_request("Marco")).await.unwrap();
    let tabs: Vec<&str> =
        response.tab_summaries.iter().map(|summary| summary.tab_name.as_str()).collect();
    assert_eq!(tabs, vec!["polo-1", "polo-2", "polo-3", "polo-4"]);
}

#[tokio::test]
async fn list_skips_tabs_without_records() {
    let mut summary = marco_summary();
    summary.tab_summaries.retain(|record| record.dashboard_tab_name != "polo-2");
    let assembler = assembler(
        InMemoryConfigStore::new().with_config("gs://default/config", marco_config()),
        InMemorySummaryStore::new().with_object("gs://default/summary/summary-marco", summary),
    );
    let response = assembler.list_tab_summaries(&list_request("marco")).await.unwrap();
    let tabs: Vec<&str> =
        response.tab_summaries.iter().map(|summary| summary.tab_name.as_str()).collect();
    assert_eq!(tabs, vec!["polo-1", "polo-3", "polo-4"]);
}

#[tokio::test]
async fn list_fails_when_dashboard_is_not_configured() {
    let assembler = assembler(
        InMemoryConfigStore::new().with_config("gs://default/config", Configuration::default()),
        InMemorySummaryStore::new(),
    );
    let err = assembler.list_tab_summaries(&list_request("missing")).await.unwrap_err();
    assert_eq!(err.not_found_kind(), Some(NotFoundKind::DashboardNotConfigured));
}

#[tokio::test]
async fn list_fails_when_dashboard_has_no_summary() {
    let assembler = assembler(
        InMemoryConfigStore::new().with_config(
            "gs://default/config",
            Configuration {
                dashboards: vec![dashboard("ACME", &[("me-me", "testgroupname")])],
            },
        ),
        InMemorySummaryStore::new(),
    );
    let err = assembler.list_tab_summaries(&list_request("acme")).await.unwrap_err();
    assert_eq!(err.not_found_kind(), Some(NotFoundKind::DashboardNotSummarized));
}

#[tokio::test]
async fn list_with_unreadable_config_is_unavailable() {
    let request = ListTabSummariesRequest {
        scope: Some("gs://welp".to_string()),
        dashboard: "doesntmatter".to_string(),
    };
    let err = marco_assembler().list_tab_summaries(&request).await.unwrap_err();
    assert!(matches!(err, SummaryError::Unavailable(_)));
}

#[tokio::test]
async fn list_honors_an_explicit_scope() {
    let assembler = assembler(
        InMemoryConfigStore::new().with_config("gs://k9s/config", marco_config()),
        InMemorySummaryStore::new().with_object("gs://k9s/summary/summary-marco", marco_summary()),
    );
    let request = ListTabSummariesRequest {
        scope: Some("gs://k9s".to_string()),
        dashboard: "marco".to_string(),
    };
    let response = assembler.list_tab_summaries(&request).await.unwrap();
    assert_eq!(response.tab_summaries.len(), 4);
}

#[tokio::test]
async fn unreadable_summary_store_is_unavailable() {
    let assembler = SummaryAssembler::new(
        Arc::new(ScopeRegistry::new(Some(DEFAULT_SCOPE.to_string()), Vec::new())),
        Arc::new(InMemoryConfigStore::new().with_config("gs://default/config", marco_config())),
        Arc::new(BrokenStore),
    );
    let err = assembler.list_tab_summaries(&list_request("marco")).await.unwrap_err();
    assert!(matches!(err, SummaryError::Unavailable(_)));
    let err = assembler.get_tab_summary(&get_request("marco", "polo-1")).await.unwrap_err();
    assert!(matches!(err, SummaryError::Unavailable(_)));
}

#[tokio::test]
async fn broken_config_store_is_unavailable_not_not_found() {
    let assembler = SummaryAssembler::new(
        Arc::new(ScopeRegistry::default()),
        Arc::new(BrokenStore),
        Arc::new(InMemorySummaryStore::new()),
    );
    let err = assembler.get_tab_summary(&get_request("marco", "polo-1")).await.unwrap_err();
    assert!(matches!(err, SummaryError::Unavailable(_)));
    assert_eq!(err.not_found_kind(), None);
}

// ============================================================================
// SECTION: Get Tab Summary
// ============================================================================

#[tokio::test]
async fn get_returns_the_requested_tab() {
    let response = marco_assembler().get_tab_summary(&get_request("marco", "POLO-1")).await.unwrap();
    assert_eq!(
        response.tab_summary,
        expected("polo-1", "FLAKY", "1/7 tests are passing!", "Hulk", ts(915_166_800, 916_166_782))
    );
}

#[tokio::test]
async fn get_fails_when_dashboard_is_not_configured() {
    let assembler = assembler(
        InMemoryConfigStore::new().with_config("gs://default/config", Configuration::default()),
        InMemorySummaryStore::new(),
    );
    let err = assembler.get_tab_summary(&get_request("missing", "Carpe Noctem")).await.unwrap_err();
    assert_eq!(err.not_found_kind(), Some(NotFoundKind::DashboardNotConfigured));
}

#[tokio::test]
async fn get_fails_when_tab_is_not_configured() {
    let assembler = assembler(
        InMemoryConfigStore::new().with_config(
            "gs://default/config",
            Configuration {
                dashboards: vec![dashboard("Aurora", &[("Borealis", "")])],
            },
        ),
        InMemorySummaryStore::new(),
    );
    let err = assembler.get_tab_summary(&get_request("Aurora", "Noctem")).await.unwrap_err();
    assert_eq!(err.not_found_kind(), Some(NotFoundKind::TabNotConfigured));
}

#[tokio::test]
async fn get_fails_when_dashboard_has_no_summary() {
    let assembler = assembler(
        InMemoryConfigStore::new().with_config(
            "gs://default/config",
            Configuration {
                dashboards: vec![dashboard("ACME", &[("me-me", "testgroupname")])],
            },
        ),
        InMemorySummaryStore::new(),
    );
    let err = assembler.get_tab_summary(&get_request("acme", "me-me")).await.unwrap_err();
    assert_eq!(err.not_found_kind(), Some(NotFoundKind::DashboardNotSummarized));
}

#[tokio::test]
async fn get_fails_when_tab_has_no_summary() {
    let mut summary = marco_summary();
    summary.tab_summaries.retain(|record| record.dashboard_tab_name == "polo-1");
    let assembler = assembler(
        InMemoryConfigStore::new().with_config("gs://default/config", marco_config()),
        InMemorySummaryStore::new().with_object("gs://default/summary/summary-marco", summary),
    );
    let err = assembler.get_tab_summary(&get_request("marco", "polo-2")).await.unwrap_err();
    assert_eq!(err.not_found_kind(), Some(NotFoundKind::TabNotSummarized));
}

#[tokio::test]
async fn unknown_status_code_is_an_invariant_violation() {
    let mut summary = marco_summary();
    summary.tab_summaries[0].overall_status = 99;
    let assembler = assembler(
        InMemoryConfigStore::new().with_config("gs://default/config", marco_config()),
        InMemorySummaryStore::new().with_object("gs://default/summary/summary-marco", summary),
    );
    let err = assembler.get_tab_summary(&get_request("marco", "polo-1")).await.unwrap_err();
    assert!(matches!(err, SummaryError::InvariantViolation(_)));
}

#[tokio::test]
async fn negative_timestamp_is_rejected_before_normalization() {
    let mut summary = marco_summary();
    summary.tab_summaries[1].last_run_timestamp = -5.0;
    let assembler = assembler(
        InMemoryConfigStore::new().with_config("gs://default/config", marco_config()),
        InMemorySummaryStore::new().with_object("gs://default/summary/summary-marco", summary),
    );
    let err = assembler.get_tab_summary(&get_request("marco", "polo-2")).await.unwrap_err();
    assert!(matches!(err, SummaryError::Unavailable(_)));
    let err = assembler.list_tab_summaries(&list_request("marco")).await.unwrap_err();
    assert!(matches!(err, SummaryError::Unavailable(_)));
}

// ============================================================================
// SECTION: List Dashboards
// ============================================================================

#[tokio::test]
async fn list_dashboards_reports_configured_dashboards() {
    let response = marco_assembler()
        .list_dashboards(&ListDashboardsRequest {
            scope: None,
        })
        .await
        .unwrap();
    assert_eq!(response.dashboards.len(), 1);
    assert_eq!(response.dashboards[0].name, "Marco");
    assert_eq!(response.dashboards[0].tab_names, vec!["polo-1", "polo-2", "polo-3", "polo-4"]);
}

#[tokio::test]
async fn list_dashboards_with_unreadable_config_is_unavailable() {
    let err = marco_assembler()
        .list_dashboards(&ListDashboardsRequest {
            scope: Some("gs://welp".to_string()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SummaryError::Unavailable(_)));
}
