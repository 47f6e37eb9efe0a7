// crates/dashboard-summary-core/tests/wire_shape.rs
// ============================================================================
// Module: Wire Shape Tests
// Description: JSON shape of external summaries and persisted records.
// Purpose: Pin the camelCase external contract and snake_case storage format.
// Dependencies: dashboard-summary-core, serde_json
// ============================================================================
//! ## Overview
//! Serializes external responses and decodes persisted documents with
//! `serde_json` to pin field names and timestamp objects.

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

use dashboard_summary_core::DashboardSummary;
use dashboard_summary_core::GetTabSummaryRequest;
use dashboard_summary_core::GetTabSummaryResponse;
use dashboard_summary_core::TabSummary;
use dashboard_summary_core::Timestamp;
use serde_json::json;

fn polo() -> TabSummary {
    TabSummary {
        dashboard_name: "Marco".to_string(),
        tab_name: "polo-1".to_string(),
        detailed_status_message: "1/7 tests are passing!".to_string(),
        overall_status: "FLAKY".to_string(),
        latest_passing_build: "Hulk".to_string(),
        last_run_timestamp: Timestamp {
            seconds: 915_166_800,
            nanos: 916_166_782,
        },
        last_update_timestamp: Timestamp {
            seconds: 0,
            nanos: 100_000_000,
        },
    }
}

#[test]
fn tab_summary_serializes_camel_case_with_timestamp_objects() {
    let value = serde_json::to_value(polo()).unwrap();
    assert_eq!(
        value,
        json!({
            "dashboardName": "Marco",
            "tabName": "polo-1",
            "detailedStatusMessage": "1/7 tests are passing!",
            "overallStatus": "FLAKY",
            "latestPassingBuild": "Hulk",
            "lastRunTimestamp": {"seconds": 915_166_800, "nanos": 916_166_782},
            "lastUpdateTimestamp": {"seconds": 0, "nanos": 100_000_000}
        })
    );
}

#[test]
fn get_response_wraps_single_summary() {
    let value = serde_json::to_value(GetTabSummaryResponse {
        tab_summary: polo(),
    })
    .unwrap();
    assert_eq!(value["tabSummary"]["tabName"], json!("polo-1"));
}

#[test]
fn requests_reject_unknown_fields() {
    let parsed = serde_json::from_value::<GetTabSummaryRequest>(json!({
        "dashboard": "marco",
        "tab": "polo-1",
        "tabName": "polo-1"
    }));
    assert!(parsed.is_err());
    let parsed = serde_json::from_value::<GetTabSummaryRequest>(json!({
        "dashboard": "marco",
        "tab": "polo-1"
    }))
    .unwrap();
    assert_eq!(parsed.scope, None);
}

#[test]
fn persisted_summary_decodes_snake_case_records() {
    let summary: DashboardSummary = serde_json::from_value(json!({
        "tab_summaries": [{
            "dashboard_name": "Marco",
            "dashboard_tab_name": "polo-1",
            "overall_status": 4,
            "last_run_timestamp": 915_166_800.5_f64
        }]
    }))
    .unwrap();
    let record = summary.record("Marco", "polo-1").unwrap();
    assert_eq!(record.overall_status, 4);
    assert_eq!(record.status, "");
    assert!(record.last_update_timestamp.abs() < f64::EPSILON);
}
