// crates/dashboard-summary-server/src/rest.rs
// ============================================================================
// Module: REST Transport
// Description: Read-only REST routes for dashboards and tab summaries.
// Purpose: Expose the summary procedures as resource-style GET routes.
// Dependencies: axum, serde
// ============================================================================

//! ## Overview
//! Routes:
//! - `GET /dashboards`
//! - `GET /dashboards/{dashboard}/tab-summaries`
//! - `GET /dashboards/{dashboard}/tab-summaries/{tab}`
//! - `GET /healthz`
//!
//! Every summary route takes an optional `?scope=` query. Not-found errors
//! answer 404, storage and internal failures 500, and deadline expiry 504.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use dashboard_summary_core::GetTabSummaryRequest;
use dashboard_summary_core::ListDashboardsRequest;
use dashboard_summary_core::ListTabSummariesRequest;
use dashboard_summary_core::SummaryError;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use crate::server::CallError;
use crate::server::RequestRecord;
use crate::server::ServerState;
use crate::telemetry::SummaryMethod;
use crate::telemetry::SummaryTransport;

// ============================================================================
// SECTION: Wire Types
// ============================================================================

/// Optional scope selector shared by every summary route.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ScopeQuery {
    /// Scope token.
    #[serde(default)]
    scope: Option<String>,
}

/// REST error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Error detail.
    error: ErrorDetail,
}

/// REST error detail.
#[derive(Debug, Serialize)]
struct ErrorDetail {
    /// Stable error kind label.
    code: &'static str,
    /// Client-facing message.
    message: &'static str,
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// `GET /dashboards`
pub(crate) async fn list_dashboards(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ScopeQuery>,
) -> Response {
    let started = Instant::now();
    let request = ListDashboardsRequest {
        scope: query.scope,
    };
    let result = state.call(state.service.list_dashboards(&request)).await;
    respond(&state, SummaryMethod::ListDashboards, started, result)
}

/// `GET /dashboards/{dashboard}/tab-summaries`
pub(crate) async fn list_tab_summaries(
    State(state): State<Arc<ServerState>>,
    Path(dashboard): Path<String>,
    Query(query): Query<ScopeQuery>,
) -> Response {
    let started = Instant::now();
    let request = ListTabSummariesRequest {
        scope: query.scope,
        dashboard,
    };
    let result = state.call(state.service.list_tab_summaries(&request)).await;
    respond(&state, SummaryMethod::ListTabSummaries, started, result)
}

/// `GET /dashboards/{dashboard}/tab-summaries/{tab}`
pub(crate) async fn get_tab_summary(
    State(state): State<Arc<ServerState>>,
    Path((dashboard, tab)): Path<(String, String)>,
    Query(query): Query<ScopeQuery>,
) -> Response {
    let started = Instant::now();
    let request = GetTabSummaryRequest {
        scope: query.scope,
        dashboard,
        tab,
    };
    let result = state.call(state.service.get_tab_summary(&request)).await;
    respond(&state, SummaryMethod::GetTabSummary, started, result)
}

/// `GET /healthz`
pub(crate) async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

// ============================================================================
// SECTION: Responses
// ============================================================================

/// Records the request and renders the result.
fn respond<T: Serialize>(
    state: &ServerState,
    method: SummaryMethod,
    started: Instant,
    result: Result<T, CallError>,
) -> Response {
    let (status, error_kind, response) = match result {
        Ok(body) => (StatusCode::OK, None, Json(body).into_response()),
        Err(err) => {
            let status = status_for(&err);
            let body = ErrorBody {
                error: ErrorDetail {
                    code: err.public_code(),
                    message: err.public_message(),
                },
            };
            (status, Some(err.kind_label()), (status, Json(body)).into_response())
        }
    };
    state.record(RequestRecord {
        request_id: state.issue_request_id(),
        transport: SummaryTransport::Rest,
        method,
        status,
        error_code: None,
        error_kind,
        started,
    });
    response
}

/// Maps a call failure onto an HTTP status.
pub(crate) const fn status_for(err: &CallError) -> StatusCode {
    match err {
        CallError::Summary(SummaryError::NotFound {
            ..
        }) => StatusCode::NOT_FOUND,
        CallError::Summary(_) => StatusCode::INTERNAL_SERVER_ERROR,
        CallError::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
    }
}
