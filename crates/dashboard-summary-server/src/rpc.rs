// crates/dashboard-summary-server/src/rpc.rs
// ============================================================================
// Module: JSON-RPC Transport
// Description: JSON-RPC 2.0 dispatch for the tab summary procedures.
// Purpose: Map wire requests onto the service and errors onto RPC codes.
// Dependencies: axum, serde, serde_json
// ============================================================================

//! ## Overview
//! `POST /rpc` accepts one JSON-RPC 2.0 request per body. Methods map one to
//! one onto [`TabSummaryService`] procedures. Malformed envelopes and unknown
//! methods are rejected with HTTP 400; service failures answer HTTP 200 with a
//! JSON-RPC error object.
//!
//! [`TabSummaryService`]: dashboard_summary_core::TabSummaryService

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::body::Bytes;
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
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::server::CallError;
use crate::server::RequestRecord;
use crate::server::ServerState;
use crate::telemetry::SummaryMethod;
use crate::telemetry::SummaryTransport;

// ============================================================================
// SECTION: Error Codes
// ============================================================================

/// Envelope is not a valid JSON-RPC 2.0 request.
pub const INVALID_REQUEST: i64 = -32600;
/// Method is not one of the summary procedures.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// Params do not match the method's request shape.
pub const INVALID_PARAMS: i64 = -32602;
/// Storage or internal failure.
pub const INTERNAL_ERROR: i64 = -32603;
/// A dashboard, tab, or summary record was not found.
pub const NOT_FOUND: i64 = -32004;
/// The request deadline elapsed.
pub const DEADLINE_EXCEEDED: i64 = -32008;

// ============================================================================
// SECTION: Wire Types
// ============================================================================

/// JSON-RPC request payload.
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    /// JSON-RPC protocol version.
    jsonrpc: String,
    /// Request identifier.
    #[serde(default)]
    id: Value,
    /// Method name.
    method: String,
    /// Optional method parameters.
    #[serde(default)]
    params: Option<Value>,
}

/// JSON-RPC response payload.
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    /// JSON-RPC protocol version.
    jsonrpc: &'static str,
    /// Request identifier.
    id: Value,
    /// Successful result payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    /// Error payload when the request fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// JSON-RPC error payload.
#[derive(Debug, Serialize)]
struct JsonRpcError {
    /// Error code.
    code: i64,
    /// Error message.
    message: String,
}

/// Dispatch result before recording.
struct RpcReply {
    /// HTTP status for the response.
    status: StatusCode,
    /// Response body.
    body: JsonRpcResponse,
    /// Error kind label when the call failed.
    error_kind: Option<&'static str>,
}

impl RpcReply {
    /// Builds a successful reply.
    fn ok(id: Value, result: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: JsonRpcResponse {
                jsonrpc: "2.0",
                id,
                result: Some(result),
                error: None,
            },
            error_kind: None,
        }
    }

    /// Builds an error reply.
    fn error(
        status: StatusCode,
        id: Value,
        code: i64,
        message: &str,
        error_kind: &'static str,
    ) -> Self {
        Self {
            status,
            body: JsonRpcResponse {
                jsonrpc: "2.0",
                id,
                result: None,
                error: Some(JsonRpcError {
                    code,
                    message: message.to_string(),
                }),
            },
            error_kind: Some(error_kind),
        }
    }

    /// Returns the JSON-RPC error code, if any.
    fn error_code(&self) -> Option<i64> {
        self.body.error.as_ref().map(|error| error.code)
    }
}

// ============================================================================
// SECTION: Handler
// ============================================================================

/// Handles a JSON-RPC request body.
pub(crate) async fn handle_rpc(State(state): State<Arc<ServerState>>, body: Bytes) -> Response {
    let started = Instant::now();
    let (method, request_id, reply) = match serde_json::from_slice::<JsonRpcRequest>(&body) {
        Ok(request) => {
            let method = SummaryMethod::from_rpc_name(&request.method);
            let request_id = request_id_for(&state, &request.id);
            (method, request_id, dispatch(&state, method, request).await)
        }
        Err(_) => (
            SummaryMethod::Invalid,
            state.issue_request_id(),
            RpcReply::error(
                StatusCode::BAD_REQUEST,
                Value::Null,
                INVALID_REQUEST,
                "invalid json-rpc request",
                "invalid_request",
            ),
        ),
    };
    state.record(RequestRecord {
        request_id,
        transport: SummaryTransport::Rpc,
        method,
        status: reply.status,
        error_code: reply.error_code(),
        error_kind: reply.error_kind,
        started,
    });
    (reply.status, Json(reply.body)).into_response()
}

/// Uses the client id when it is a string or number.
fn request_id_for(state: &ServerState, id: &Value) -> String {
    match id {
        Value::String(value) => value.clone(),
        Value::Number(value) => value.to_string(),
        _ => state.issue_request_id(),
    }
}

/// Routes a parsed request to its procedure.
async fn dispatch(state: &ServerState, method: SummaryMethod, request: JsonRpcRequest) -> RpcReply {
    let JsonRpcRequest {
        jsonrpc,
        id,
        method: _,
        params,
    } = request;
    if jsonrpc != "2.0" {
        return RpcReply::error(
            StatusCode::BAD_REQUEST,
            id,
            INVALID_REQUEST,
            "invalid json-rpc version",
            "invalid_request",
        );
    }
    let service = &state.service;
    match method {
        SummaryMethod::ListTabSummaries => match parse_params::<ListTabSummariesRequest>(params) {
            Ok(params) => reply(id, state.call(service.list_tab_summaries(&params)).await),
            Err(message) => invalid_params(id, &message),
        },
        SummaryMethod::GetTabSummary => match parse_params::<GetTabSummaryRequest>(params) {
            Ok(params) => reply(id, state.call(service.get_tab_summary(&params)).await),
            Err(message) => invalid_params(id, &message),
        },
        SummaryMethod::ListDashboards => match parse_params::<ListDashboardsRequest>(params) {
            Ok(params) => reply(id, state.call(service.list_dashboards(&params)).await),
            Err(message) => invalid_params(id, &message),
        },
        SummaryMethod::Invalid | SummaryMethod::Other => RpcReply::error(
            StatusCode::BAD_REQUEST,
            id,
            METHOD_NOT_FOUND,
            "method not found",
            "method_not_found",
        ),
    }
}

/// Decodes method params; absent params decode as an empty object.
fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, String> {
    let params = params.unwrap_or_else(|| Value::Object(serde_json::Map::new()));
    serde_json::from_value(params).map_err(|err| format!("invalid params: {err}"))
}

/// Builds an invalid-params reply.
fn invalid_params(id: Value, message: &str) -> RpcReply {
    RpcReply::error(StatusCode::BAD_REQUEST, id, INVALID_PARAMS, message, "invalid_params")
}

/// Converts a service result into a reply.
fn reply<T: Serialize>(id: Value, result: Result<T, CallError>) -> RpcReply {
    match result {
        Ok(response) => match serde_json::to_value(response) {
            Ok(value) => RpcReply::ok(id, value),
            Err(_) => RpcReply::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                id,
                INTERNAL_ERROR,
                "serialization failed",
                "serialization",
            ),
        },
        Err(err) => {
            RpcReply::error(StatusCode::OK, id, error_code(&err), err.public_message(), err.kind_label())
        }
    }
}

/// Maps a call failure onto its JSON-RPC error code.
pub(crate) const fn error_code(err: &CallError) -> i64 {
    match err {
        CallError::Summary(SummaryError::NotFound {
            ..
        }) => NOT_FOUND,
        CallError::Summary(_) => INTERNAL_ERROR,
        CallError::DeadlineExceeded => DEADLINE_EXCEEDED,
    }
}
