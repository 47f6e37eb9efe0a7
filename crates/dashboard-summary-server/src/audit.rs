// crates/dashboard-summary-server/src/audit.rs
// ============================================================================
// Module: Summary Audit Logging
// Description: Structured audit events for summary request handling.
// Purpose: Emit JSON-line request logs without hard dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every request handled by either transport produces exactly one
//! `summary_request` event. Events carry method, outcome, and error labels
//! only; scope tokens, storage locations, and error detail stay out of the
//! log.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::telemetry::SummaryMethod;
use crate::telemetry::SummaryOutcome;
use crate::telemetry::SummaryTransport;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Summary request audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Request identifier.
    pub request_id: String,
    /// Transport label.
    pub transport: &'static str,
    /// Method label.
    pub method: &'static str,
    /// Outcome label.
    pub outcome: &'static str,
    /// HTTP status returned.
    pub http_status: u16,
    /// JSON-RPC error code when present.
    pub error_code: Option<i64>,
    /// Normalized error kind label.
    pub error_kind: Option<&'static str>,
    /// Handling latency in milliseconds.
    pub latency_ms: u128,
}

/// Inputs required to construct an audit event.
pub struct SummaryAuditEventParams {
    /// Request identifier.
    pub request_id: String,
    /// Transport used for the request.
    pub transport: SummaryTransport,
    /// Method classification.
    pub method: SummaryMethod,
    /// Request outcome.
    pub outcome: SummaryOutcome,
    /// HTTP status returned.
    pub http_status: u16,
    /// JSON-RPC error code when present.
    pub error_code: Option<i64>,
    /// Normalized error kind label.
    pub error_kind: Option<&'static str>,
    /// Handling latency in milliseconds.
    pub latency_ms: u128,
}

impl SummaryAuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: SummaryAuditEventParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "summary_request",
            timestamp_ms,
            request_id: params.request_id,
            transport: params.transport.as_str(),
            method: params.method.as_str(),
            outcome: params.outcome.as_str(),
            http_status: params.http_status,
            error_code: params.error_code,
            error_kind: params.error_kind,
            latency_ms: params.latency_ms,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for summary request events.
pub trait AuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &SummaryAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    fn record(&self, event: &SummaryAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl AuditSink for FileAuditSink {
    fn record(&self, event: &SummaryAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _event: &SummaryAuditEvent) {}
}
