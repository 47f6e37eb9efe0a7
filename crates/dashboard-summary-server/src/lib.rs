// crates/dashboard-summary-server/src/lib.rs
// ============================================================================
// Module: Dashboard Summary Server Library
// Description: HTTP transports for the tab summary service.
// Purpose: Expose server construction, transports, and observability hooks.
// Dependencies: dashboard-summary-{core, config, store}, axum
// ============================================================================

//! ## Overview
//! The server hosts JSON-RPC and REST faces over one
//! [`dashboard_summary_core::TabSummaryService`]. Both faces share the request
//! deadline, error classification, metrics, and audit logging.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
mod rest;
pub mod rpc;
pub mod server;
pub mod telemetry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::AuditSink;
pub use audit::FileAuditSink;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use audit::SummaryAuditEvent;
pub use server::ServerError;
pub use server::ServerOptions;
pub use server::SummaryServer;
pub use server::build_assembler;
pub use server::build_router;
pub use telemetry::NoopMetrics;
pub use telemetry::SummaryMethod;
pub use telemetry::SummaryMetricEvent;
pub use telemetry::SummaryMetrics;
pub use telemetry::SummaryOutcome;
pub use telemetry::SummaryTransport;
