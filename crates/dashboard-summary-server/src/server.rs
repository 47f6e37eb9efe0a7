// crates/dashboard-summary-server/src/server.rs
// ============================================================================
// Module: Summary Server
// Description: HTTP server hosting the JSON-RPC and REST transports.
// Purpose: Wire configuration, storage, and the summary service into axum.
// Dependencies: dashboard-summary-{core, config, store}, axum, tokio
// ============================================================================

//! ## Overview
//! One axum router serves both transports over a shared [`TabSummaryService`]:
//! JSON-RPC 2.0 on `POST /rpc` and REST routes under `/dashboards`. Handlers
//! hold no per-request state beyond the immutable [`ServerState`].
//!
//! Every service call runs under the configured request deadline. A client
//! disconnect drops the handler future and abandons in-flight reads. Each
//! request is recorded once in metrics and once in the audit log.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::Instant;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::get;
use axum::routing::post;
use dashboard_summary_config::DashboardSummaryConfig;
use dashboard_summary_config::ServerConfig;
use dashboard_summary_core::ConfigStore;
use dashboard_summary_core::SummaryAssembler;
use dashboard_summary_core::SummaryError;
use dashboard_summary_core::SummaryStore;
use dashboard_summary_core::TabSummaryService;
use dashboard_summary_store::ObjectBackedStore;
use dashboard_summary_store::ObjectRouter;

use crate::audit::AuditSink;
use crate::audit::FileAuditSink;
use crate::audit::NoopAuditSink;
use crate::audit::StderrAuditSink;
use crate::audit::SummaryAuditEvent;
use crate::audit::SummaryAuditEventParams;
use crate::rest;
use crate::rpc;
use crate::telemetry::NoopMetrics;
use crate::telemetry::SummaryMethod;
use crate::telemetry::SummaryMetricEvent;
use crate::telemetry::SummaryMetrics;
use crate::telemetry::SummaryOutcome;
use crate::telemetry::SummaryTransport;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default per-request deadline.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Default maximum request body size in bytes.
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

// ============================================================================
// SECTION: Server Options
// ============================================================================

/// Runtime options for the HTTP transports.
#[derive(Clone)]
pub struct ServerOptions {
    /// Deadline applied to every service call.
    pub request_timeout: Duration,
    /// Maximum accepted request body size.
    pub max_body_bytes: usize,
    /// Metrics sink.
    pub metrics: Arc<dyn SummaryMetrics>,
    /// Audit sink.
    pub audit: Arc<dyn AuditSink>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            metrics: Arc::new(NoopMetrics),
            audit: Arc::new(NoopAuditSink),
        }
    }
}

impl ServerOptions {
    /// Builds options from server configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Init`] when the audit log cannot be opened.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ServerError> {
        let audit: Arc<dyn AuditSink> = if !config.audit.enabled {
            Arc::new(NoopAuditSink)
        } else if let Some(path) = &config.audit.path {
            Arc::new(
                FileAuditSink::new(Path::new(path.trim()))
                    .map_err(|err| ServerError::Init(format!("audit log: {err}")))?,
            )
        } else {
            Arc::new(StderrAuditSink)
        };
        Ok(Self {
            request_timeout: Duration::from_millis(config.request_timeout_ms),
            max_body_bytes: config.max_body_bytes,
            metrics: Arc::new(NoopMetrics),
            audit,
        })
    }
}

// ============================================================================
// SECTION: Summary Server
// ============================================================================

/// HTTP server instance.
pub struct SummaryServer {
    /// Listener address.
    bind: SocketAddr,
    /// Shared handler state.
    state: Arc<ServerState>,
}

impl SummaryServer {
    /// Builds a server from configuration, wiring the configured storage.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when configuration or initialization fails.
    pub async fn from_config(config: &DashboardSummaryConfig) -> Result<Self, ServerError> {
        config.validate().map_err(|err| ServerError::Config(err.to_string()))?;
        let bind = config.server.bind_addr().map_err(|err| ServerError::Config(err.to_string()))?;
        let service = build_assembler(config).await?;
        let options = ServerOptions::from_config(&config.server)?;
        Ok(Self::new(bind, Arc::new(service), options))
    }

    /// Builds a server over an existing service.
    #[must_use]
    pub fn new(
        bind: SocketAddr,
        service: Arc<dyn TabSummaryService>,
        options: ServerOptions,
    ) -> Self {
        Self {
            bind,
            state: Arc::new(ServerState::new(service, options)),
        }
    }

    /// Returns the axum router for this server.
    #[must_use]
    pub fn router(&self) -> Router {
        routes(Arc::clone(&self.state))
    }

    /// Serves requests until the listener fails.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Transport`] when binding or serving fails.
    pub async fn serve(self) -> Result<(), ServerError> {
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(self.bind)
            .await
            .map_err(|_| ServerError::Transport("http bind failed".to_string()))?;
        axum::serve(listener, app)
            .await
            .map_err(|_| ServerError::Transport("http server failed".to_string()))
    }
}

/// Builds the axum router over a service.
#[must_use]
pub fn build_router(service: Arc<dyn TabSummaryService>, options: ServerOptions) -> Router {
    routes(Arc::new(ServerState::new(service, options)))
}

/// Builds the store-backed summary assembler described by `config`.
///
/// # Errors
///
/// Returns [`ServerError::Init`] when an object store cannot be configured.
pub async fn build_assembler(
    config: &DashboardSummaryConfig,
) -> Result<SummaryAssembler, ServerError> {
    let router = ObjectRouter::from_config(&config.storage)
        .await
        .map_err(|err| ServerError::Init(err.to_string()))?;
    let store = Arc::new(ObjectBackedStore::new(Arc::new(router)));
    Ok(SummaryAssembler::new(
        Arc::new(config.scopes.registry()),
        Arc::clone(&store) as Arc<dyn ConfigStore>,
        store as Arc<dyn SummaryStore>,
    ))
}

/// Registers every route on a shared state.
fn routes(state: Arc<ServerState>) -> Router {
    let max_body_bytes = state.max_body_bytes;
    Router::new()
        .route("/rpc", post(rpc::handle_rpc))
        .route("/dashboards", get(rest::list_dashboards))
        .route("/dashboards/{dashboard}/tab-summaries", get(rest::list_tab_summaries))
        .route("/dashboards/{dashboard}/tab-summaries/{tab}", get(rest::get_tab_summary))
        .route("/healthz", get(rest::health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

// ============================================================================
// SECTION: Shared State
// ============================================================================

/// Shared state for every handler.
pub(crate) struct ServerState {
    /// Service behind both transports.
    pub(crate) service: Arc<dyn TabSummaryService>,
    /// Deadline applied to every service call.
    request_timeout: Duration,
    /// Maximum accepted request body size.
    max_body_bytes: usize,
    /// Metrics sink.
    metrics: Arc<dyn SummaryMetrics>,
    /// Audit sink.
    audit: Arc<dyn AuditSink>,
    /// Counter for server-issued request identifiers.
    next_request_id: AtomicU64,
}

impl ServerState {
    /// Builds handler state from a service and options.
    pub(crate) fn new(service: Arc<dyn TabSummaryService>, options: ServerOptions) -> Self {
        Self {
            service,
            request_timeout: options.request_timeout,
            max_body_bytes: options.max_body_bytes,
            metrics: options.metrics,
            audit: options.audit,
            next_request_id: AtomicU64::new(1),
        }
    }

    /// Runs a service call under the request deadline.
    pub(crate) async fn call<T, F>(&self, future: F) -> Result<T, CallError>
    where
        F: Future<Output = Result<T, SummaryError>>,
    {
        tokio::time::timeout(self.request_timeout, future)
            .await
            .map_err(|_| CallError::DeadlineExceeded)?
            .map_err(CallError::Summary)
    }

    /// Issues a server-side request identifier.
    pub(crate) fn issue_request_id(&self) -> String {
        format!("req-{}", self.next_request_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Records one handled request in metrics and the audit log.
    pub(crate) fn record(&self, record: RequestRecord) {
        let latency = record.started.elapsed();
        let outcome =
            if record.error_kind.is_some() { SummaryOutcome::Error } else { SummaryOutcome::Ok };
        let event = SummaryMetricEvent {
            transport: record.transport,
            method: record.method,
            outcome,
            error_code: record.error_code,
            error_kind: record.error_kind,
        };
        self.metrics.record_request(event.clone());
        self.metrics.record_latency(event, latency);
        self.audit.record(&SummaryAuditEvent::new(SummaryAuditEventParams {
            request_id: record.request_id,
            transport: record.transport,
            method: record.method,
            outcome,
            http_status: record.status.as_u16(),
            error_code: record.error_code,
            error_kind: record.error_kind,
            latency_ms: latency.as_millis(),
        }));
    }
}

/// Facts about one handled request.
pub(crate) struct RequestRecord {
    /// Request identifier.
    pub(crate) request_id: String,
    /// Transport that carried the request.
    pub(crate) transport: SummaryTransport,
    /// Method classification.
    pub(crate) method: SummaryMethod,
    /// HTTP status returned.
    pub(crate) status: StatusCode,
    /// JSON-RPC error code when present.
    pub(crate) error_code: Option<i64>,
    /// Normalized error kind label when the request failed.
    pub(crate) error_kind: Option<&'static str>,
    /// When handling started.
    pub(crate) started: Instant,
}

// ============================================================================
// SECTION: Call Errors
// ============================================================================

/// Failure of a deadline-bounded service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CallError {
    /// The service reported an error.
    Summary(SummaryError),
    /// The request deadline elapsed first.
    DeadlineExceeded,
}

impl CallError {
    /// Returns a stable label for audit and metrics.
    pub(crate) const fn kind_label(&self) -> &'static str {
        match self {
            Self::Summary(err) => err.kind_label(),
            Self::DeadlineExceeded => "deadline_exceeded",
        }
    }

    /// Returns the client-facing error code.
    ///
    /// Every not-found kind collapses to `not_found`; the kind stays in
    /// [`Self::kind_label`] for audit and metrics.
    pub(crate) const fn public_code(&self) -> &'static str {
        match self {
            Self::Summary(SummaryError::NotFound {
                ..
            }) => "not_found",
            _ => self.kind_label(),
        }
    }

    /// Returns the client-facing message. Never includes internal detail.
    pub(crate) const fn public_message(&self) -> &'static str {
        match self {
            Self::Summary(SummaryError::NotFound {
                ..
            }) => "not found",
            Self::Summary(SummaryError::Unavailable(_)) => "summary unavailable",
            Self::Summary(SummaryError::InvariantViolation(_)) => "internal error",
            Self::DeadlineExceeded => "deadline exceeded",
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Summary server errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(String),
    /// Initialization errors.
    #[error("init error: {0}")]
    Init(String),
    /// Transport errors.
    #[error("transport error: {0}")]
    Transport(String),
}

// ============================================================================
// SECTION: Tests
// ============================================================================
