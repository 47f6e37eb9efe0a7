// crates/dashboard-summary-core/src/core/mod.rs
// ============================================================================
// Module: Dashboard Summary Core Types
// Description: Configuration, persisted summary, and external summary types.
// Purpose: Provide stable, serializable types shared by stores and transports.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types describe the three shapes the resolution layer works with: the
//! dashboard configuration, the persisted per-dashboard summary records, and
//! the external tab summary returned to callers. Request and response
//! envelopes for the transport adapters live in [`api`].

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod api;
pub mod config;
pub mod naming;
pub mod status;
pub mod summary;
pub mod time;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use api::DashboardEntry;
pub use api::GetTabSummaryRequest;
pub use api::GetTabSummaryResponse;
pub use api::ListDashboardsRequest;
pub use api::ListDashboardsResponse;
pub use api::ListTabSummariesRequest;
pub use api::ListTabSummariesResponse;
pub use config::Configuration;
pub use config::DashboardConfig;
pub use config::TabConfig;
pub use naming::SUMMARY_OBJECT_PREFIX;
pub use naming::canonical_name;
pub use naming::names_match;
pub use naming::summary_object_path;
pub use status::OverallStatus;
pub use status::StatusError;
pub use status::project_status;
pub use summary::DashboardSummary;
pub use summary::TabSummary;
pub use summary::TabSummaryRecord;
pub use time::EpochSeconds;
pub use time::MAX_EPOCH_SECONDS;
pub use time::NANOS_PER_SECOND;
pub use time::TimestampError;
pub use time::Timestamp;
pub use time::normalize;
