// crates/dashboard-summary-core/src/lib.rs
// ============================================================================
// Module: Dashboard Summary Core Library
// Description: Public API surface for the dashboard summary core.
// Purpose: Expose summary types, store interfaces, and the resolution runtime.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Dashboard summary core resolves pre-computed tab summaries for configured
//! dashboards. It looks up configuration and persisted summary records through
//! explicit store interfaces, joins them by tab identity, and projects them
//! into the stable external [`TabSummary`] shape. It never computes test
//! status itself.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::ConfigStore;
pub use interfaces::StoreError;
pub use interfaces::SummaryStore;
pub use runtime::ConfigResolver;
pub use runtime::DEFAULT_SCOPE;
pub use runtime::InMemoryConfigStore;
pub use runtime::InMemorySummaryStore;
pub use runtime::NotFoundKind;
pub use runtime::ScopeEntry;
pub use runtime::ScopeLocations;
pub use runtime::ScopeRegistry;
pub use runtime::SummaryAssembler;
pub use runtime::SummaryError;
pub use runtime::SummaryResolver;
pub use runtime::TabSummaryService;
