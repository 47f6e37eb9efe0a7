// crates/dashboard-summary-core/src/runtime/mod.rs
// ============================================================================
// Module: Dashboard Summary Runtime
// Description: Scope resolution, resolvers, and the summary assembler.
// Purpose: Orchestrate config and summary lookups into external summaries.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The runtime owns no mutable state. [`ScopeRegistry`] is immutable after
//! construction, the resolvers wrap shared store handles, and
//! [`SummaryAssembler`] composes them per request.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod error;
pub mod resolver;
pub mod scope;
pub mod service;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::NotFoundKind;
pub use error::SummaryError;
pub use resolver::ConfigResolver;
pub use resolver::SummaryResolver;
pub use scope::DEFAULT_SCOPE;
pub use scope::ScopeEntry;
pub use scope::ScopeLocations;
pub use scope::ScopeRegistry;
pub use service::SummaryAssembler;
pub use service::TabSummaryService;
pub use store::InMemoryConfigStore;
pub use store::InMemorySummaryStore;
