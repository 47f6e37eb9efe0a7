// crates/dashboard-summary-config/src/lib.rs
// ============================================================================
// Module: Dashboard Summary Config Library
// Description: Canonical config model, validation, and example generation.
// Purpose: Single source of truth for dashboard-summary.toml semantics.
// Dependencies: dashboard-summary-core, serde, toml
// ============================================================================

//! ## Overview
//! `dashboard-summary-config` defines the configuration model for the
//! dashboard summary service: server transport settings, the scope registry,
//! and the storage backends that serve each location scheme. Validation is
//! strict and fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
