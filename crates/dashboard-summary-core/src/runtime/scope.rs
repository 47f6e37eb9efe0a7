// crates/dashboard-summary-core/src/runtime/scope.rs
// ============================================================================
// Module: Scope Registry
// Description: Maps scope tokens to configuration and summary locations.
// Purpose: Select the storage locations a request targets.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A scope names the pair of storage locations a request reads from. Named
//! entries map to explicit locations; any other token is taken verbatim as a
//! base location with `config` and `summary` beneath it. The registry never
//! checks that a location exists; the resolvers discover that lazily.
//!
//! The registry is immutable after construction and is shared across requests
//! without synchronization.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Fallback scope used when no default scope is configured.
pub const DEFAULT_SCOPE: &str = "file://./data";

/// Path segment holding the configuration document under a base location.
const CONFIG_SEGMENT: &str = "config";

/// Path segment holding summary documents under a base location.
const SUMMARY_SEGMENT: &str = "summary";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Storage locations selected by a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeLocations {
    /// Location of the configuration document.
    pub config: String,
    /// Location under which summary documents live.
    pub summary: String,
}

impl ScopeLocations {
    /// Derives locations beneath a base location.
    #[must_use]
    pub fn under(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            config: format!("{base}/{CONFIG_SEGMENT}"),
            summary: format!("{base}/{SUMMARY_SEGMENT}"),
        }
    }
}

/// Explicitly registered scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeEntry {
    /// Scope name as used in requests.
    pub name: String,
    /// Configuration document location.
    pub config_location: String,
    /// Summary documents location.
    pub summary_location: String,
}

/// Immutable scope lookup table.
#[derive(Debug, Clone)]
pub struct ScopeRegistry {
    /// Token used when the request names no scope.
    default_scope: String,
    /// Named scopes.
    entries: BTreeMap<String, ScopeLocations>,
}

impl Default for ScopeRegistry {
    fn default() -> Self {
        Self::new(None, Vec::new())
    }
}

impl ScopeRegistry {
    /// Builds a registry from an optional default token and named entries.
    ///
    /// An empty default token falls back to [`DEFAULT_SCOPE`]. Later entries
    /// replace earlier entries with the same name.
    #[must_use]
    pub fn new(default_scope: Option<String>, entries: Vec<ScopeEntry>) -> Self {
        let default_scope = default_scope
            .filter(|scope| !scope.is_empty())
            .unwrap_or_else(|| DEFAULT_SCOPE.to_string());
        let entries = entries
            .into_iter()
            .map(|entry| {
                (
                    entry.name,
                    ScopeLocations {
                        config: entry.config_location,
                        summary: entry.summary_location,
                    },
                )
            })
            .collect();
        Self {
            default_scope,
            entries,
        }
    }

    /// Returns the token used when requests omit a scope.
    #[must_use]
    pub fn default_scope(&self) -> &str {
        &self.default_scope
    }

    /// Resolves a request scope token into storage locations.
    #[must_use]
    pub fn resolve(&self, token: Option<&str>) -> ScopeLocations {
        let token = match token {
            Some(token) if !token.is_empty() => token,
            _ => self.default_scope.as_str(),
        };
        self.entries.get(token).cloned().unwrap_or_else(|| ScopeLocations::under(token))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
