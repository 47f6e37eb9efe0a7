// crates/dashboard-summary-core/src/core/config.rs
// ============================================================================
// Module: Dashboard Configuration Model
// Description: Persisted dashboard and tab configuration entries.
// Purpose: Describe which dashboards exist in a scope and their tab order.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Configuration is authored and validated upstream; this layer only reads it.
//! Dashboard names are unique within a scope when compared through
//! [`crate::canonical_name`]. Tab order is significant: list responses follow
//! the declared order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::naming::names_match;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration document stored at a scope's config location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Dashboards in declaration order.
    #[serde(default)]
    pub dashboards: Vec<DashboardConfig>,
}

impl Configuration {
    /// Returns the dashboard whose name matches `name` case-insensitively.
    #[must_use]
    pub fn dashboard(&self, name: &str) -> Option<&DashboardConfig> {
        self.dashboards.iter().find(|dashboard| names_match(&dashboard.name, name))
    }
}

/// A configured dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Dashboard name as authored (canonical case).
    pub name: String,
    /// Tabs in declaration order.
    #[serde(default)]
    pub dashboard_tab: Vec<TabConfig>,
}

impl DashboardConfig {
    /// Returns the tab whose name matches `name` case-insensitively.
    #[must_use]
    pub fn tab(&self, name: &str) -> Option<&TabConfig> {
        self.dashboard_tab.iter().find(|tab| names_match(&tab.name, name))
    }
}

/// A configured dashboard tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabConfig {
    /// Tab name as authored.
    pub name: String,
    /// Test group backing the tab.
    #[serde(default)]
    pub test_group_name: String,
}
