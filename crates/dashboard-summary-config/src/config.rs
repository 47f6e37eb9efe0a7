// crates/dashboard-summary-config/src/config.rs
// ============================================================================
// Module: Dashboard Summary Configuration
// Description: Configuration loading and validation for the summary service.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: dashboard-summary-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section has defaults, so an empty file is a valid configuration that
//! serves the built-in scope from the local filesystem. Anything present but
//! malformed fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use dashboard_summary_core::ScopeEntry;
use dashboard_summary_core::ScopeRegistry;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "dashboard-summary.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "DASHBOARD_SUMMARY_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default HTTP bind address.
pub(crate) const DEFAULT_BIND: &str = "127.0.0.1:8080";
/// Minimum per-request deadline in milliseconds.
pub(crate) const MIN_REQUEST_TIMEOUT_MS: u64 = 100;
/// Maximum per-request deadline in milliseconds.
pub(crate) const MAX_REQUEST_TIMEOUT_MS: u64 = 60_000;
/// Largest accepted `storage.max_object_bytes`.
pub(crate) const MAX_OBJECT_BYTES_LIMIT: usize = 256 * 1024 * 1024;
/// Maximum number of named scopes.
pub(crate) const MAX_SCOPE_ENTRIES: usize = 256;
/// Maximum length of a scope name or location.
pub(crate) const MAX_LOCATION_LENGTH: usize = 2048;
/// Scheme reserved for the local filesystem.
pub const FILE_SCHEME: &str = "file";

// ============================================================================
// SECTION: Root Config
// ============================================================================

/// Root configuration for the dashboard summary service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardSummaryConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Scope registry configuration.
    #[serde(default)]
    pub scopes: ScopesConfig,
    /// Storage backend configuration.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl DashboardSummaryConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.scopes.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Server
// ============================================================================

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP listener.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Maximum request body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Per-request deadline in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Audit logging configuration.
    #[serde(default)]
    pub audit: ServerAuditConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_body_bytes: default_max_body_bytes(),
            request_timeout_ms: default_request_timeout_ms(),
            audit: ServerAuditConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Parses the bind address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the address does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid("server.bind must be a socket address".to_string()))
    }

    /// Validates server configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.bind.trim().is_empty() {
            return Err(ConfigError::Invalid("server.bind must be set".to_string()));
        }
        self.bind_addr()?;
        if self.max_body_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_body_bytes must be greater than zero".to_string(),
            ));
        }
        if !(MIN_REQUEST_TIMEOUT_MS ..= MAX_REQUEST_TIMEOUT_MS).contains(&self.request_timeout_ms) {
            return Err(ConfigError::Invalid(format!(
                "request_timeout_ms must be between {MIN_REQUEST_TIMEOUT_MS} and \
                 {MAX_REQUEST_TIMEOUT_MS}"
            )));
        }
        self.audit.validate()
    }
}

/// Audit logging configuration for server requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerAuditConfig {
    /// Enable structured audit logging.
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,
    /// Optional audit log path (JSON lines). Stderr when unset.
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for ServerAuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            path: None,
        }
    }
}

impl ServerAuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            validate_path_string("audit.path", path)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Scopes
// ============================================================================

/// Scope registry configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScopesConfig {
    /// Scope token used when requests name none.
    #[serde(default)]
    pub default: Option<String>,
    /// Named scopes with explicit locations.
    #[serde(default)]
    pub entries: Vec<ScopeEntry>,
}

impl ScopesConfig {
    /// Builds the immutable scope registry.
    #[must_use]
    pub fn registry(&self) -> ScopeRegistry {
        ScopeRegistry::new(self.default.clone(), self.entries.clone())
    }

    /// Validates scope configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(default) = &self.default {
            validate_location("scopes.default", default)?;
        }
        if self.entries.len() > MAX_SCOPE_ENTRIES {
            return Err(ConfigError::Invalid(format!(
                "scopes.entries exceeds {MAX_SCOPE_ENTRIES} entries"
            )));
        }
        let mut names = BTreeSet::new();
        for entry in &self.entries {
            validate_location("scopes.entries.name", &entry.name)?;
            validate_location("scopes.entries.config_location", &entry.config_location)?;
            validate_location("scopes.entries.summary_location", &entry.summary_location)?;
            if !names.insert(entry.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate scope name: {}",
                    entry.name
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Storage
// ============================================================================

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Maximum size of a single configuration or summary object.
    #[serde(default = "default_max_object_bytes")]
    pub max_object_bytes: usize,
    /// Object stores keyed by location scheme.
    #[serde(default)]
    pub object_stores: Vec<ObjectStoreConfig>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_object_bytes: default_max_object_bytes(),
            object_stores: Vec::new(),
        }
    }
}

impl StorageConfig {
    /// Returns the object store serving `scheme`, if any.
    #[must_use]
    pub fn object_store(&self, scheme: &str) -> Option<&ObjectStoreConfig> {
        self.object_stores.iter().find(|store| store.scheme == scheme)
    }

    /// Validates storage configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_object_bytes == 0 || self.max_object_bytes > MAX_OBJECT_BYTES_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "storage.max_object_bytes must be between 1 and {MAX_OBJECT_BYTES_LIMIT}"
            )));
        }
        let mut schemes = BTreeSet::new();
        for store in &self.object_stores {
            store.validate()?;
            if !schemes.insert(store.scheme.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate object store scheme: {}",
                    store.scheme
                )));
            }
        }
        Ok(())
    }
}

/// Supported object-store providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectStoreProvider {
    /// Amazon S3 compatible object storage.
    S3,
}

/// Object store serving one location scheme.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectStoreConfig {
    /// Location scheme routed to this store (`s3`, `gs`, ...).
    pub scheme: String,
    /// Provider selection for the object store.
    pub provider: ObjectStoreProvider,
    /// Optional region (defaults to environment).
    #[serde(default)]
    pub region: Option<String>,
    /// Optional object-store endpoint (S3-compatible).
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Force path-style addressing (S3-compatible).
    #[serde(default)]
    pub force_path_style: bool,
    /// Allow non-TLS endpoints (explicit opt-in).
    #[serde(default)]
    pub allow_http: bool,
}

impl ObjectStoreConfig {
    /// Validates object-store configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when object-store settings are invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scheme = self.scheme.as_str();
        if scheme.is_empty() || !scheme.chars().all(is_scheme_char) {
            return Err(ConfigError::Invalid(
                "object_stores.scheme must be a lowercase uri scheme".to_string(),
            ));
        }
        if scheme == FILE_SCHEME {
            return Err(ConfigError::Invalid(
                "object_stores.scheme must not be the reserved file scheme".to_string(),
            ));
        }
        if let Some(endpoint) = &self.endpoint {
            let trimmed = endpoint.trim();
            if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
                return Err(ConfigError::Invalid(
                    "object_stores.endpoint must include http:// or https://".to_string(),
                ));
            }
            if trimmed.starts_with("http://") && !self.allow_http {
                return Err(ConfigError::Invalid(
                    "object_stores.endpoint uses http:// without allow_http".to_string(),
                ));
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates a scope name or storage location.
fn validate_location(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if value.len() > MAX_LOCATION_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    if value.chars().any(char::is_control) {
        return Err(ConfigError::Invalid(format!("{field} must not contain control characters")));
    }
    Ok(())
}

/// Returns true for characters allowed in a configured scheme.
const fn is_scheme_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '+' || ch == '-'
}

/// Default HTTP bind address.
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

/// Default maximum request body size in bytes.
pub(crate) const fn default_max_body_bytes() -> usize {
    1024 * 1024
}

/// Default per-request deadline in milliseconds.
pub(crate) const fn default_request_timeout_ms() -> u64 {
    10_000
}

/// Default audit logging toggle.
pub(crate) const fn default_audit_enabled() -> bool {
    true
}

/// Default maximum object size in bytes.
pub(crate) const fn default_max_object_bytes() -> usize {
    16 * 1024 * 1024
}

// ============================================================================
// SECTION: Tests
// ============================================================================
