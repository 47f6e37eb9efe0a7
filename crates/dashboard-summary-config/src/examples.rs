// crates/dashboard-summary-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic starting point for operators and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example `dashboard-summary.toml`. The example must always pass
//! validation.

/// Returns a canonical example `dashboard-summary.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[server]
bind = "127.0.0.1:8080"
max_body_bytes = 1048576
request_timeout_ms = 10000

[server.audit]
enabled = true
# path = "dashboard-summary-audit.jsonl"

[scopes]
default = "file://./data"

[[scopes.entries]]
name = "prod"
config_location = "s3://dashboards/prod/config"
summary_location = "s3://dashboards/prod/summary"

[storage]
max_object_bytes = 16777216

[[storage.object_stores]]
scheme = "s3"
provider = "s3"
region = "us-east-1"
# endpoint = "https://s3.example.com"
# force_path_style = false
# allow_http = false

[[storage.object_stores]]
scheme = "gs"
provider = "s3"
endpoint = "https://storage.googleapis.com"
force_path_style = true
"#,
    )
}
