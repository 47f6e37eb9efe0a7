//! Section validation tests for dashboard-summary-config.
// crates/dashboard-summary-config/tests/config_validation.rs
// =============================================================================
// Module: Config Section Validation Tests
// Description: Validate server, scope, and storage constraints.
// Purpose: Ensure each section fails closed on malformed settings.
// =============================================================================

use dashboard_summary_config::ConfigError;
use dashboard_summary_config::DashboardSummaryConfig;
use dashboard_summary_config::ObjectStoreProvider;
use dashboard_summary_config::config_toml_example;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<DashboardSummaryConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}

#[test]
fn example_config_is_valid() -> TestResult {
    let config =
        DashboardSummaryConfig::from_toml(&config_toml_example()).map_err(|err| err.to_string())?;
    let gs = config.storage.object_store("gs").ok_or("missing gs object store")?;
    if gs.provider != ObjectStoreProvider::S3 || !gs.force_path_style {
        return Err("gs object store not parsed".to_string());
    }
    let prod = config.scopes.registry().resolve(Some("prod"));
    if prod.config != "s3://dashboards/prod/config" {
        return Err(format!("unexpected prod config location {}", prod.config));
    }
    Ok(())
}

#[test]
fn server_rejects_unparseable_bind() -> TestResult {
    assert_invalid(
        DashboardSummaryConfig::from_toml("[server]\nbind = \"localhost\"\n"),
        "server.bind must be a socket address",
    )
}

#[test]
fn server_rejects_zero_body_limit() -> TestResult {
    assert_invalid(
        DashboardSummaryConfig::from_toml("[server]\nmax_body_bytes = 0\n"),
        "max_body_bytes must be greater than zero",
    )
}

#[test]
fn server_rejects_timeout_above_range() -> TestResult {
    assert_invalid(
        DashboardSummaryConfig::from_toml("[server]\nrequest_timeout_ms = 60001\n"),
        "request_timeout_ms must be between",
    )
}

#[test]
fn audit_rejects_empty_path() -> TestResult {
    assert_invalid(
        DashboardSummaryConfig::from_toml("[server.audit]\npath = \" \"\n"),
        "audit.path must be non-empty",
    )
}

#[test]
fn scopes_reject_duplicate_names() -> TestResult {
    let content = r#"
[[scopes.entries]]
name = "prod"
config_location = "gs://a/config"
summary_location = "gs://a/summary"

[[scopes.entries]]
name = "prod"
config_location = "gs://b/config"
summary_location = "gs://b/summary"
"#;
    assert_invalid(DashboardSummaryConfig::from_toml(content), "duplicate scope name: prod")
}

#[test]
fn scopes_reject_empty_default() -> TestResult {
    assert_invalid(
        DashboardSummaryConfig::from_toml("[scopes]\ndefault = \"\"\n"),
        "scopes.default must be non-empty",
    )
}

#[test]
fn scopes_reject_missing_locations() -> TestResult {
    let content = r#"
[[scopes.entries]]
name = "prod"
config_location = ""
summary_location = "gs://a/summary"
"#;
    assert_invalid(
        DashboardSummaryConfig::from_toml(content),
        "scopes.entries.config_location must be non-empty",
    )
}

#[test]
fn storage_rejects_zero_object_limit() -> TestResult {
    assert_invalid(
        DashboardSummaryConfig::from_toml("[storage]\nmax_object_bytes = 0\n"),
        "storage.max_object_bytes must be between",
    )
}

#[test]
fn storage_rejects_file_scheme_object_store() -> TestResult {
    let content = "[[storage.object_stores]]\nscheme = \"file\"\nprovider = \"s3\"\n";
    assert_invalid(DashboardSummaryConfig::from_toml(content), "reserved file scheme")
}

#[test]
fn storage_rejects_duplicate_schemes() -> TestResult {
    let content = r#"
[[storage.object_stores]]
scheme = "s3"
provider = "s3"

[[storage.object_stores]]
scheme = "s3"
provider = "s3"
"#;
    assert_invalid(DashboardSummaryConfig::from_toml(content), "duplicate object store scheme: s3")
}

#[test]
fn storage_rejects_http_endpoint_without_opt_in() -> TestResult {
    let content = r#"
[[storage.object_stores]]
scheme = "gs"
provider = "s3"
endpoint = "http://localhost:9000"
"#;
    assert_invalid(DashboardSummaryConfig::from_toml(content), "without allow_http")
}

#[test]
fn storage_accepts_http_endpoint_with_opt_in() -> TestResult {
    let content = r#"
[[storage.object_stores]]
scheme = "gs"
provider = "s3"
endpoint = "http://localhost:9000"
allow_http = true
"#;
    DashboardSummaryConfig::from_toml(content).map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn storage_rejects_unknown_provider() -> TestResult {
    let content = "[[storage.object_stores]]\nscheme = \"gs\"\nprovider = \"azure\"\n";
    assert_invalid(DashboardSummaryConfig::from_toml(content), "config parse error")
}
