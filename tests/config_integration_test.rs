//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` so they do not
//! interfere with each other.

use scribe::config::{load_config, load_config_or_default, FailurePolicy};
use scribe::domain::ScribeError;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("SCRIBE_APPLICATION_LOG_LEVEL");
    std::env::remove_var("SCRIBE_NOTION_API_KEY");
    std::env::remove_var("SCRIBE_NOTION_DATABASE_ID");
    std::env::remove_var("SCRIBE_EXPORT_OUTPUT_DIR");
    std::env::remove_var("SCRIBE_EXPORT_MAX_CONCURRENCY");
    std::env::remove_var("SCRIBE_EXPORT_FOLLOW_PAGINATION");
    std::env::remove_var("SCRIBE_EXPORT_FAILURE_POLICY");
    std::env::remove_var("NOTION_KEY");
    std::env::remove_var("TEST_SCRIBE_NOTION_TOKEN");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[notion]
api_key = "secret_from_file"
base_url = "https://api.notion.com/v1"
api_version = "2022-06-28"
timeout_seconds = 30
database_id = "8f2b0c6e4a1d4b7e9c3f5a2d1e0b9c8a"
page_size = 50

[export]
output_dir = "src/content/blog"
publish_property = "Ready"
file_extension = "mdx"
max_concurrency = 8
follow_pagination = false
failure_policy = "abort"
dry_run = true

[logging]
local_enabled = false
local_path = "/tmp/scribe"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(
        config.notion.api_key.as_ref().unwrap().expose_secret(),
        "secret_from_file"
    );
    assert_eq!(config.notion.timeout_seconds, 30);
    assert_eq!(config.notion.database_id, "8f2b0c6e4a1d4b7e9c3f5a2d1e0b9c8a");
    assert_eq!(config.notion.page_size, 50);
    assert_eq!(config.export.output_dir, "src/content/blog");
    assert_eq!(config.export.publish_property, "Ready");
    assert_eq!(config.export.file_extension, "mdx");
    assert_eq!(config.export.max_concurrency, 8);
    assert!(!config.export.follow_pagination);
    assert_eq!(config.export.failure_policy, FailurePolicy::Abort);
    assert!(config.export.dry_run);
    assert_eq!(config.logging.local_rotation, "hourly");
    assert!(config.validate_for_export().is_ok());
}

#[test]
fn test_load_minimal_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[notion]\ndatabase_id = \"db1\"\n");
    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert!(config.notion.api_key.is_none());
    assert_eq!(config.notion.base_url, "https://api.notion.com/v1");
    assert_eq!(config.notion.page_size, 100);
    assert_eq!(config.export.output_dir, "./");
    assert_eq!(config.export.publish_property, "Publish");
    assert_eq!(config.export.max_concurrency, 0);
    assert!(config.export.follow_pagination);
    assert_eq!(config.export.failure_policy, FailurePolicy::Isolate);
    assert!(!config.export.dry_run);

    // No API key anywhere
    assert!(config.validate_for_export().is_err());
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_SCRIBE_NOTION_TOKEN", "secret_substituted");

    let temp_file = write_config(
        r#"
[notion]
# token comes from the environment: ${NOT_SUBSTITUTED_IN_COMMENTS}
api_key = "${TEST_SCRIBE_NOTION_TOKEN}"
database_id = "db1"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(
        config.notion.api_key.as_ref().unwrap().expose_secret(),
        "secret_substituted"
    );

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable_fails() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[notion]\napi_key = \"${TEST_SCRIBE_NOTION_TOKEN}\"\n");

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, ScribeError::Configuration(_)));
    assert!(err.to_string().contains("TEST_SCRIBE_NOTION_TOKEN"));
}

#[test]
fn test_env_overrides_take_precedence_over_file() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("SCRIBE_NOTION_DATABASE_ID", "db-from-env");
    std::env::set_var("SCRIBE_EXPORT_OUTPUT_DIR", "posts-from-env");
    std::env::set_var("SCRIBE_EXPORT_MAX_CONCURRENCY", "3");
    std::env::set_var("SCRIBE_EXPORT_FOLLOW_PAGINATION", "false");
    std::env::set_var("SCRIBE_EXPORT_FAILURE_POLICY", "abort");

    let temp_file = write_config(
        r#"
[notion]
database_id = "db-from-file"

[export]
output_dir = "posts-from-file"
max_concurrency = 10
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.notion.database_id, "db-from-env");
    assert_eq!(config.export.output_dir, "posts-from-env");
    assert_eq!(config.export.max_concurrency, 3);
    assert!(!config.export.follow_pagination);
    assert_eq!(config.export.failure_policy, FailurePolicy::Abort);

    cleanup_env_vars();
}

#[test]
fn test_invalid_failure_policy_override_fails() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("SCRIBE_EXPORT_FAILURE_POLICY", "sometimes");

    let temp_file = write_config("");
    let result = load_config(temp_file.path());
    assert!(matches!(result, Err(ScribeError::Configuration(_))));

    cleanup_env_vars();
}

#[test]
fn test_notion_key_fills_missing_api_key() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("NOTION_KEY", "secret_from_notion_key");

    let dir = tempfile::TempDir::new().unwrap();
    let config = load_config_or_default(dir.path().join("scribe.toml")).unwrap();
    assert_eq!(
        config.notion.api_key.as_ref().unwrap().expose_secret(),
        "secret_from_notion_key"
    );

    cleanup_env_vars();
}

#[test]
fn test_file_api_key_wins_over_notion_key() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("NOTION_KEY", "secret_from_notion_key");

    let temp_file = write_config("[notion]\napi_key = \"secret_from_file\"\n");
    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(
        config.notion.api_key.as_ref().unwrap().expose_secret(),
        "secret_from_file"
    );

    cleanup_env_vars();
}

#[test]
fn test_invalid_config_values() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    for contents in [
        "[application]\nlog_level = \"loud\"\n",
        "[notion]\nbase_url = \"ftp://api.notion.com\"\n",
        "[notion]\npage_size = 0\n",
        "[export]\nfile_extension = \".md\"\n",
        "[export]\npublish_property = \"\"\n",
        "[export]\nfailure_policy = \"sometimes\"\n",
        "[logging]\nlocal_rotation = \"weekly\"\n",
    ] {
        let temp_file = write_config(contents);
        assert!(
            load_config(temp_file.path()).is_err(),
            "expected {contents:?} to be rejected"
        );
    }
}

#[test]
fn test_malformed_toml() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[notion\ndatabase_id = ");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}
