//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ScribeConfig;
use super::secret::secret_string;
use crate::domain::errors::ScribeError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Environment variable holding the Notion integration token
pub const NOTION_KEY_ENV: &str = "NOTION_KEY";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ScribeConfig
/// 4. Applies environment variable overrides (SCRIBE_* prefix, then NOTION_KEY)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, a referenced
/// environment variable is unset, parsing fails or validation fails.
///
/// # Examples
///
/// ```no_run
/// use scribe::config::loader::load_config;
///
/// let config = load_config("scribe.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ScribeConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ScribeError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ScribeError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: ScribeConfig = toml::from_str(&contents)
        .map_err(|e| ScribeError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(config)
}

/// Loads configuration from `path` when the file exists, defaults otherwise
///
/// Environment overrides and validation are applied in both cases, so a
/// plain `NOTION_KEY=... scribe --db ...` run needs no file at all.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ScribeConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(
            path = %path.display(),
            "No configuration file found, using defaults"
        );
        finish(ScribeConfig::default())
    }
}

fn finish(mut config: ScribeConfig) -> Result<ScribeConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ScribeError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ScribeError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ScribeError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the SCRIBE_* prefix
///
/// Environment variables follow the pattern SCRIBE_<SECTION>_<KEY>, for
/// example SCRIBE_NOTION_DATABASE_ID or SCRIBE_EXPORT_MAX_CONCURRENCY.
/// `NOTION_KEY` fills in the API key when nothing else has set it.
fn apply_env_overrides(config: &mut ScribeConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("SCRIBE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Notion overrides
    if let Ok(val) = std::env::var("SCRIBE_NOTION_API_KEY") {
        config.notion.api_key = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("SCRIBE_NOTION_BASE_URL") {
        config.notion.base_url = val;
    }
    if let Ok(val) = std::env::var("SCRIBE_NOTION_API_VERSION") {
        config.notion.api_version = val;
    }
    if let Ok(val) = std::env::var("SCRIBE_NOTION_DATABASE_ID") {
        config.notion.database_id = val;
    }
    if let Ok(val) = std::env::var("SCRIBE_NOTION_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.notion.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("SCRIBE_NOTION_PAGE_SIZE") {
        if let Ok(size) = val.parse() {
            config.notion.page_size = size;
        }
    }

    // Export overrides
    if let Ok(val) = std::env::var("SCRIBE_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }
    if let Ok(val) = std::env::var("SCRIBE_EXPORT_PUBLISH_PROPERTY") {
        config.export.publish_property = val;
    }
    if let Ok(val) = std::env::var("SCRIBE_EXPORT_MAX_CONCURRENCY") {
        if let Ok(concurrency) = val.parse() {
            config.export.max_concurrency = concurrency;
        }
    }
    if let Ok(val) = std::env::var("SCRIBE_EXPORT_FOLLOW_PAGINATION") {
        config.export.follow_pagination = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("SCRIBE_EXPORT_FAILURE_POLICY") {
        config.export.failure_policy = val.parse().map_err(ScribeError::Configuration)?;
    }
    if let Ok(val) = std::env::var("SCRIBE_EXPORT_DRY_RUN") {
        config.export.dry_run = val.parse().unwrap_or(false);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SCRIBE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SCRIBE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    if config.notion.api_key.is_none() {
        if let Ok(val) = std::env::var(NOTION_KEY_ENV) {
            config.notion.api_key = Some(secret_string(val));
        }
    }

    Ok(())
}
