//! Configuration schema types
//!
//! Every section has defaults, so an empty file (or no file at all) yields a
//! usable configuration once the database id and API key are supplied.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the exporter does when a single record fails to convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Record the failure and keep converting the remaining records
    #[default]
    Isolate,
    /// Stop the run at the first failed record
    Abort,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "isolate" => Ok(FailurePolicy::Isolate),
            "abort" => Ok(FailurePolicy::Abort),
            other => Err(format!(
                "Invalid failure policy '{other}'. Must be one of: isolate, abort"
            )),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Isolate => write!(f, "isolate"),
            FailurePolicy::Abort => write!(f, "abort"),
        }
    }
}

/// Main Scribe configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScribeConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Notion API settings
    #[serde(default)]
    pub notion: NotionConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ScribeConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.notion.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Checks the settings that have no usable default
    ///
    /// Run after CLI overrides are applied, right before an export starts.
    pub fn validate_for_export(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.notion.database_id.trim().is_empty() {
            return Err(
                "notion.database_id is required (use --db or SCRIBE_NOTION_DATABASE_ID)"
                    .to_string(),
            );
        }

        match &self.notion.api_key {
            Some(key) if !key.expose_secret().is_empty() => Ok(()),
            _ => Err("notion.api_key is required (set NOTION_KEY)".to_string()),
        }
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Notion API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotionConfig {
    /// Integration token, sent as a bearer credential
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Base URL of the REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the `Notion-Version` header
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Database to export from
    #[serde(default)]
    pub database_id: String,

    /// Page size for database queries and block listings (1-100)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl NotionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("notion.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("notion.base_url must start with http:// or https://".to_string());
        }

        url::Url::parse(&self.base_url)
            .map_err(|e| format!("notion.base_url is not a valid URL: {e}"))?;

        if self.api_version.trim().is_empty() {
            return Err("notion.api_version cannot be empty".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("notion.timeout_seconds must be > 0".to_string());
        }

        if !(1..=100).contains(&self.page_size) {
            return Err(format!(
                "notion.page_size must be between 1 and 100, got {}",
                self.page_size
            ));
        }

        Ok(())
    }
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            api_version: default_api_version(),
            timeout_seconds: default_timeout_seconds(),
            database_id: String::new(),
            page_size: default_page_size(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the Markdown files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Checkbox property a page must have ticked to be exported
    #[serde(default = "default_publish_property")]
    pub publish_property: String,

    /// Extension of the written files, without the dot
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Maximum number of records converted at once (0 = one task per record, unbounded)
    #[serde(default)]
    pub max_concurrency: usize,

    /// Follow block pagination cursors; when false only the first page of
    /// blocks is exported for each record
    #[serde(default = "default_true")]
    pub follow_pagination: bool,

    /// Behaviour when a record fails to convert
    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Dry run mode - render every record but write nothing
    #[serde(default)]
    pub dry_run: bool,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }

        if self.publish_property.trim().is_empty() {
            return Err("export.publish_property cannot be empty".to_string());
        }

        if self.file_extension.is_empty() {
            return Err("export.file_extension cannot be empty".to_string());
        }

        if self.file_extension.starts_with('.') {
            return Err(format!(
                "export.file_extension must not start with a dot, got '{}'",
                self.file_extension
            ));
        }

        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            publish_property: default_publish_property(),
            file_extension: default_file_extension(),
            max_concurrency: 0,
            follow_pagination: true,
            failure_policy: FailurePolicy::default(),
            dry_run: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    "https://api.notion.com/v1".to_string()
}

fn default_api_version() -> String {
    "2022-06-28".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_page_size() -> u32 {
    100
}

fn default_output_dir() -> String {
    "./".to_string()
}

fn default_publish_property() -> String {
    "Publish".to_string()
}

fn default_file_extension() -> String {
    "md".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
