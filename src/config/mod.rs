use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the CMS instance, including the scheme.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Number of items requested from the content delivery endpoint.
    #[serde(default = "default_content_take")]
    pub content_take: u32,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_api_domain() -> String {
    constants::DEFAULT_API_DOMAIN.to_string()
}

fn default_content_take() -> u32 {
    constants::DEFAULT_CONTENT_TAKE
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            content_take: default_content_take(),
            http_timeout_seconds: default_http_timeout(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `LEAGUE_API_DOMAIN` - Override API domain
    /// - `LEAGUE_LOG_FILE` - Override log file path
    /// - `LEAGUE_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `LEAGUE_CONTENT_TAKE` - Override number of items requested
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file could not be read, parsed, or validated
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Config::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads the settings stored at `path` without environment overrides,
    /// falling back to defaults when the file does not exist. Used when the
    /// settings are about to be written back.
    pub async fn load_stored_from_path(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Config::load_from_path(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Applies environment variable overrides on top of the loaded values.
    /// Unparseable numeric overrides are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Some(take) = std::env::var(env_vars::CONTENT_TAKE)
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
        {
            self.content_take = take;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_domain,
            self.content_take,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Shows built-in defaults when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let has_file = Path::new(&config_path).exists();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !has_file {
            println!("(Not created yet, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Domain:");
        println!("{}", config.api_domain);
        println!("────────────────────────────────────");
        println!("Content Items Per Request:");
        println!("{}", config.content_take);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/league_store.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist. A domain given
    /// without a scheme is stored with an `https://` prefix; an explicit
    /// `http://` scheme is kept so local CMS instances keep working.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            api_domain: normalize_api_domain(&self.api_domain),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Adds an `https://` scheme to bare domains and strips trailing slashes.
pub fn normalize_api_domain(api_domain: &str) -> String {
    let trimmed = api_domain.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
api_domain = "https://cms.example.com"
content_take = 250
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_domain, "https://cms.example.com");
        assert_eq!(config.content_take, 250);
        assert_eq!(config.http_timeout_seconds, default_http_timeout());
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
    }

    #[tokio::test]
    async fn test_config_load_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_save_keeps_http_scheme() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            api_domain: "http://localhost:64203/".to_string(),
            ..Config::default()
        };
        config.save_to_path(&config_path_str).await.unwrap();

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded.api_domain, "http://localhost:64203");
    }

    #[tokio::test]
    async fn test_config_save_adds_https_to_bare_domain() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            api_domain: "cms.example.com".to_string(),
            ..Config::default()
        };
        config.save_to_path(&config_path_str).await.unwrap();

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(
            content.contains("https://cms.example.com"),
            "Content should contain normalized domain. Content: {content}"
        );
    }

    #[tokio::test]
    async fn test_config_save_creates_directory() {
        let temp_dir = tempdir().unwrap();
        let config_dir = temp_dir.path().join("league_store");
        let config_path = config_dir.join("config.toml");
        Config::default()
            .save_to_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert!(config_dir.exists());
        assert!(config_path.exists());
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original = Config {
            api_domain: "https://cms.example.com".to_string(),
            content_take: 50,
            http_timeout_seconds: 12,
            log_file_path: Some("/custom/log/path".to_string()),
        };
        original.save_to_path(&config_path_str).await.unwrap();
        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(original, loaded);
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_domain = [\"unclosed")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[test]
    fn test_config_without_log_file_path_serialization() {
        let toml_string = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(toml_string.contains("api_domain = \"http://localhost:64203\""));
        assert!(!toml_string.contains("log_file_path"));
    }

    #[test]
    fn test_normalize_api_domain() {
        assert_eq!(normalize_api_domain("cms.example.com"), "https://cms.example.com");
        assert_eq!(
            normalize_api_domain(" https://cms.example.com/ "),
            "https://cms.example.com"
        );
        assert_eq!(
            normalize_api_domain("http://localhost:64203"),
            "http://localhost:64203"
        );
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        unsafe {
            std::env::set_var(env_vars::API_DOMAIN, "https://override.example.com");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "5");
            std::env::set_var(env_vars::CONTENT_TAKE, "not-a-number");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::API_DOMAIN);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
            std::env::remove_var(env_vars::CONTENT_TAKE);
        }

        assert_eq!(config.api_domain, "https://override.example.com");
        assert_eq!(config.http_timeout_seconds, 5);
        assert_eq!(config.content_take, default_content_take());
    }

    #[tokio::test]
    #[serial]
    async fn test_load_stored_ignores_env_overrides() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let missing = Config::load_stored_from_path(&config_path_str).await.unwrap();
        assert_eq!(missing, Config::default());

        tokio::fs::write(&config_path, "api_domain = \"https://stored.example.com\"\n")
            .await
            .unwrap();
        unsafe {
            std::env::set_var(env_vars::API_DOMAIN, "https://override.example.com");
        }
        let stored = Config::load_stored_from_path(&config_path_str).await;
        unsafe {
            std::env::remove_var(env_vars::API_DOMAIN);
        }

        assert_eq!(stored.unwrap().api_domain, "https://stored.example.com");
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("league_store"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("league_store"));
        assert!(log_dir_path.ends_with("logs"));
    }
}
