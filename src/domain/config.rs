//! Application configuration loaded from `logoforge.toml`.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::domain::error::AppError;
use crate::domain::generation::OutputFormat;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "logoforge.toml";

/// Environment variable used to prefill the credential prompt.
pub const API_KEY_ENV: &str = "RUNWARE_API_KEY";

/// Full application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Generation run settings.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Runware API settings.
    #[serde(default)]
    pub runware: RunwareApiConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist; the default `logoforge.toml` is optional
    /// and falls back to defaults when absent.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(explicit) => {
                if !explicit.is_file() {
                    return Err(AppError::ConfigFileMissing(explicit.display().to_string()));
                }
                Self::from_file(explicit)
            }
            None => {
                let default = Path::new(CONFIG_FILE);
                if default.is_file() { Self::from_file(default) } else { Ok(Self::default()) }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Generation run settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Number of logos per run.
    #[serde(default = "default_desired_count")]
    pub desired_count: usize,
    /// Output format for every image.
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { desired_count: default_desired_count(), output_format: OutputFormat::default() }
    }
}

impl GenerationConfig {
    /// Desired count clamped to the supported 1..=4 range.
    pub fn effective_count(&self) -> usize {
        self.desired_count.clamp(1, 4)
    }
}

fn default_desired_count() -> usize {
    2
}

/// Runware API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RunwareApiConfig {
    /// Runware API endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for RunwareApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.runware.ai/v1").expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    60
}

/// Read the API key from the environment, ignoring blank values.
pub fn credential_from_env() -> Option<String> {
    env::var(API_KEY_ENV).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn defaults_when_fields_absent() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.generation.desired_count, 2);
        assert_eq!(config.generation.output_format, OutputFormat::Webp);
        assert_eq!(config.runware.api_url.as_str(), "https://api.runware.ai/v1");
        assert_eq!(config.runware.timeout_secs, 60);
    }

    #[test]
    fn parses_partial_overrides() {
        let config: AppConfig = toml::from_str(
            r#"
[generation]
desired_count = 3
output_format = "PNG"

[runware]
timeout_secs = 10
"#,
        )
        .unwrap();
        assert_eq!(config.generation.desired_count, 3);
        assert_eq!(config.generation.output_format, OutputFormat::Png);
        assert_eq!(config.runware.timeout_secs, 10);
        assert_eq!(config.runware.api_url.as_str(), "https://api.runware.ai/v1");
    }

    #[test]
    fn effective_count_clamps_to_supported_range() {
        let mut config = GenerationConfig::default();
        config.desired_count = 0;
        assert_eq!(config.effective_count(), 1);
        config.desired_count = 9;
        assert_eq!(config.effective_count(), 4);
        config.desired_count = 3;
        assert_eq!(config.effective_count(), 3);
    }

    #[test]
    fn rejects_unknown_format() {
        let result = toml::from_str::<AppConfig>(
            r#"
[generation]
output_format = "JPEG"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn explicit_missing_config_path_errors() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/logoforge.toml"))).unwrap_err();
        assert!(matches!(err, AppError::ConfigFileMissing(_)));
    }

    #[test]
    #[serial]
    fn credential_from_env_ignores_blank_values() {
        unsafe {
            env::set_var(API_KEY_ENV, "   ");
        }
        assert_eq!(credential_from_env(), None);

        unsafe {
            env::set_var(API_KEY_ENV, " rw-key ");
        }
        assert_eq!(credential_from_env(), Some("rw-key".to_string()));

        unsafe {
            env::remove_var(API_KEY_ENV);
        }
        assert_eq!(credential_from_env(), None);
    }
}
