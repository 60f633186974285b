//! Minimal configuration loading for cadenza.
//!
//! # Config File Locations
//!
//! Files are loaded in order (later wins):
//! 1. `/etc/cadenza/config.toml` (system)
//! 2. `~/.config/cadenza/config.toml` (user)
//! 3. `./cadenza.toml` (local override)
//! 4. Environment variables (`CADENZA_*`)
//!
//! # Example Config
//!
//! ```toml
//! [llm]
//! base_url = "https://generativelanguage.googleapis.com/v1"
//! model = "gemini-1.5-flash"
//! api_key = "..."
//! timeout_secs = 25
//! temperature = 0.8
//! max_output_tokens = 400
//!
//! [telemetry]
//! log_level = "info"
//! ```

pub mod loader;

pub use loader::ConfigSources;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Settings for the generative-model endpoint used by assisted generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of the generateContent-style API.
    pub base_url: String,

    /// Model name appended to the base URL.
    pub model: String,

    /// API key. Optional so the rule-based path works with no setup.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Client-side timeout for the single request. No retries.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

fn default_timeout_secs() -> u64 {
    25
}

fn default_temperature() -> f32 {
    0.8
}

fn default_max_output_tokens() -> u32 {
    400
}

impl Default for LlmConfig {
    fn default() -> Self {
        LlmConfig {
            base_url: "https://generativelanguage.googleapis.com/v1".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        TelemetryConfig {
            log_level: default_log_level(),
        }
    }
}

/// Complete cadenza configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CadenzaConfig {
    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl CadenzaConfig {
    /// Load configuration from all standard sources.
    pub fn load() -> Result<Self, ConfigError> {
        let (config, _sources) = Self::load_with_sources_from(None)?;
        Ok(config)
    }

    /// Load configuration with a CLI-provided file taking precedence over
    /// the local `./cadenza.toml` override.
    pub fn load_from(config_path: Option<&std::path::Path>) -> Result<Self, ConfigError> {
        let (config, _sources) = Self::load_with_sources_from(config_path)?;
        Ok(config)
    }

    /// Load configuration and report where values came from.
    pub fn load_with_sources_from(
        config_path: Option<&std::path::Path>,
    ) -> Result<(Self, ConfigSources), ConfigError> {
        let mut sources = ConfigSources::default();
        let mut config = CadenzaConfig::default();

        for path in loader::discover_config_files(config_path) {
            let file_config = loader::load_from_file(&path)?;
            config = loader::merge_configs(config, file_config);
            sources.files.push(path);
        }

        loader::apply_env_overrides(&mut config, &mut sources);

        Ok((config, sources))
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> String {
        let mut output = String::new();

        output.push_str("# Cadenza Configuration\n\n");

        output.push_str("[llm]\n");
        output.push_str(&format!("base_url = \"{}\"\n", self.llm.base_url));
        output.push_str(&format!("model = \"{}\"\n", self.llm.model));
        match &self.llm.api_key {
            Some(key) => output.push_str(&format!("api_key = \"{}\"\n", key)),
            None => output.push_str("# api_key = \"...\"\n"),
        }
        output.push_str(&format!("timeout_secs = {}\n", self.llm.timeout_secs));
        output.push_str(&format!("temperature = {}\n", self.llm.temperature));
        output.push_str(&format!(
            "max_output_tokens = {}\n",
            self.llm.max_output_tokens
        ));

        output.push_str("\n[telemetry]\n");
        output.push_str(&format!("log_level = \"{}\"\n", self.telemetry.log_level));

        output
    }
}
