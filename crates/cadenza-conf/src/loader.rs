//! Config file discovery, loading, and environment variable overlay.

use crate::{CadenzaConfig, ConfigError, LlmConfig, TelemetryConfig};
use std::env;
use std::path::{Path, PathBuf};

/// Information about where config values came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Config files that were loaded (in order)
    pub files: Vec<PathBuf>,
    /// Environment variables that overrode config values
    pub env_overrides: Vec<String>,
}

/// Discover config files in standard locations.
///
/// Returns paths in load order (system, user, local/cli). Only returns
/// files that exist. A CLI-provided path replaces the local override.
pub fn discover_config_files(cli_path: Option<&Path>) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let system = PathBuf::from("/etc/cadenza/config.toml");
    if system.exists() {
        files.push(system);
    }

    if let Some(config_dir) = directories::BaseDirs::new().map(|d| d.config_dir().to_path_buf()) {
        let user = config_dir.join("cadenza/config.toml");
        if user.exists() {
            files.push(user);
        }
    }

    if let Some(path) = cli_path {
        if path.exists() {
            files.push(path.to_path_buf());
            return files;
        }
    }

    let local = PathBuf::from("cadenza.toml");
    if local.exists() {
        files.push(local);
    }

    files
}

/// Load config from a TOML file.
pub fn load_from_file(path: &Path) -> Result<CadenzaConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Merge two configs, with `overlay` winning wherever it differs from the
/// compiled defaults.
pub fn merge_configs(base: CadenzaConfig, overlay: CadenzaConfig) -> CadenzaConfig {
    let llm_default = LlmConfig::default();
    let telemetry_default = TelemetryConfig::default();

    CadenzaConfig {
        llm: LlmConfig {
            base_url: if overlay.llm.base_url != llm_default.base_url {
                overlay.llm.base_url
            } else {
                base.llm.base_url
            },
            model: if overlay.llm.model != llm_default.model {
                overlay.llm.model
            } else {
                base.llm.model
            },
            api_key: overlay.llm.api_key.or(base.llm.api_key),
            timeout_secs: if overlay.llm.timeout_secs != llm_default.timeout_secs {
                overlay.llm.timeout_secs
            } else {
                base.llm.timeout_secs
            },
            temperature: if overlay.llm.temperature != llm_default.temperature {
                overlay.llm.temperature
            } else {
                base.llm.temperature
            },
            max_output_tokens: if overlay.llm.max_output_tokens != llm_default.max_output_tokens {
                overlay.llm.max_output_tokens
            } else {
                base.llm.max_output_tokens
            },
        },
        telemetry: TelemetryConfig {
            log_level: if overlay.telemetry.log_level != telemetry_default.log_level {
                overlay.telemetry.log_level
            } else {
                base.telemetry.log_level
            },
        },
    }
}

/// Apply environment variable overrides to config.
pub fn apply_env_overrides(config: &mut CadenzaConfig, sources: &mut ConfigSources) {
    if let Ok(v) = env::var("CADENZA_LLM_URL") {
        config.llm.base_url = v;
        sources.env_overrides.push("CADENZA_LLM_URL".to_string());
    }
    if let Ok(v) = env::var("CADENZA_MODEL") {
        config.llm.model = v;
        sources.env_overrides.push("CADENZA_MODEL".to_string());
    }
    if let Ok(v) = env::var("CADENZA_API_KEY") {
        config.llm.api_key = Some(v);
        sources.env_overrides.push("CADENZA_API_KEY".to_string());
    }
    if let Ok(v) = env::var("CADENZA_TIMEOUT_SECS") {
        if let Ok(secs) = v.parse() {
            config.llm.timeout_secs = secs;
            sources.env_overrides.push("CADENZA_TIMEOUT_SECS".to_string());
        }
    }
    if let Ok(v) = env::var("CADENZA_LOG_LEVEL") {
        config.telemetry.log_level = v;
        sources.env_overrides.push("CADENZA_LOG_LEVEL".to_string());
    }
    // Also support RUST_LOG
    if let Ok(v) = env::var("RUST_LOG") {
        config.telemetry.log_level = v;
        sources.env_overrides.push("RUST_LOG".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_minimal_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[llm]
model = "gemini-2.0-flash"
"#
        )
        .unwrap();

        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        // Untouched values keep their defaults.
        assert_eq!(config.llm.timeout_secs, 25);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn parse_full_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[llm]
base_url = "http://localhost:9000/v1"
model = "local-model"
api_key = "secret"
timeout_secs = 5
temperature = 0.5
max_output_tokens = 128

[telemetry]
log_level = "debug"
"#
        )
        .unwrap();

        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.llm.base_url, "http://localhost:9000/v1");
        assert_eq!(config.llm.api_key.as_deref(), Some("secret"));
        assert_eq!(config.llm.timeout_secs, 5);
        assert_eq!(config.telemetry.log_level, "debug");
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not toml at all [[[").unwrap();

        let err = load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn merge_prefers_overlay_when_changed() {
        let base = CadenzaConfig {
            llm: LlmConfig {
                model: "base-model".to_string(),
                api_key: Some("base-key".to_string()),
                ..LlmConfig::default()
            },
            ..CadenzaConfig::default()
        };
        let overlay = CadenzaConfig {
            llm: LlmConfig {
                timeout_secs: 10,
                ..LlmConfig::default()
            },
            ..CadenzaConfig::default()
        };

        let merged = merge_configs(base, overlay);
        assert_eq!(merged.llm.model, "base-model");
        assert_eq!(merged.llm.api_key.as_deref(), Some("base-key"));
        assert_eq!(merged.llm.timeout_secs, 10);
    }

    #[test]
    fn discover_does_not_panic() {
        let _files = discover_config_files(None);
    }

    // All env vars in one test so the set/remove window is a single
    // sequential block.
    #[test]
    fn env_overrides_apply_and_are_recorded() {
        env::set_var("CADENZA_MODEL", "env-model");
        env::set_var("CADENZA_API_KEY", "env-key");
        env::set_var("CADENZA_TIMEOUT_SECS", "not a number");
        env::set_var("CADENZA_LOG_LEVEL", "warn");
        env::set_var("RUST_LOG", "cadenza=trace");

        let mut config = CadenzaConfig::default();
        let mut sources = ConfigSources::default();
        apply_env_overrides(&mut config, &mut sources);

        env::remove_var("CADENZA_MODEL");
        env::remove_var("CADENZA_API_KEY");
        env::remove_var("CADENZA_TIMEOUT_SECS");
        env::remove_var("CADENZA_LOG_LEVEL");
        env::remove_var("RUST_LOG");

        assert_eq!(config.llm.model, "env-model");
        assert_eq!(config.llm.api_key.as_deref(), Some("env-key"));
        // Unparseable timeout is ignored and not recorded.
        assert_eq!(config.llm.timeout_secs, LlmConfig::default().timeout_secs);
        // RUST_LOG is applied after CADENZA_LOG_LEVEL and wins.
        assert_eq!(config.telemetry.log_level, "cadenza=trace");

        let recorded: Vec<&str> = sources.env_overrides.iter().map(String::as_str).collect();
        assert!(recorded.contains(&"CADENZA_MODEL"));
        assert!(recorded.contains(&"RUST_LOG"));
        assert!(!recorded.contains(&"CADENZA_TIMEOUT_SECS"));
    }
}
