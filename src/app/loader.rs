//! Configuration loading
//!
//! Handles loading configuration from embedded defaults, files, and environment.

use super::config::AppConfig;
use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use std::path::Path;

/// Embedded default configuration (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

/// Load configuration from files and environment
pub fn load_config(extra: Option<&Path>) -> Result<AppConfig> {
    let mut builder = Config::builder()
        // 1. Embedded defaults (always available)
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        // 2. Local overrides (optional)
        .add_source(File::with_name("config/local").required(false));

    // 3. Explicit file from --config
    if let Some(path) = extra {
        builder = builder.add_source(File::from(path).required(true));
    }

    // 4. Environment variables (highest priority)
    // prefix_separator("_") makes FINSIGHT_LLM__PROVIDER work with a single `_`
    // after the prefix; config-rs 0.14 otherwise reuses "__".
    let config = builder
        .add_source(
            Environment::with_prefix("FINSIGHT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    config
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_defaults_parse() {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(!config.llm.enabled);
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.prompts.dir, "prompts");
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("finsight.toml");
        fs::write(
            &path,
            "[llm]\nenabled = true\nprovider = \"ollama\"\nmodel = \"qwen2.5\"\n\n[prompts]\ncustom = true\n",
        )
        .unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert!(config.llm.enabled);
        assert_eq!(config.llm.provider, "ollama");
        assert_eq!(config.llm.model, "qwen2.5");
        assert!(config.prompts.custom);
        assert_eq!(config.prompts.dir, "prompts");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_config(Some(dir.path().join("absent.toml").as_path())).is_err());
    }
}
