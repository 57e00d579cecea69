use anyhow::{Context, Result};
use focus_core::{Config, ReaderSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::cli::CliArgs;

/// CLI configuration loaded from TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Reader defaults used when neither a flag nor the environment sets them
    #[serde(default)]
    pub reader: ReaderSettings,

    /// Style text output with ANSI colors and bold
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            reader: ReaderSettings::default(),
            color: default_color(),
        }
    }
}

impl CliConfig {
    /// Return the default config directory path: ~/.config/focus-reader/
    pub fn default_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("could not determine user config directory")?
            .join("focus-reader");
        Ok(config_dir)
    }

    /// Return the default config file path.
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("config.toml"))
    }

    /// Load config from the given path, or the default path.
    /// Returns default config if the file does not exist.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            debug!(?config_path, "Loading config");
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read config: {}", config_path.display()))?;
            let config: Self = toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", config_path.display()))?;
            Ok(config)
        } else {
            debug!(?config_path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Resolve the effective reader settings.
    /// Priority: cli flags > environment > config file > defaults.
    pub fn resolve_settings(&self, env: &Config, args: &CliArgs) -> ReaderSettings {
        let mut settings = env.apply_to(self.reader);
        if let Some(size) = args.size {
            settings.chunk_size = size;
        }
        if let Some(intensity) = args.intensity {
            settings.bionic_intensity = intensity;
        }
        if args.no_bionic {
            settings.bionic_enabled = false;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use focus_core::{BionicIntensity, ChunkSize};

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["focus-reader"];
        argv.extend_from_slice(extra);
        argv.push("book.epub");
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.reader, ReaderSettings::default());
        assert!(config.color);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = CliConfig::load(path.to_str()).unwrap();
        assert_eq!(config.reader, ReaderSettings::default());
        assert!(config.color);
        assert!(!path.exists());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "color = false\n\n[reader]\nchunkSize = \"large\"\n").unwrap();

        let config = CliConfig::load(path.to_str()).unwrap();
        assert!(!config.color);
        assert_eq!(config.reader.chunk_size, ChunkSize::Large);
        assert_eq!(config.reader.bionic_intensity, BionicIntensity::default());
        assert!(config.reader.bionic_enabled);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[reader]\nchunkSize = \"huge\"\n").unwrap();
        assert!(CliConfig::load(path.to_str()).is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = CliConfig {
            reader: ReaderSettings {
                chunk_size: ChunkSize::Small,
                bionic_intensity: BionicIntensity::Strong,
                bionic_enabled: false,
            },
            color: false,
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: CliConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_resolution_order() {
        let file = CliConfig {
            reader: ReaderSettings {
                chunk_size: ChunkSize::Large,
                bionic_intensity: BionicIntensity::Light,
                bionic_enabled: true,
            },
            color: true,
        };
        let env = Config {
            bionic_intensity: Some(BionicIntensity::Medium),
            ..Config::default()
        };

        let settings = file.resolve_settings(&env, &args(&[]));
        assert_eq!(settings.chunk_size, ChunkSize::Large);
        assert_eq!(settings.bionic_intensity, BionicIntensity::Medium);

        let settings = file.resolve_settings(&env, &args(&["--intensity", "strong", "--no-bionic"]));
        assert_eq!(settings.bionic_intensity, BionicIntensity::Strong);
        assert!(!settings.bionic_enabled);
    }
}
