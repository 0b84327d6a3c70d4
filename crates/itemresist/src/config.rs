//! Driver configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `itemresist.ron` file (if exists), or the file passed with `--config`
//! 3. Environment variables prefixed with `ITEMRESIST_`
//!
//! Example environment variable: `ITEMRESIST_BLAST__DEFAULT_POWER=6.0`

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main driver configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResistConfig {
    #[serde(default)]
    pub blast: BlastConfig,

    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub debug: DebugConfig,
}

/// Explosion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlastConfig {
    /// Blast power of the built-in scenario (TNT is 4.0)
    pub default_power: f32,
    /// RNG seed; a random seed is picked when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for BlastConfig {
    fn default() -> Self {
        Self {
            default_power: 4.0,
            seed: None,
        }
    }
}

/// Where classification tags are loaded from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsConfig {
    /// Data directories, applied in order
    pub data_dirs: Vec<PathBuf>,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            data_dirs: vec![PathBuf::from("data")],
        }
    }
}

/// Debug/development settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DebugConfig {
    /// Enable verbose logging
    pub verbose_logging: bool,
}

impl ResistConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `itemresist.ron` (optional) or `path` (required)
    /// 3. Environment variables prefixed with `ITEMRESIST_` (highest priority)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).format(config::FileFormat::Ron),
            None => File::with_name("itemresist")
                .format(config::FileFormat::Ron)
                .required(false),
        };

        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("blast.default_power", 4.0)?
            .set_default("tags.data_dirs", vec!["data"])?
            .set_default("debug.verbose_logging", false)?
            // Layer 2: Config file
            .add_source(file)
            // Layer 3: Environment variables (ITEMRESIST_BLAST__SEED, etc.)
            .add_source(Environment::with_prefix("ITEMRESIST").separator("__"));

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResistConfig::default();
        assert_eq!(config.blast.default_power, 4.0);
        assert_eq!(config.blast.seed, None);
        assert_eq!(config.tags.data_dirs, vec![PathBuf::from("data")]);
        assert!(!config.debug.verbose_logging);
    }

    #[test]
    fn test_load_config_with_defaults() {
        // Should load defaults when no config file exists
        let config = ResistConfig::load(None).expect("Failed to load config");
        assert_eq!(config.blast.default_power, 4.0);
        assert_eq!(config.tags.data_dirs, vec![PathBuf::from("data")]);
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.ron");
        std::fs::write(
            &path,
            r#"(
                blast: (default_power: 6.5, seed: Some(9)),
                tags: (data_dirs: ["base", "overlay"]),
            )"#,
        )
        .unwrap();

        let config = ResistConfig::load(Some(&path)).expect("Failed to load config");
        assert_eq!(config.blast.default_power, 6.5);
        assert_eq!(config.blast.seed, Some(9));
        assert_eq!(
            config.tags.data_dirs,
            vec![PathBuf::from("base"), PathBuf::from("overlay")]
        );
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ron");
        assert!(ResistConfig::load(Some(&path)).is_err());
    }
}
