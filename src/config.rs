//! Configuration management for the skill gap analyzer

use crate::error::{Result, SkillGapError};
use crate::matching::scorer::ScorerKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub catalogs: CatalogConfig,
    pub scoring: ScoringConfig,
    pub models: ModelConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// CSV with `role,skills` rows.
    pub roles_path: PathBuf,
    /// CSV with `skill,course,url` rows.
    pub resources_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub strategy: ScorerKind,
    /// Jaro-Winkler threshold for resume typo suggestions.
    pub fuzzy_threshold: f64,
    /// Minimum confidence for classifier predictions.
    pub classifier_threshold: f64,
    /// How many ranked roles to show in reports.
    pub top_roles: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Directory holding the trained classifier artifacts.
    pub models_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        let models_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".skillgap")
            .join("models");

        Self {
            catalogs: CatalogConfig {
                roles_path: PathBuf::from("data/jobs.csv"),
                resources_path: PathBuf::from("data/resources.csv"),
            },
            scoring: ScoringConfig {
                strategy: ScorerKind::Set,
                fuzzy_threshold: 0.88,
                classifier_threshold: 0.2,
                top_roles: 5,
            },
            models: ModelConfig { models_dir },
            output: OutputConfig {
                format: OutputFormat::Console,
                color: true,
            },
        }
    }
}

impl Config {
    /// Load from the default config path, writing defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load from an explicit path; the file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            SkillGapError::Configuration(format!(
                "Failed to parse config '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            SkillGapError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skillgap")
            .join("config.toml")
    }

    pub fn models_dir(&self) -> &Path {
        &self.models.models_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_sane() {
        let config = Config::default();

        assert_eq!(config.scoring.strategy, ScorerKind::Set);
        assert!(config.scoring.fuzzy_threshold > 0.0 && config.scoring.fuzzy_threshold <= 1.0);
        assert!(config.scoring.top_roles > 0);
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.scoring.strategy, config.scoring.strategy);
        assert_eq!(parsed.output.format, config.output.format);
    }

    #[test]
    fn test_load_from_explicit_path() {
        let config = Config::default();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string_pretty(&config).unwrap().as_bytes())
            .unwrap();

        let loaded = Config::load_from(file.path()).unwrap();
        assert_eq!(loaded.catalogs.roles_path, config.catalogs.roles_path);
    }

    #[test]
    fn test_load_from_bad_toml_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not = [valid").unwrap();

        assert!(Config::load_from(file.path()).is_err());
    }
}
