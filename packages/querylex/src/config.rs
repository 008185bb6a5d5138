use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use querylex_common::CorrectionConfig;
use serde::{Serialize, Deserialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read or write config file {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("{path} does not match the configuration schema: {source}")]
    Json { path: PathBuf, source: serde_json::Error },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

fn get_default_delimiter() -> char {
    '|'
}

fn get_default_num_threads() -> usize {
    std::cmp::max(std::cmp::min(num_cpus::get_physical(), num_cpus::get()) - 1, 1)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Separates keywords in non-json vocabulary files, in addition to newlines
    #[serde(default = "get_default_delimiter")]
    pub delimiter: char,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        VocabularyConfig {
            path: None,
            delimiter: get_default_delimiter(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerylexConfig {
    #[serde(default)]
    pub correction_config: CorrectionConfig,

    #[serde(default)]
    pub vocabulary_config: VocabularyConfig,

    #[serde(default = "get_default_num_threads")]
    pub num_threads: usize,
}

impl Default for QuerylexConfig {
    fn default() -> Self {
        QuerylexConfig {
            correction_config: CorrectionConfig::default(),
            vocabulary_config: VocabularyConfig::default(),
            num_threads: get_default_num_threads(),
        }
    }
}

impl QuerylexConfig {
    /// Reads and validates the config file, falling back to the defaults if there is none.
    pub fn load(config_file_path: &Path) -> Result<QuerylexConfig> {
        if !config_file_path.is_file() {
            info!("No config file at {}, using the defaults", config_file_path.display());
            return Ok(QuerylexConfig::default());
        }

        let raw_config = fs::read_to_string(config_file_path).map_err(|source| ConfigError::Io {
            path: config_file_path.to_path_buf(),
            source,
        })?;

        let config = QuerylexConfig::from_json(&raw_config).map_err(|source| ConfigError::Json {
            path: config_file_path.to_path_buf(),
            source,
        })?;

        config.validate()?;

        Ok(config)
    }

    pub fn from_json(raw_config: &str) -> std::result::Result<QuerylexConfig, serde_json::Error> {
        serde_json::from_str(raw_config)
    }

    pub fn validate(&self) -> Result<()> {
        let penalty = self.correction_config.lexical_penalty_percentage;
        if !penalty.is_finite() || penalty < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "lexical_penalty_percentage must be a non-negative number, got {}",
                penalty,
            )));
        }

        let eps = self.correction_config.eps;
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ConfigError::Invalid(format!("eps must be a positive number, got {}", eps)));
        }

        if self.num_threads == 0 {
            return Err(ConfigError::Invalid("num_threads must be at least 1".to_owned()));
        }

        Ok(())
    }

    pub fn write_config(&self, config_file_path: &Path) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: config_file_path.to_path_buf(),
            source,
        })?;

        fs::write(config_file_path, serialized).map_err(|source| ConfigError::Io {
            path: config_file_path.to_path_buf(),
            source,
        })
    }

    /// Writes the default config, replacing whatever is at the path.
    pub fn init_config_file(config_file_path: &Path) -> Result<()> {
        QuerylexConfig::default().write_config(config_file_path)
    }
}
