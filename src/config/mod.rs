pub mod model;
pub mod paths;
pub mod training;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use model::ModelConfig;
pub use paths::PathConfig;
pub use training::TrainingConfig;

/// Configuration handed to the external distributed trainer as YAML.
/// Pass-through only: serialized here, interpreted by the trainer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub model: ModelConfig,
    pub training: TrainingConfig,
    pub paths: PathConfig,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            training: TrainingConfig::default(),
            paths: PathConfig::default(),
            seed: 42,
        }
    }
}

impl Config {
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("failed to serialize training config to YAML")
    }

    /// Write the YAML config file the trainer will be pointed at.
    pub fn write_yaml(&self, path: &Path) -> Result<()> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml)
            .with_context(|| format!("failed to write config file: {:?}", path))?;
        Ok(())
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {:?}", path))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("invalid config file: {:?}", path))
    }
}
