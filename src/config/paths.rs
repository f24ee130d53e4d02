use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Path configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    pub data_dir: String,
    pub output_dir: String,
    pub adapter_dir: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            output_dir: "output".to_string(),
            adapter_dir: "output/adapter".to_string(),
        }
    }
}

impl PathConfig {
    pub fn train_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("train_dataset.json")
    }

    pub fn test_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("test_dataset.json")
    }

    pub fn config_file(&self) -> PathBuf {
        PathBuf::from(&self.output_dir).join("train_config.yaml")
    }
}
