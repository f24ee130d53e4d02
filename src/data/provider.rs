//! Dataset provider boundary
//!
//! The source dataset arrives already partitioned into train and test
//! splits. Providers only fetch raw records; normalization happens
//! downstream, so tests can feed in-memory fixtures instead of files.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::jsonl::load_jsonl;
use super::record::ConversationRecord;

/// Named partition of the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Test,
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Split::Train => write!(f, "train"),
            Split::Test => write!(f, "test"),
        }
    }
}

/// Source of pre-split raw conversation records
pub trait DatasetProvider {
    fn fetch_split(&self, split: Split) -> Result<Vec<ConversationRecord>>;
}

/// Provider reading `train.jsonl` / `test.jsonl` from a directory
pub struct JsonlProvider {
    data_dir: PathBuf,
}

impl JsonlProvider {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn split_path(&self, split: Split) -> PathBuf {
        self.data_dir.join(format!("{}.jsonl", split))
    }
}

impl DatasetProvider for JsonlProvider {
    fn fetch_split(&self, split: Split) -> Result<Vec<ConversationRecord>> {
        let path = self.split_path(split);
        load_jsonl(&path).with_context(|| format!("failed to read {} split: {:?}", split, path))
    }
}

/// In-memory provider for tests and fixtures
pub struct MemoryProvider {
    pub train: Vec<ConversationRecord>,
    pub test: Vec<ConversationRecord>,
}

impl DatasetProvider for MemoryProvider {
    fn fetch_split(&self, split: Split) -> Result<Vec<ConversationRecord>> {
        Ok(match split {
            Split::Train => self.train.clone(),
            Split::Test => self.test.clone(),
        })
    }
}
