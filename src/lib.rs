//! Dataset preparation and run orchestration for chat fine-tuning
//!
//! This crate prepares instruction datasets for supervised fine-tuning of a
//! chat model and drives an external distributed-training framework (sharded
//! data parallelism with quantized low-rank adaptation). Training itself is
//! out-of-process; this crate owns the data pipeline and the glue around it.
//!
//! ## Main Components
//!
//! - `data`: conversation record schema, normalization, and JSONL persistence
//! - `config`: YAML training configuration for the external trainer
//! - `launch`: external trainer and generation process invocation

pub mod config;
pub mod data;
pub mod launch;

pub use config::Config;
pub use data::{ensure_system_turn, is_well_formed, normalize_dataset};

/// Library errors
pub use anyhow::{Error, Result};
