use serde::{Deserialize, Serialize};

/// Training hyperparameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub num_epochs: usize,
    pub batch_size: usize,
    pub gradient_accumulation_steps: usize,
    pub learning_rate: f32,
    pub lr_scheduler_type: String,
    pub warmup_steps: usize,
    pub weight_decay: f32,
    pub adam_beta1: f32,
    pub adam_beta2: f32,
    pub adam_epsilon: f32,
    pub max_grad_norm: f32,
    /// Sequence-length cap; longer examples are truncated by the trainer
    pub max_seq_length: usize,
    pub use_bf16: bool,
    pub grad_checkpoint: bool,
    pub logging_steps: usize,
    pub save_steps: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_epochs: 1,
            batch_size: 1,
            gradient_accumulation_steps: 4,
            learning_rate: 1e-4,
            lr_scheduler_type: "cosine".to_string(),
            warmup_steps: 100,
            weight_decay: 0.01,
            adam_beta1: 0.9,
            adam_beta2: 0.999,
            adam_epsilon: 1e-8,
            max_grad_norm: 1.0,
            max_seq_length: 2048,
            use_bf16: true,
            grad_checkpoint: true,
            logging_steps: 10,
            save_steps: 500,
        }
    }
}
