use serde::{Deserialize, Serialize};

/// Model and adapter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// HuggingFace model identifier or local path
    pub name: String,
    pub lora_rank: usize,
    pub lora_alpha: usize,
    pub lora_dropout: f32,
    pub lora_target_modules: Vec<String>,
    /// Weight quantization bits for QLoRA (4 for nf4)
    pub quantization_bits: usize,
    /// Sharding strategy name passed through to the trainer
    pub sharding_strategy: String,
    pub attention_implementation: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "meta-llama/Meta-Llama-3-8B-Instruct".to_string(),
            lora_rank: 8,
            lora_alpha: 16, // Maintain scale=2.0
            lora_dropout: 0.05,
            lora_target_modules: vec![
                "q_proj".to_string(),
                "k_proj".to_string(),
                "v_proj".to_string(),
                "o_proj".to_string(),
            ],
            quantization_bits: 4,
            sharding_strategy: "full_shard".to_string(),
            attention_implementation: "sdpa".to_string(),
        }
    }
}
