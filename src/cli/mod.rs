pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chatprep")]
#[command(about = "Dataset preparation and run orchestration for chat fine-tuning", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a pre-split raw dataset into canonical chat format
    Prepare {
        /// Directory containing raw train.jsonl / test.jsonl
        #[arg(long, default_value = "data/raw")]
        input_dir: String,
        /// Directory for train_dataset.json / test_dataset.json
        #[arg(long, default_value = "data")]
        output_dir: String,
        /// System instruction prepended to records that carry none
        #[arg(long)]
        system_prompt: Option<String>,
    },
    /// Write the training config and launch the external trainer
    Train {
        /// Model name or HuggingFace path
        #[arg(long)]
        model: Option<String>,
        /// Number of training workers (one per device)
        #[arg(long, default_value = "4")]
        workers: usize,
        /// Number of epochs
        #[arg(long)]
        epochs: Option<usize>,
        /// Batch size per worker
        #[arg(long)]
        batch_size: Option<usize>,
        /// LoRA rank
        #[arg(long)]
        lora_rank: Option<usize>,
        /// Sequence-length cap
        #[arg(long)]
        max_seq_length: Option<usize>,
        /// Directory containing the prepared dataset files
        #[arg(long, default_value = "data")]
        data_dir: String,
        /// Output directory for config, checkpoints and adapter
        #[arg(long, default_value = "output")]
        output_dir: String,
        /// Print the trainer command without running it
        #[arg(long)]
        dry_run: bool,
    },
    /// Generate from held-out test records with a trained adapter
    Sample {
        /// Model name or HuggingFace path
        #[arg(long)]
        model: Option<String>,
        /// Adapter checkpoint directory produced by training
        #[arg(long, default_value = "output/adapter")]
        adapter_dir: String,
        /// Prepared test split file
        #[arg(long, default_value = "data/test_dataset.json")]
        test_file: String,
        /// Number of held-out records to sample
        #[arg(long, default_value = "5")]
        count: usize,
        /// Maximum new tokens per generation
        #[arg(long, default_value = "256")]
        max_new_tokens: usize,
        /// Sampling temperature
        #[arg(long, default_value = "0.7")]
        temperature: f32,
        /// Seed for record selection
        #[arg(long, default_value = "42")]
        seed: u64,
        /// Print the generation commands without running them
        #[arg(long)]
        dry_run: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Prepare {
            input_dir,
            output_dir,
            system_prompt,
        } => commands::prepare(&input_dir, &output_dir, system_prompt.as_deref()),
        Commands::Train {
            model,
            workers,
            epochs,
            batch_size,
            lora_rank,
            max_seq_length,
            data_dir,
            output_dir,
            dry_run,
        } => commands::train(
            model,
            workers,
            epochs,
            batch_size,
            lora_rank,
            max_seq_length,
            data_dir,
            output_dir,
            dry_run,
        ),
        Commands::Sample {
            model,
            adapter_dir,
            test_file,
            count,
            max_new_tokens,
            temperature,
            seed,
            dry_run,
        } => commands::sample(
            model,
            adapter_dir,
            test_file,
            count,
            max_new_tokens,
            temperature,
            seed,
            dry_run,
        ),
    }
}
