//! CLI command implementations

use std::path::{Path, PathBuf};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use chatprep::config::Config;
use chatprep::data::{
    load_jsonl, normalize_dataset, persist, JsonlProvider, DEFAULT_SYSTEM_PROMPT,
};
use chatprep::launch::{GenerateLaunch, TrainerLaunch};

pub fn prepare(input_dir: &str, output_dir: &str, system_prompt: Option<&str>) -> Result<()> {
    let system_prompt = system_prompt.unwrap_or(DEFAULT_SYSTEM_PROMPT);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Dataset Preparation");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Input:          {}", input_dir);
    println!("  Output:         {}", output_dir);
    println!("  System prompt:  {:?}", system_prompt);
    println!();

    let provider = JsonlProvider::new(input_dir);
    let (train, test) = normalize_dataset(&provider, system_prompt)?;

    std::fs::create_dir_all(output_dir)?;
    let train_path = Path::new(output_dir).join("train_dataset.json");
    let test_path = Path::new(output_dir).join("test_dataset.json");

    persist(&train, &train_path)?;
    persist(&test, &test_path)?;

    println!("  Train records:  {} -> {:?}", train.len(), train_path);
    println!("  Test records:   {} -> {:?}", test.len(), test_path);
    println!();
    println!("✓ Dataset prepared.");

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn train(
    model: Option<String>,
    workers: usize,
    epochs: Option<usize>,
    batch_size: Option<usize>,
    lora_rank: Option<usize>,
    max_seq_length: Option<usize>,
    data_dir: String,
    output_dir: String,
    dry_run: bool,
) -> Result<()> {
    let mut config = Config::default();

    // Apply command-line overrides
    if let Some(name) = model {
        config.model.name = name;
    }
    if let Some(n) = epochs {
        config.training.num_epochs = n;
    }
    if let Some(bs) = batch_size {
        config.training.batch_size = bs;
    }
    if let Some(rank) = lora_rank {
        config.model.lora_rank = rank;
        config.model.lora_alpha = rank * 2; // Maintain scale=2.0
    }
    if let Some(len) = max_seq_length {
        config.training.max_seq_length = len;
    }
    config.paths.data_dir = data_dir;
    config.paths.output_dir = output_dir.clone();
    config.paths.adapter_dir = format!("{}/adapter", output_dir);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Training Configuration");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Model:          {}", config.model.name);
    println!("  Workers:        {}", workers);
    println!("  Epochs:         {}", config.training.num_epochs);
    println!("  Batch size:     {}", config.training.batch_size);
    println!("  LoRA rank:      {}", config.model.lora_rank);
    println!("  LoRA alpha:     {}", config.model.lora_alpha);
    println!("  Max seq length: {}", config.training.max_seq_length);
    println!("  Sharding:       {}", config.model.sharding_strategy);
    println!("  Train file:     {:?}", config.paths.train_file());
    println!("  Test file:      {:?}", config.paths.test_file());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();

    std::fs::create_dir_all(&output_dir)?;
    let config_path = config.paths.config_file();
    config.write_yaml(&config_path)?;
    println!("Config written to: {:?}", config_path);

    let launch = TrainerLaunch::new(workers, config_path);

    if dry_run {
        println!("Dry run. Trainer command:");
        println!("  {}", launch.command_line());
        return Ok(());
    }

    launch.run()?;
    println!();
    println!("✓ Training complete. Adapter saved under: {}", config.paths.adapter_dir);

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn sample(
    model: Option<String>,
    adapter_dir: String,
    test_file: String,
    count: usize,
    max_new_tokens: usize,
    temperature: f32,
    seed: u64,
    dry_run: bool,
) -> Result<()> {
    let model = model.unwrap_or_else(|| Config::default().model.name);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Held-out Sampling");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Model:          {}", model);
    println!("  Adapter:        {}", adapter_dir);
    println!("  Test file:      {}", test_file);
    println!();

    let records = load_jsonl(Path::new(&test_file))?;
    if records.is_empty() {
        anyhow::bail!("test split is empty: {}", test_file);
    }

    // Seeded selection so runs are reproducible
    let mut rng = StdRng::seed_from_u64(seed);
    let selected: Vec<_> = records
        .choose_multiple(&mut rng, count.min(records.len()))
        .collect();

    let launch = GenerateLaunch::new(model, PathBuf::from(&adapter_dir))
        .with_sampling(max_new_tokens, temperature);

    for (i, record) in selected.iter().enumerate() {
        let Some(prompt) = record.last_user_content() else {
            println!("[{}/{}] skipped: record has no user turn", i + 1, selected.len());
            continue;
        };

        println!("[{}/{}] Prompt: {}", i + 1, selected.len(), prompt);

        if dry_run {
            println!("  Command: {}", launch.command_line(prompt));
            println!();
            continue;
        }

        let output = launch.run_capture(prompt)?;
        println!("  Generated: {}", output.trim_end());
        println!();
    }

    Ok(())
}
