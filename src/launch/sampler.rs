//! Out-of-process text generation for manual inspection
//!
//! After training, held-out prompts are run through an external generation
//! command that loads the base model plus the saved adapter checkpoint.
//! Decoding lives entirely in that process.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::info;

/// Launch description for one generation call
#[derive(Debug, Clone)]
pub struct GenerateLaunch {
    /// Generation binary, e.g. "python -m generate" split at invocation
    pub program: String,
    pub model: String,
    pub adapter_dir: PathBuf,
    pub max_new_tokens: usize,
    pub temperature: f32,
}

impl GenerateLaunch {
    pub fn new(model: impl Into<String>, adapter_dir: PathBuf) -> Self {
        Self {
            program: "generate".to_string(),
            model: model.into(),
            adapter_dir,
            max_new_tokens: 256,
            temperature: 0.7,
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_sampling(mut self, max_new_tokens: usize, temperature: f32) -> Self {
        self.max_new_tokens = max_new_tokens;
        self.temperature = temperature;
        self
    }

    pub fn command(&self, prompt: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--model")
            .arg(&self.model)
            .arg("--adapter")
            .arg(&self.adapter_dir)
            .arg("--max-new-tokens")
            .arg(self.max_new_tokens.to_string())
            .arg("--temperature")
            .arg(self.temperature.to_string())
            .arg("--prompt")
            .arg(prompt);
        cmd
    }

    /// The composed command line, for --dry-run display
    pub fn command_line(&self, prompt: &str) -> String {
        format!(
            "{} --model {} --adapter {} --max-new-tokens {} --temperature {} --prompt {:?}",
            self.program,
            self.model,
            self.adapter_dir.display(),
            self.max_new_tokens,
            self.temperature,
            prompt
        )
    }

    /// Run one generation call and return its stdout
    pub fn run_capture(&self, prompt: &str) -> Result<String> {
        info!(program = %self.program, "launching generation");

        let output = self
            .command(prompt)
            .output()
            .with_context(|| format!("failed to spawn generation command: {}", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "generation process failed: {}",
                stderr.lines().next().unwrap_or("unknown error")
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
