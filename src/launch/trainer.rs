//! Out-of-process invocation of the distributed training script
//!
//! Training runs under an external launcher (torchrun-style) that spawns one
//! worker per device. This crate only composes the command line and reports
//! the child's exit status.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::info;

/// Launch description for one training run
#[derive(Debug, Clone)]
pub struct TrainerLaunch {
    /// Process launcher binary, e.g. "torchrun"
    pub launcher: String,
    /// Worker count passed as --nproc-per-node
    pub nproc_per_node: usize,
    /// Training script invoked by the launcher
    pub script: String,
    /// YAML config file the script reads
    pub config_path: PathBuf,
}

impl TrainerLaunch {
    pub fn new(nproc_per_node: usize, config_path: PathBuf) -> Self {
        Self {
            launcher: "torchrun".to_string(),
            nproc_per_node,
            script: "finetune_distributed.py".to_string(),
            config_path,
        }
    }

    pub fn with_launcher(mut self, launcher: impl Into<String>) -> Self {
        self.launcher = launcher.into();
        self
    }

    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = script.into();
        self
    }

    /// Compose the command without running it
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.launcher);
        cmd.arg("--nproc-per-node")
            .arg(self.nproc_per_node.to_string())
            .arg(&self.script)
            .arg("--config")
            .arg(&self.config_path);
        cmd
    }

    /// The composed command line, for --dry-run display
    pub fn command_line(&self) -> String {
        format!(
            "{} --nproc-per-node {} {} --config {}",
            self.launcher,
            self.nproc_per_node,
            self.script,
            self.config_path.display()
        )
    }

    /// Run the trainer, inheriting stdio so worker logs stream through.
    /// Non-zero exit is an error; there is no retry.
    pub fn run(&self) -> Result<()> {
        info!(command = %self.command_line(), "launching trainer");

        let status = self
            .command()
            .status()
            .with_context(|| format!("failed to spawn trainer launcher: {}", self.launcher))?;

        if !status.success() {
            bail!(
                "training process exited with status {}",
                status.code().map_or("unknown".to_string(), |c| c.to_string())
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_composition() {
        let launch = TrainerLaunch::new(4, PathBuf::from("output/train_config.yaml"));
        assert_eq!(
            launch.command_line(),
            "torchrun --nproc-per-node 4 finetune_distributed.py --config output/train_config.yaml"
        );
    }

    #[test]
    fn test_launcher_and_script_overrides() {
        let launch = TrainerLaunch::new(2, PathBuf::from("cfg.yaml"))
            .with_launcher("accelerate")
            .with_script("train.py");
        let line = launch.command_line();
        assert!(line.starts_with("accelerate"));
        assert!(line.contains("train.py"));
    }
}
