use std::path::PathBuf;

use chatprep::launch::{GenerateLaunch, TrainerLaunch};

#[test]
fn test_trainer_command_shape() {
    let launch = TrainerLaunch::new(8, PathBuf::from("output/train_config.yaml"));
    let cmd = launch.command();

    assert_eq!(cmd.get_program(), "torchrun");
    let args: Vec<_> = cmd
        .get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        args,
        vec![
            "--nproc-per-node",
            "8",
            "finetune_distributed.py",
            "--config",
            "output/train_config.yaml",
        ]
    );
}

#[test]
fn test_trainer_spawn_failure_surfaces() {
    let launch = TrainerLaunch::new(1, PathBuf::from("cfg.yaml"))
        .with_launcher("/nonexistent/launcher-binary");

    let err = launch.run().unwrap_err();
    assert!(err.to_string().contains("failed to spawn"));
}

#[test]
fn test_generate_command_shape() {
    let launch = GenerateLaunch::new("test/model", PathBuf::from("output/adapter"))
        .with_sampling(64, 0.2);
    let cmd = launch.command("Hello");

    let args: Vec<_> = cmd
        .get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    assert!(args.windows(2).any(|w| w == ["--model", "test/model"]));
    assert!(args.windows(2).any(|w| w == ["--adapter", "output/adapter"]));
    assert!(args.windows(2).any(|w| w == ["--max-new-tokens", "64"]));
    assert!(args.windows(2).any(|w| w == ["--prompt", "Hello"]));
}

#[test]
fn test_generate_spawn_failure_surfaces() {
    let launch = GenerateLaunch::new("m", PathBuf::from("a"))
        .with_program("/nonexistent/generate-binary");

    let err = launch.run_capture("Hi").unwrap_err();
    assert!(err.to_string().contains("failed to spawn"));
}
