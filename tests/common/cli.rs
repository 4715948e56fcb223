//! Runs the compiled `dither-png` binary.

use std::path::Path;
use std::process::Command;

pub struct CliOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Run the binary in `cwd` with `args`, without inheriting CONFIG_FILE
pub fn run_cli(cwd: &Path, args: &[&str]) -> CliOutput {
    run_cli_with_env(cwd, args, &[])
}

/// Run the binary with extra environment variables set on top of a clean
/// CONFIG_FILE and RUST_LOG
pub fn run_cli_with_env(cwd: &Path, args: &[&str], env: &[(&str, &str)]) -> CliOutput {
    let output = Command::new(env!("CARGO_BIN_EXE_dither-png"))
        .current_dir(cwd)
        .args(args)
        .env_remove("CONFIG_FILE")
        .env_remove("RUST_LOG")
        .envs(env.iter().copied())
        .output()
        .expect("failed to spawn dither-png");
    CliOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
