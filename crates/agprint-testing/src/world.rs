//! TestWorld pattern for CLI integration tests.
//!
//! Each world owns a temp directory for input files and fixes the render
//! environment (width, color) so output is deterministic.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Render width used unless a test overrides it.
pub const DEFAULT_TEST_WIDTH: usize = 40;

/// Isolated environment for running the `agprint` binary.
///
/// # Example
/// ```no_run
/// use agprint_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new();
/// let input = fixtures::to_jsonl(&[fixtures::user_text("hi")]);
/// let result = world.run_with_stdin(&[], &input).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    width: usize,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            width: DEFAULT_TEST_WIDTH,
            env_vars: HashMap::new(),
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `content` to `name` inside the temp directory.
    pub fn write_input(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Configure a CLI command with this environment's settings.
    ///
    /// The caller provides the base command (e.g. from `cargo_bin_cmd!("agprint")`).
    /// Color is forced off and the width pinned; explicit `with_env` values
    /// are applied last and win.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.temp_dir.path())
            .env("AGPRINT_WIDTH", self.width.to_string())
            .env("AGPRINT_COLOR", "never")
            .env_remove("AGPRINT_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the binary with `args` and empty stdin.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, "")
    }

    /// Run the binary with `args`, feeding `stdin` as standard input.
    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("agprint")
            .map_err(|e| anyhow::anyhow!("Failed to find agprint binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args).write_stdin(stdin.to_string());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
