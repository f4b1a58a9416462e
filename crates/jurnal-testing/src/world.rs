//! Isolated environment for CLI process tests.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use assert_cmd::Command;
use tempfile::TempDir;

use jurnal_runtime::{Config, Session, SessionStore};
use jurnal_types::LoginData;

/// Nothing listens here, so any request fails fast with a network error.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9/api";

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use jurnal_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["whoami"]).unwrap();
/// assert!(!result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
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
        let world = Self {
            temp_dir,
            env_vars: HashMap::new(),
        };
        let config = Config {
            api_base_url: UNREACHABLE_API.to_string(),
            timeout_secs: 2,
            ..Config::default()
        };
        config
            .save_to(&Config::path_in(world.data_dir()))
            .expect("Failed to write config");
        world
    }

    pub fn data_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn export_dir(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("exports")
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Writes `session.json` as if `login` had succeeded.
    pub fn signed_in(self, login: LoginData) -> Self {
        SessionStore::new(self.data_dir())
            .save(&Session::signed_in(login))
            .expect("Failed to write session");
        self
    }

    pub fn session(&self) -> Session {
        SessionStore::new(self.data_dir())
            .load()
            .expect("Failed to read session")
    }

    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.env_remove("JURNAL_PATH").env_remove("RUST_LOG");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    #[allow(deprecated)]
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("jurnal")
            .map_err(|e| anyhow::anyhow!("Failed to find jurnal binary: {}", e))?;
        self.configure_command(&mut cmd);
        Ok(cmd)
    }

    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let output = self.command()?.args(args).output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
