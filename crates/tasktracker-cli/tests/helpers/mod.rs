use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test harness for running CLI commands with temporary databases
pub struct CliTestHarness {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with a temporary database
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");

        Self { temp_dir, db_path }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tasktracker").expect("Failed to find tasktracker binary");

        // Run inside the temp dir so no stray tasktracker.toml is picked up
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("TASKTRACKER_SCHEMA_PATH");
        cmd.env_remove("RUST_LOG");
        cmd.env("TASKTRACKER_DATABASE_PATH", &self.db_path);

        cmd
    }

    /// Get the temporary working directory for this test instance
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the database path for this test instance
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Runs a command that must succeed and returns its stdout
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.run_success(args).get_output().stdout.clone();
        String::from_utf8(output).expect("stdout should be UTF-8")
    }

    /// Runs `list --json` (plus extra args) and parses the result
    pub fn list_json(&self, extra: &[&str]) -> Vec<serde_json::Value> {
        let mut args = vec!["list"];
        args.extend_from_slice(extra);
        args.push("--json");
        serde_json::from_str(&self.stdout_of(&args)).expect("list --json should print valid JSON")
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output contains task table headers
    pub fn has_task_table_headers() -> impl Predicate<str> {
        predicate::str::contains("ID")
            .and(predicate::str::contains("NAME"))
            .and(predicate::str::contains("STATUS"))
            .and(predicate::str::contains("CREATED"))
            .and(predicate::str::contains("UPDATED"))
    }

    /// Predicate to check for the not-found message
    pub fn not_found(id: i64) -> impl Predicate<str> {
        predicate::str::contains(format!("Couldn't find task with id: {id}"))
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }
}
