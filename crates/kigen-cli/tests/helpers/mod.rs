#![allow(dead_code)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
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

    /// A command acting as user `alice` in UTC.
    pub fn command(&self) -> Command {
        self.command_as("alice", "Alice")
    }

    pub fn command_as(&self, user_id: &str, user_name: &str) -> Command {
        let mut cmd = Command::cargo_bin("kigen").expect("Failed to find kigen binary");

        // Keep any kigen.toml in the working tree out of the picture.
        cmd.current_dir(self.temp_dir.path());
        cmd.env("KIGEN_DATABASE_PATH", &self.db_path);
        cmd.env("KIGEN_TIMEZONE", "UTC");
        cmd.env("KIGEN_USER__ID", user_id);
        cmd.env("KIGEN_USER__NAME", user_name);
        cmd.env_remove("RUST_LOG");

        cmd
    }

    pub fn db_path(&self) -> &std::path::Path {
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

    /// Stdout of a successful run.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.run_success(args).get_output().stdout.clone();
        String::from_utf8(output).expect("stdout is not UTF-8")
    }
}

pub mod assertions {
    use super::*;

    pub fn task_added() -> impl Predicate<str> {
        predicate::str::contains("Added task")
    }

    pub fn unrecognized_due_date() -> impl Predicate<str> {
        predicate::str::contains("Could not understand due date")
    }
}
