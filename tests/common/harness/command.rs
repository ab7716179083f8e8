//! Fluent wrapper around assert_cmd::Command.

// Test utility; not every helper is used by every test binary
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `linknotes` binary.
pub struct LinknotesCommand {
    args: Vec<String>,
}

impl LinknotesCommand {
    /// Creates a new command for the `linknotes` binary.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Sets the `--db` option to select the storage database.
    pub fn db(mut self, path: &Path) -> Self {
        self.args.push("--db".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    ///
    /// Config and log environment is cleared so the host setup cannot leak in.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("linknotes").expect("Failed to find linknotes binary");
        cmd.env_remove("LINKNOTES_DB")
            .env_remove("LINKNOTES_LOG")
            .env_remove("RUST_LOG");
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `show` command with a profile.
    pub fn show(self, profile: &str) -> Self {
        self.args(["show", profile])
    }

    /// Configures for the `save` command with a profile.
    pub fn save(self, profile: &str) -> Self {
        self.args(["save", profile])
    }

    /// Configures for the `tags` command.
    pub fn tags(self) -> Self {
        self.args(["tags"])
    }

    /// Configures for the `export` command.
    pub fn export(self) -> Self {
        self.args(["export"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for LinknotesCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        LinknotesCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_db() {
        let temp = TempDir::new().unwrap();
        let db = temp.path().join("x.db");
        let cmd = LinknotesCommand::new().db(&db);
        let args = cmd.get_args();
        assert_eq!(args[0], "--db");
        assert_eq!(args[1], db.to_string_lossy());
    }

    #[test]
    fn test_command_output_success() {
        let output = LinknotesCommand::new().args(["--help"]).output_success();
        assert!(output.contains("linknotes"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = LinknotesCommand::new().ls().format_json();
        let args = cmd.get_args();
        assert_eq!(args, ["ls", "--format", "json"]);
    }
}
