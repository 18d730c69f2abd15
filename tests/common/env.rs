//! Isolated test environment for driving the pageit binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// Result of running the pageit binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[allow(dead_code)]
impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON line {l:?}: {e}")))
            .collect()
    }
}

/// A source tree in a temp directory.
///
/// Config discovery never escapes it: the binary runs with the temp dir as
/// CWD and `XDG_CONFIG_HOME`/`HOME` pointing inside it.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_pageit")),
        }
    }

    pub fn source(&self) -> &Path {
        self.root.path()
    }

    pub fn source_path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn output_path(&self, relative: &str) -> PathBuf {
        self.root.path().join("output").join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.source_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write source file");
        self
    }

    pub fn read_output(&self, relative: &str) -> String {
        std::fs::read_to_string(self.output_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read output {}: {}", relative, e))
    }

    /// Move a source file's mtime `secs` into the past (or future when negative)
    pub fn set_age(&self, path: &Path, secs: i64) {
        let now = SystemTime::now();
        let time = if secs >= 0 {
            now - Duration::from_secs(secs as u64)
        } else {
            now + Duration::from_secs(secs.unsigned_abs())
        };
        let file = std::fs::File::options()
            .write(true)
            .open(path)
            .expect("Failed to open file for mtime");
        file.set_modified(time).expect("Failed to set mtime");
    }

    pub fn modified(&self, path: &Path) -> SystemTime {
        std::fs::metadata(path)
            .and_then(|m| m.modified())
            .expect("Failed to read mtime")
    }

    /// Run pageit with the source root as CWD
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let config_home = self.root.path().join(".config-home");
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env("XDG_CONFIG_HOME", &config_home)
            .env("HOME", &config_home)
            .env_remove("PAGEIT_ENV")
            .env_remove("PAGEIT_CONFIG")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute pageit");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
