//! Shared test infrastructure for integration tests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Scratch directory holding one CSV file for a test.
pub struct CsvFixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl CsvFixture {
    /// Create a fixture with `contents` written to `ranked.csv`.
    pub fn with_contents(contents: &str) -> Self {
        let fixture = Self::without_file();
        std::fs::write(&fixture.path, contents).expect("write fixture csv");
        fixture
    }

    /// Create a fixture whose CSV path does not exist yet.
    pub fn without_file() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("ranked.csv");
        Self { dir, path }
    }

    pub fn read(&self) -> String {
        std::fs::read_to_string(&self.path).expect("read fixture csv")
    }

    /// Rows as vectors of fields, for comparisons that ignore quoting.
    pub fn rows(&self) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .expect("open fixture csv");
        reader
            .records()
            .map(|row| {
                row.expect("parse fixture row")
                    .iter()
                    .map(str::to_string)
                    .collect()
            })
            .collect()
    }
}

/// Run the pairrank binary with `answers` piped to stdin.
pub fn run_pairrank(cwd: &Path, args: &[&str], answers: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pairrank"))
        .args(args)
        .current_dir(cwd)
        .env_remove("PAIRRANK_CONFIG")
        .env_remove("PAIRRANK_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn pairrank");
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(answers.as_bytes())
            .expect("write answers to stdin");
    }
    child.wait_with_output().expect("wait for pairrank")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|field| field.to_string()).collect()
}
