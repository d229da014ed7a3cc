//! Shared testing utilities for artprompt CLI tests.

use assert_cmd::Command;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path the generation endpoint is served under for the default model.
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

pub const TEST_API_KEY: &str = "test-key";

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    pub fn home(&self) -> &Path {
        self.root.path()
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `artprompt` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("artprompt").expect("Failed to locate artprompt binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("GOOGLE_API_KEY", TEST_API_KEY)
            .env_remove("NEXT_PUBLIC_GOOGLE_API_KEY")
            .env_remove("ARTPROMPT_LOG");
        cmd
    }

    /// Point the default config file at `api_url`.
    pub fn write_config(&self, api_url: &str) {
        self.write_file("artprompt.toml", &format!("[gemini]\napi_url = \"{}\"\n", api_url));
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}

/// Success body whose first candidate part carries `text`.
#[allow(dead_code)]
pub fn candidate_body(text: &str) -> String {
    json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    })
    .to_string()
}

/// Error body in the shape the generation API uses.
#[allow(dead_code)]
pub fn error_body(message: &str) -> String {
    let body: Value = json!({ "error": { "code": 400, "message": message } });
    body.to_string()
}
