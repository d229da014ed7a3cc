//! Runtime configuration loading from the working directory and environment.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{AppConfig, AppError, parse_config_content};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "artprompt.toml";
/// Environment variable holding the generation API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
/// Fallback variable name used by web deployments.
pub const LEGACY_API_KEY_ENV: &str = "NEXT_PUBLIC_GOOGLE_API_KEY";

/// Immutable configuration assembled at startup.
#[derive(Clone)]
pub struct RuntimeConfig {
    pub app: AppConfig,
    api_key: String,
}

impl std::fmt::Debug for RuntimeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeConfig")
            .field("app", &self.app)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl RuntimeConfig {
    pub fn new(app: AppConfig, api_key: impl Into<String>) -> Self {
        Self { app, api_key: api_key.into() }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// Load `.env`, the config file and the API key.
///
/// `explicit_path` must exist; the default `artprompt.toml` in `work_dir` is optional.
/// A missing API key is not an error here.
pub fn load_runtime_config(
    work_dir: &Path,
    explicit_path: Option<&Path>,
) -> Result<RuntimeConfig, AppError> {
    load_dotenv(work_dir);

    let app = match explicit_path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            read_config_file(path)?
        }
        None => {
            let default_path = work_dir.join(CONFIG_FILE);
            if default_path.exists() { read_config_file(&default_path)? } else { AppConfig::default() }
        }
    };

    let api_key = read_key(API_KEY_ENV).or_else(|| read_key(LEGACY_API_KEY_ENV)).unwrap_or_default();
    if api_key.trim().is_empty() {
        warn!("{} is not set; requests will be rejected by the generation endpoint", API_KEY_ENV);
    }

    Ok(RuntimeConfig::new(app, api_key))
}

/// Value of `name`, treating blank values as unset.
fn read_key(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn read_config_file(path: &Path) -> Result<AppConfig, AppError> {
    debug!(path = %path.display(), "Reading config file");
    let content = fs::read_to_string(path)?;
    parse_config_content(&content)
}

fn load_dotenv(work_dir: &Path) {
    let env_path = work_dir.join(".env");
    if !env_path.exists() {
        return;
    }
    if let Err(err) = dotenvy::from_path(&env_path) {
        warn!("Failed to load {}: {}", env_path.display(), err);
    }
}
