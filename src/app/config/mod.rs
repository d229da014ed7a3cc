//! Startup configuration loaders.
//!
//! Configuration is read once at process start and is immutable afterwards:
//! - `artprompt.toml` (optional) for endpoint settings
//! - `.env` and the process environment for the API key
//!
//! Pure schema parsing lives in `domain::configuration`.

mod load_config;

pub use load_config::{
    API_KEY_ENV, CONFIG_FILE, LEGACY_API_KEY_ENV, RuntimeConfig, load_runtime_config,
};
