use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Contents of `artprompt.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub gemini: GenerationApiConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()
    }
}

/// Generation endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationApiConfig {
    /// Host serving the `generateContent` API.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier placed in the request path.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds. Unset keeps the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for GenerationApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: None }
    }
}

impl GenerationApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("gemini.model cannot be empty"));
        }
        if self.model.contains('/') {
            return Err(AppError::config_error(format!(
                "gemini.model '{}' must not contain '/'",
                self.model
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::config_error("gemini.timeout_secs must be greater than 0"));
        }
        if self.api_url.cannot_be_a_base() {
            return Err(AppError::config_error(format!(
                "gemini.api_url '{}' is not a base URL",
                self.api_url
            )));
        }
        Ok(())
    }

    /// `<api_url>/v1beta/models/<model>:generateContent`, without the key.
    pub fn endpoint(&self) -> Result<Url, AppError> {
        let method = format!("{}:generateContent", self.model);
        let mut url = self.api_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!("gemini.api_url '{}' is not a base URL", self.api_url))
            })?
            .pop_if_empty()
            .extend(["v1beta", "models", method.as_str()]);
        Ok(url)
    }
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com").expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}
