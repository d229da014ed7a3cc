use std::io;

use thiserror::Error;

/// Local precondition failures. These never trigger a network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Every structured field was empty.
    #[error("Please provide at least some details to generate a prompt.")]
    NoDetails,

    /// The keyword field was empty or whitespace.
    #[error("Please enter some keywords to generate a prompt.")]
    NoKeywords,

    /// Platform selector outside the supported targets.
    #[error("Invalid platform selected. Please choose 'Midjourney' or 'GPT Image Generation'.")]
    InvalidPlatform(String),

    /// Field name not known to the form.
    #[error("Unknown form field '{0}'")]
    UnknownField(String),

    /// Preset category not known to the catalog.
    #[error("Unknown preset kind '{0}': must be one of style, angle, lighting, tone")]
    UnknownPresetKind(String),
}

/// Library-wide error type for artprompt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Input rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Non-2xx response from the generation endpoint.
    #[error("API error: {status} {status_text} - {message}")]
    Remote { status: u16, status_text: String, message: String },

    /// Transport failure or unparseable success body.
    #[error("{0}")]
    Unexpected(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Terminal prompt failed.
    #[error("{0}")]
    Interaction(String),

    /// Embedded instruction template failed to render.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether the failure happened before any request left the process.
    pub fn is_local(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}
