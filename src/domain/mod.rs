pub mod configuration;
pub mod error;
pub mod form;
pub mod generation;
pub mod platform;
pub mod presets;
pub mod prompt;

pub use configuration::{AppConfig, GenerationApiConfig, parse_config_content};
pub use error::{AppError, ValidationError};
pub use form::{FormField, FormState, KeywordState};
pub use generation::{GenerationResult, GenerationState, GenerationTicket};
pub use platform::Platform;
pub use presets::PresetKind;

pub use prompt::{
    KEYWORDS_TEMPLATE, NOT_SPECIFIED, PromptComposer, PromptContext, STRUCTURED_TEMPLATE,
    TemplateRenderer,
};
