//! artprompt: compose AI art prompts from presets or keywords and expand them with Gemini.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use domain::PromptComposer;
use services::{ArboardClipboard, EmbeddedTemplateRenderer, TerminalNotifier};

pub use app::api::{DefaultContext, RunOptions, RunOutcome, build_context, run_pipeline};
pub use app::config::{RuntimeConfig, load_runtime_config};
pub use app::pipeline::{KeywordPipeline, Pipeline, PipelineInput, StructuredPipeline};
pub use app::AppContext;
pub use domain::{
    AppConfig, AppError, FormField, FormState, GenerationApiConfig, GenerationResult,
    KeywordState, Platform, PresetKind, ValidationError,
};
pub use ports::MALFORMED_RESPONSE_FALLBACK;

// =============================================================================
// Composition API
// =============================================================================

/// Compose the structured-pipeline instruction without sending it.
pub fn compose_prompt(form: &FormState) -> Result<String, AppError> {
    PromptComposer::new(EmbeddedTemplateRenderer::new()?).compose_structured(form)
}

/// Compose the keyword-pipeline instruction without sending it.
pub fn compose_keyword_prompt(raw_keywords: &str) -> Result<String, AppError> {
    PromptComposer::new(EmbeddedTemplateRenderer::new()?).compose_keywords(raw_keywords)
}

// =============================================================================
// Generation API
// =============================================================================

/// Run the structured pipeline once against the configured endpoint.
///
/// Only context construction errors are returned as `Err`; every pipeline
/// failure is reported as [`GenerationResult::Failure`].
pub fn generate_prompt(config: &RuntimeConfig, form: FormState) -> Result<GenerationResult, AppError> {
    let ctx = build_context(config)?;
    let mut pipeline = ctx.structured_pipeline(form);
    Ok(pipeline.generate().clone())
}

/// Run the keyword pipeline once against the configured endpoint.
pub fn expand_keywords(config: &RuntimeConfig, raw_keywords: &str) -> Result<GenerationResult, AppError> {
    let ctx = build_context(config)?;
    let mut pipeline = ctx.keyword_pipeline(raw_keywords);
    Ok(pipeline.generate().clone())
}

/// Run the structured pipeline and copy a successful result to the system clipboard.
pub fn generate_prompt_to_clipboard(
    config: &RuntimeConfig,
    form: FormState,
) -> Result<GenerationResult, AppError> {
    let ctx = build_context(config)?;
    let outcome = run_pipeline(
        ctx.structured_pipeline(form),
        RunOptions { prompt_preview: false, copy: true },
        &mut ArboardClipboard::new(),
        &TerminalNotifier,
    )?;
    match outcome {
        RunOutcome::Generated(result) => Ok(result),
        RunOutcome::Preview(_) => Err(AppError::Unexpected("preview returned for a generation run".into())),
    }
}
