//! Entry points shared by the CLI and the library surface.

use crate::domain::{AppError, GenerationResult, TemplateRenderer};
use crate::ports::{ClipboardWriter, GenerationClient, Notifier};
use crate::services::{EmbeddedTemplateRenderer, HttpGeminiClient};

use super::config::RuntimeConfig;
use super::context::AppContext;
use super::pipeline::{Pipeline, PipelineInput};

/// Context wired to the Gemini endpoint and the embedded templates.
pub type DefaultContext = AppContext<HttpGeminiClient, EmbeddedTemplateRenderer>;

/// How a pipeline run is driven from the rendering surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Show the composed instruction instead of calling the backend.
    pub prompt_preview: bool,
    /// Copy a successful result to the clipboard.
    pub copy: bool,
}

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Composed instruction; no request was made.
    Preview(String),
    /// Final pipeline result.
    Generated(GenerationResult),
}

/// Build the production context from startup configuration.
pub fn build_context(config: &RuntimeConfig) -> Result<DefaultContext, AppError> {
    let client = HttpGeminiClient::new(config.api_key().to_string(), &config.app.gemini)?;
    let renderer = EmbeddedTemplateRenderer::new()?;
    Ok(AppContext::new(client, renderer))
}

/// Drive one pipeline run.
///
/// Only preview composition errors are returned as `Err`; generation failures
/// are part of the returned result.
pub fn run_pipeline<I, C, R, W, N>(
    mut pipeline: Pipeline<I, C, R>,
    options: RunOptions,
    clipboard: &mut W,
    notifier: &N,
) -> Result<RunOutcome, AppError>
where
    I: PipelineInput,
    C: GenerationClient,
    R: TemplateRenderer,
    W: ClipboardWriter,
    N: Notifier,
{
    if options.prompt_preview {
        return pipeline.preview().map(RunOutcome::Preview);
    }

    pipeline.generate();
    if options.copy {
        pipeline.copy_result(clipboard, notifier);
    }
    Ok(RunOutcome::Generated(pipeline.result().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FormField, FormState};
    use crate::testing::{FakeGenerationClient, MockClipboard, RecordingNotifier};

    fn context(client: FakeGenerationClient) -> AppContext<FakeGenerationClient, EmbeddedTemplateRenderer> {
        AppContext::new(client, EmbeddedTemplateRenderer::new().unwrap())
    }

    #[test]
    fn preview_returns_instruction_without_request() {
        let ctx = context(FakeGenerationClient::replying("T"));
        let mut form = FormState::new();
        form.update_field(FormField::ColorTone, "Sepia Tone");

        let outcome = run_pipeline(
            ctx.structured_pipeline(form),
            RunOptions { prompt_preview: true, copy: true },
            &mut MockClipboard::new(),
            &RecordingNotifier::default(),
        )
        .unwrap();

        match outcome {
            RunOutcome::Preview(instruction) => assert!(instruction.contains("Color Tone: Sepia Tone")),
            other => panic!("expected preview, got {other:?}"),
        }
        assert_eq!(ctx.client().call_count(), 0);
    }

    #[test]
    fn preview_surfaces_validation_errors() {
        let ctx = context(FakeGenerationClient::replying("T"));
        let result = run_pipeline(
            ctx.keyword_pipeline("  "),
            RunOptions { prompt_preview: true, copy: false },
            &mut MockClipboard::new(),
            &RecordingNotifier::default(),
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn generated_result_is_copied_when_requested() {
        let ctx = context(FakeGenerationClient::replying("neon koi, --ar 3:2"));
        let mut clipboard = MockClipboard::new();
        let notifier = RecordingNotifier::default();

        let outcome = run_pipeline(
            ctx.keyword_pipeline("koi, neon"),
            RunOptions { prompt_preview: false, copy: true },
            &mut clipboard,
            &notifier,
        )
        .unwrap();

        assert_eq!(
            outcome,
            RunOutcome::Generated(GenerationResult::Success("neon koi, --ar 3:2".to_string()))
        );
        assert_eq!(clipboard.get_written_text().as_deref(), Some("neon koi, --ar 3:2"));
        assert_eq!(notifier.messages().len(), 1);
    }

    #[test]
    fn failures_are_not_copied() {
        let ctx = context(FakeGenerationClient::replying("T"));
        let mut clipboard = MockClipboard::new();

        let outcome = run_pipeline(
            ctx.structured_pipeline(FormState::new()),
            RunOptions { prompt_preview: false, copy: true },
            &mut clipboard,
            &RecordingNotifier::default(),
        )
        .unwrap();

        assert!(matches!(outcome, RunOutcome::Generated(GenerationResult::Failure(_))));
        assert_eq!(clipboard.write_count(), 0);
    }

    #[test]
    fn pipelines_from_one_context_are_independent() {
        let ctx = context(FakeGenerationClient::replying("T"));
        let mut first = ctx.keyword_pipeline("rain");
        let second = ctx.keyword_pipeline("snow");

        first.generate();

        assert_eq!(first.result().text(), Some("T"));
        assert_eq!(second.result(), &GenerationResult::Empty);
    }
}
