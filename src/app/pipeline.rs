//! Collector -> composer -> client chain for one user-facing feature.
//!
//! Every error is converted to [`GenerationResult::Failure`] here; nothing
//! propagates past [`Pipeline::generate`].

use tracing::{debug, info, warn};

use crate::domain::{
    AppError, FormField, FormState, GenerationResult, GenerationState, GenerationTicket,
    KeywordState, PresetKind, PromptComposer, TemplateRenderer, ValidationError,
};
use crate::ports::{ClipboardWriter, GenerationClient, Notifier};

const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// Form state a pipeline collects and composes from.
pub trait PipelineInput {
    /// Prefix of failure messages for remote and unexpected errors.
    const FAILURE_PREFIX: &'static str;
    /// Notice shown after the result was copied.
    const COPIED_NOTICE: &'static str;

    fn update_field(&mut self, name: &str, value: &str) -> Result<(), ValidationError>;

    fn compose<R: TemplateRenderer>(&self, composer: &PromptComposer<R>) -> Result<String, AppError>;
}

impl PipelineInput for FormState {
    const FAILURE_PREFIX: &'static str = "Failed to generate prompt";
    const COPIED_NOTICE: &'static str = "Prompt copied to clipboard.";

    fn update_field(&mut self, name: &str, value: &str) -> Result<(), ValidationError> {
        let field = FormField::from_name(name)?;
        FormState::update_field(self, field, value);
        Ok(())
    }

    fn compose<R: TemplateRenderer>(&self, composer: &PromptComposer<R>) -> Result<String, AppError> {
        composer.compose_structured(self)
    }
}

impl PipelineInput for KeywordState {
    const FAILURE_PREFIX: &'static str = "Failed to generate keyword prompt";
    const COPIED_NOTICE: &'static str = "Prompt copied to clipboard!";

    fn update_field(&mut self, name: &str, value: &str) -> Result<(), ValidationError> {
        KeywordState::update_field(self, name, value)
    }

    fn compose<R: TemplateRenderer>(&self, composer: &PromptComposer<R>) -> Result<String, AppError> {
        composer.compose_keywords(&self.raw_keywords)
    }
}

/// User-facing message for an error caught at the pipeline boundary.
pub fn failure_message(prefix: &str, error: &AppError) -> String {
    match error {
        AppError::Validation(validation) => validation.to_string(),
        other => {
            let description = other.to_string();
            let description =
                if description.trim().is_empty() { UNEXPECTED_ERROR.to_string() } else { description };
            format!("{}: {}", prefix, description)
        }
    }
}

/// One pipeline instance: its input, its result state and its collaborators.
pub struct Pipeline<I: PipelineInput, C: GenerationClient, R: TemplateRenderer> {
    input: I,
    state: GenerationState,
    composer: PromptComposer<R>,
    client: C,
}

/// Pipeline over the structured form.
pub type StructuredPipeline<C, R> = Pipeline<FormState, C, R>;
/// Pipeline over raw keywords.
pub type KeywordPipeline<C, R> = Pipeline<KeywordState, C, R>;

impl<I: PipelineInput, C: GenerationClient, R: TemplateRenderer> Pipeline<I, C, R> {
    pub fn new(input: I, composer: PromptComposer<R>, client: C) -> Self {
        Self { input, state: GenerationState::new(), composer, client }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn result(&self) -> &GenerationResult {
        self.state.result()
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    pub fn update_field(&mut self, name: &str, value: &str) -> Result<(), AppError> {
        self.input.update_field(name, value)?;
        Ok(())
    }

    /// The instruction that `generate` would send. Never touches the network.
    pub fn preview(&self) -> Result<String, AppError> {
        self.input.compose(&self.composer)
    }

    /// Enter `Pending`; `None` when an invocation is already in flight.
    pub fn begin_generate(&mut self) -> Option<GenerationTicket> {
        let ticket = self.state.begin_generate();
        if ticket.is_none() {
            debug!("Generate ignored: a request is already pending");
        }
        ticket
    }

    /// Store the outcome of `ticket`, converting errors to failure messages.
    pub fn complete_generate(
        &mut self,
        ticket: GenerationTicket,
        outcome: Result<String, AppError>,
    ) -> bool {
        let outcome = outcome.map_err(|error| {
            if !error.is_local() {
                warn!("Generation failed: {}", error);
            }
            failure_message(I::FAILURE_PREFIX, &error)
        });
        self.state.complete_generate(ticket, outcome)
    }

    /// Compose, call the backend once, and record the result.
    ///
    /// Validation failures are recorded without any request being issued.
    pub fn generate(&mut self) -> &GenerationResult {
        let Some(ticket) = self.begin_generate() else {
            return self.state.result();
        };

        let outcome = self.input.compose(&self.composer).and_then(|instruction| {
            debug!(chars = instruction.chars().count(), "Composed instruction");
            self.client.generate(&instruction)
        });
        if outcome.is_ok() {
            info!(ticket = ticket.id(), "Generation succeeded");
        }

        self.complete_generate(ticket, outcome);
        self.state.result()
    }

    /// Copy a successful result to the clipboard and notify.
    ///
    /// Returns `false` when there was nothing to copy or the copy failed; the
    /// pipeline result is never changed.
    pub fn copy_result<W: ClipboardWriter, N: Notifier>(&self, clipboard: &mut W, notifier: &N) -> bool {
        let Some(text) = self.state.result().text() else {
            return false;
        };
        match clipboard.write_text(text) {
            Ok(()) => {
                notifier.notify(I::COPIED_NOTICE);
                true
            }
            Err(error) => {
                warn!("Failed to copy text: {}", error);
                notifier.notify(&format!("Failed to copy prompt: {}", error));
                false
            }
        }
    }
}

impl<C: GenerationClient, R: TemplateRenderer> Pipeline<FormState, C, R> {
    /// Replace a preset-backed field with a catalog label.
    pub fn apply_preset(&mut self, kind: PresetKind, label: &str) {
        self.input.apply_preset(kind, label);
    }
}
