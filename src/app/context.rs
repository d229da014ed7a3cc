use crate::domain::{FormState, KeywordState, PromptComposer, TemplateRenderer};
use crate::ports::GenerationClient;

use super::pipeline::{KeywordPipeline, Pipeline, StructuredPipeline};

/// Application context holding the collaborators shared by pipeline instances.
///
/// Pipelines borrow the client; no mutable state is shared between them.
pub struct AppContext<C: GenerationClient, R: TemplateRenderer + Clone> {
    client: C,
    renderer: R,
}

impl<C: GenerationClient, R: TemplateRenderer + Clone> AppContext<C, R> {
    /// Create a new application context.
    pub fn new(client: C, renderer: R) -> Self {
        Self { client, renderer }
    }

    /// Get a reference to the generation client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Composer over this context's template renderer.
    pub fn composer(&self) -> PromptComposer<R> {
        PromptComposer::new(self.renderer.clone())
    }

    /// New structured pipeline starting from `form`.
    pub fn structured_pipeline(&self, form: FormState) -> StructuredPipeline<&C, R> {
        Pipeline::new(form, self.composer(), &self.client)
    }

    /// New keyword pipeline starting from `raw_keywords`.
    pub fn keyword_pipeline(&self, raw_keywords: impl Into<String>) -> KeywordPipeline<&C, R> {
        Pipeline::new(KeywordState::new(raw_keywords), self.composer(), &self.client)
    }
}
