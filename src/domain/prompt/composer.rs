//! Builds the instruction sent to the generation backend.
//!
//! Validation happens here, before any template is rendered, so a rejected
//! form never reaches the network.

use crate::domain::error::{AppError, ValidationError};
use crate::domain::form::{FormField, FormState};
use crate::domain::platform::Platform;

use super::template::{PromptContext, TemplateRenderer};

/// Rendered in place of an empty field.
pub const NOT_SPECIFIED: &str = "not specified";

pub const STRUCTURED_TEMPLATE: &str = "structured.j2";
pub const KEYWORDS_TEMPLATE: &str = "keywords.j2";

/// Template variables for the structured pipeline.
pub fn structured_context(form: &FormState) -> Result<PromptContext, ValidationError> {
    if !form.has_details() {
        return Err(ValidationError::NoDetails);
    }
    let platform = Platform::parse(&form.platform)?;

    let preferences = FormField::DETAILS
        .iter()
        .map(|field| {
            let value = form.value(*field);
            let value = if value.is_empty() { NOT_SPECIFIED } else { value };
            format!("- {}: {}", field.label(), value)
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(PromptContext::new()
        .with_var("preferences", preferences)
        .with_var("platform", platform.as_str())
        .with_var("platform_directive", platform.directive_template()))
}

/// Template variables for the keyword pipeline.
pub fn keyword_context(raw_keywords: &str) -> Result<PromptContext, ValidationError> {
    let keywords = raw_keywords.trim();
    if keywords.is_empty() {
        return Err(ValidationError::NoKeywords);
    }
    Ok(PromptContext::new().with_var("keywords", keywords))
}

/// Deterministic instruction builder over an injected template renderer.
#[derive(Debug, Clone)]
pub struct PromptComposer<R: TemplateRenderer> {
    renderer: R,
}

impl<R: TemplateRenderer> PromptComposer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn compose_structured(&self, form: &FormState) -> Result<String, AppError> {
        let context = structured_context(form)?;
        self.renderer.render(STRUCTURED_TEMPLATE, &context)
    }

    pub fn compose_keywords(&self, raw_keywords: &str) -> Result<String, AppError> {
        let context = keyword_context(raw_keywords)?;
        self.renderer.render(KEYWORDS_TEMPLATE, &context)
    }
}
