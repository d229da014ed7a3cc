use std::collections::HashMap;

use crate::domain::AppError;

/// Variables substituted into an instruction template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptContext {
    /// Variable name to value mapping.
    pub variables: HashMap<String, String>,
}

impl PromptContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the context.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(|s| s.as_str())
    }
}

/// Trait for rendering instruction templates.
///
/// Keeps the template engine (minijinja) and the embedded template assets
/// out of the domain layer.
pub trait TemplateRenderer {
    /// Render the named template with the given context.
    fn render(&self, template_name: &str, context: &PromptContext) -> Result<String, AppError>;
}

impl<T: TemplateRenderer + ?Sized> TemplateRenderer for &T {
    fn render(&self, template_name: &str, context: &PromptContext) -> Result<String, AppError> {
        (**self).render(template_name, context)
    }
}
