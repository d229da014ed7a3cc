//! Template renderer backed by minijinja and the embedded prompt assets.

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::{AppError, PromptContext, TemplateRenderer};

use super::prompt_template_assets::prompt_template_files;

/// Renders the embedded instruction templates.
#[derive(Debug, Clone)]
pub struct EmbeddedTemplateRenderer {
    env: Environment<'static>,
}

impl EmbeddedTemplateRenderer {
    /// Register every embedded template in a strict environment.
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        for file in prompt_template_files() {
            env.add_template(file.name, file.content).map_err(|e| AppError::TemplateRender {
                template: file.name.to_string(),
                reason: e.to_string(),
            })?;
        }

        Ok(Self { env })
    }
}

impl TemplateRenderer for EmbeddedTemplateRenderer {
    fn render(&self, template_name: &str, context: &PromptContext) -> Result<String, AppError> {
        let template_error = |e: minijinja::Error| AppError::TemplateRender {
            template: template_name.to_string(),
            reason: e.to_string(),
        };

        let template = self.env.get_template(template_name).map_err(template_error)?;
        template.render(&context.variables).map_err(template_error)
    }
}
