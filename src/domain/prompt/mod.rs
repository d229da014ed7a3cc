pub mod composer;
pub mod template;

pub use composer::{
    KEYWORDS_TEMPLATE, NOT_SPECIFIED, PromptComposer, STRUCTURED_TEMPLATE, keyword_context,
    structured_context,
};
pub use template::{PromptContext, TemplateRenderer};
