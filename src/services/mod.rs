mod clipboard_arboard;
mod gemini_client_http;
mod notifier_terminal;
mod prompt_template_assets;
mod template_renderer_minijinja;

pub use clipboard_arboard::ArboardClipboard;
pub use gemini_client_http::HttpGeminiClient;
pub use notifier_terminal::TerminalNotifier;
pub use prompt_template_assets::{PromptTemplateFile, prompt_template_files};
pub use template_renderer_minijinja::EmbeddedTemplateRenderer;
