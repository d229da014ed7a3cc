mod clipboard_writer;
mod generation_client;
mod notifier;

pub use clipboard_writer::ClipboardWriter;
pub use generation_client::{GenerationClient, MALFORMED_RESPONSE_FALLBACK};
pub use notifier::Notifier;
