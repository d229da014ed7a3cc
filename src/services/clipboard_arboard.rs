use arboard::Clipboard;
use tracing::debug;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// System clipboard, opened on first write.
///
/// Opening is deferred so that headless sessions only fail when a copy is
/// actually requested.
#[derive(Default)]
pub struct ArboardClipboard {
    clipboard: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, AppError> {
        if self.clipboard.is_none() {
            let opened = Clipboard::new()
                .map_err(|e| AppError::ClipboardError(format!("Failed to open clipboard: {}", e)))?;
            self.clipboard = Some(opened);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| AppError::ClipboardError("Clipboard unavailable".to_string()))
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        debug!(chars = text.chars().count(), "Writing prompt to clipboard");
        self.handle()?
            .set_text(text)
            .map_err(|e| AppError::ClipboardError(format!("Failed to copy text: {}", e)))
    }
}
