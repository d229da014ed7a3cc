use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// In-memory clipboard that remembers every write.
#[derive(Debug, Default)]
pub struct MockClipboard {
    writes: Vec<String>,
    fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&mut self, fail: bool) {
        self.fail = fail;
    }

    /// Most recent successful write.
    pub fn get_written_text(&self) -> Option<String> {
        self.writes.last().cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::ClipboardError("clipboard unavailable".to_string()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
