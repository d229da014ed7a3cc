use std::io::Write;

use crate::ports::Notifier;

/// Prints notices to stderr so stdout carries only the generated prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        let _ = writeln!(std::io::stderr(), "✅ {}", message);
    }
}
