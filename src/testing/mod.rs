mod fake_generation_client;
mod mock_clipboard;
mod recording_notifier;

pub use fake_generation_client::FakeGenerationClient;
pub use mock_clipboard::MockClipboard;
pub use recording_notifier::RecordingNotifier;
