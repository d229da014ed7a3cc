//! Result lifecycle of one pipeline instance.

/// What the rendering surface shows for a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationResult {
    /// Nothing requested yet.
    #[default]
    Empty,
    /// A request is in flight.
    Pending,
    /// Prompt text returned by the model (or the malformed-response fallback).
    Success(String),
    /// User-facing failure message.
    Failure(String),
}

impl GenerationResult {
    pub fn is_pending(&self) -> bool {
        matches!(self, GenerationResult::Pending)
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            GenerationResult::Success(text) => Some(text),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            GenerationResult::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one invocation between `begin_generate` and `complete_generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket(u64);

impl GenerationTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Finite-state record: `Empty -> Pending -> Success | Failure -> Pending ...`.
#[derive(Debug, Default)]
pub struct GenerationState {
    result: GenerationResult,
    issued: u64,
    in_flight: Option<GenerationTicket>,
}

impl GenerationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> &GenerationResult {
        &self.result
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Clear the previous result and enter `Pending`.
    ///
    /// Returns `None` while another invocation is pending; the trigger is ignored.
    pub fn begin_generate(&mut self) -> Option<GenerationTicket> {
        if self.in_flight.is_some() {
            return None;
        }
        self.issued += 1;
        let ticket = GenerationTicket(self.issued);
        self.in_flight = Some(ticket);
        self.result = GenerationResult::Pending;
        Some(ticket)
    }

    /// Store the outcome of the invocation identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched for a ticket that is not in flight.
    pub fn complete_generate(
        &mut self,
        ticket: GenerationTicket,
        outcome: Result<String, String>,
    ) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;
        self.result = match outcome {
            Ok(text) => GenerationResult::Success(text),
            Err(message) => GenerationResult::Failure(message),
        };
        true
    }
}
