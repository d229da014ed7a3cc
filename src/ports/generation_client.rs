//! Generation backend port definition.

use crate::domain::AppError;

/// Returned as a successful result when the response lacks the expected shape.
pub const MALFORMED_RESPONSE_FALLBACK: &str =
    "Could not generate a prompt. The model returned an empty or malformed response.";

/// Port for the remote text-generation call.
pub trait GenerationClient {
    /// Send one instruction and return the first candidate's text, trimmed.
    ///
    /// Exactly one request per call; no retry.
    fn generate(&self, instruction: &str) -> Result<String, AppError>;
}

impl<T: GenerationClient + ?Sized> GenerationClient for &T {
    fn generate(&self, instruction: &str) -> Result<String, AppError> {
        (**self).generate(instruction)
    }
}

impl<T: GenerationClient + ?Sized> GenerationClient for Box<T> {
    fn generate(&self, instruction: &str) -> Result<String, AppError> {
        (**self).generate(instruction)
    }
}
