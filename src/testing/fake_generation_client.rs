use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::GenerationClient;

type ErrorFactory = Arc<dyn Fn() -> AppError + Send + Sync>;

/// Records instructions and answers with a canned reply or error.
#[derive(Clone)]
pub struct FakeGenerationClient {
    pub sent_instructions: Arc<Mutex<Vec<String>>>,
    reply: Result<String, ErrorFactory>,
}

impl FakeGenerationClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self { sent_instructions: Arc::new(Mutex::new(vec![])), reply: Ok(text.into()) }
    }

    pub fn failing(error: impl Fn() -> AppError + Send + Sync + 'static) -> Self {
        Self { sent_instructions: Arc::new(Mutex::new(vec![])), reply: Err(Arc::new(error)) }
    }

    pub fn instructions(&self) -> Vec<String> {
        self.sent_instructions.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent_instructions.lock().unwrap().len()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, instruction: &str) -> Result<String, AppError> {
        self.sent_instructions.lock().unwrap().push(instruction.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(error) => Err(error()),
        }
    }
}
