//! Answer generator trait definition.

use std::fmt;

use crate::errors::domain::DomainError;

/// Errors that can occur while producing an answer.
#[derive(Debug)]
pub enum GenerateError {
    /// Generator failed to produce an answer within its own deadline
    Timeout,
    /// Generator failed or returned unusable output
    Upstream(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Timeout => write!(f, "answer generation timed out"),
            GenerateError::Upstream(msg) => write!(f, "answer generation failed: {msg}"),
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<GenerateError> for DomainError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::Timeout => DomainError::timeout("answer generation timed out"),
            GenerateError::Upstream(msg) => DomainError::upstream(msg),
        }
    }
}

/// Trait for answer generators.
///
/// Implementations receive the round's question and the fact selected for
/// the suspect under interrogation, and must return the answer text the
/// suspect gives. `model` names the generation backend the game was created
/// with and is opaque to the engine.
#[async_trait::async_trait]
pub trait AnswerGenerator: Send + Sync {
    async fn generate_answer(
        &self,
        question: &str,
        fact: &str,
        model: &str,
    ) -> Result<String, GenerateError>;
}
