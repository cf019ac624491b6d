//! Template-based answer generator.
//!
//! Default backend: phrases the selected fact as the suspect's answer
//! without calling out to any external service.

use super::trait_def::{AnswerGenerator, GenerateError};

#[derive(Debug, Default, Clone)]
pub struct TemplateAnswerer;

impl TemplateAnswerer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl AnswerGenerator for TemplateAnswerer {
    async fn generate_answer(
        &self,
        _question: &str,
        fact: &str,
        _model: &str,
    ) -> Result<String, GenerateError> {
        let fact = fact.trim();
        if fact.is_empty() {
            return Err(GenerateError::Upstream(
                "no fact available for this suspect".to_string(),
            ));
        }
        Ok(format!("All I can tell you is this: {fact}"))
    }
}
