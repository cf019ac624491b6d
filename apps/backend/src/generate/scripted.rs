//! Scripted answer generator for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::trait_def::{AnswerGenerator, GenerateError};

/// Replays a fixed queue of responses, one per call. An exhausted queue
/// turns into an upstream error so a test that over-calls fails loudly.
#[derive(Debug, Default)]
pub struct ScriptedAnswerer {
    script: Mutex<VecDeque<Result<String, String>>>,
}

impl ScriptedAnswerer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let script = answers.into_iter().map(|a| Ok(a.into())).collect();
        Self {
            script: Mutex::new(script),
        }
    }

    pub fn push_answer(&self, answer: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(answer.into()));
    }

    pub fn push_failure(&self, detail: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(detail.into()));
    }
}

#[async_trait::async_trait]
impl AnswerGenerator for ScriptedAnswerer {
    async fn generate_answer(
        &self,
        _question: &str,
        _fact: &str,
        _model: &str,
    ) -> Result<String, GenerateError> {
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Ok(answer)) => Ok(answer),
            Some(Err(detail)) => Err(GenerateError::Upstream(detail)),
            None => Err(GenerateError::Upstream("script exhausted".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_in_order_then_errors() {
        let answerer = ScriptedAnswerer::with_answers(["first", "second"]);
        assert_eq!(
            answerer.generate_answer("q", "f", "m").await.unwrap(),
            "first"
        );
        assert_eq!(
            answerer.generate_answer("q", "f", "m").await.unwrap(),
            "second"
        );
        assert!(answerer.generate_answer("q", "f", "m").await.is_err());
    }

    #[tokio::test]
    async fn scripted_failure_is_upstream() {
        let answerer = ScriptedAnswerer::new();
        answerer.push_failure("backend down");
        let err = answerer.generate_answer("q", "f", "m").await.unwrap_err();
        assert!(matches!(err, GenerateError::Upstream(_)));
    }
}
