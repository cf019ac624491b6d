use std::time::Duration;

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::{info, warn};
use uuid::Uuid;

use super::GameFlowService;
use crate::domain::rules::{ANSWER_POLL_INTERVAL, ANSWER_WAIT_TIMEOUT};
use crate::domain::pick_fact_index;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::generate::AnswerGenerator;
use crate::repos::{facts, games, investigations, questions, rounds};

/// Polling parameters for `wait_for_answer`.
#[derive(Debug, Clone, Copy)]
pub struct AnswerWait {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for AnswerWait {
    fn default() -> Self {
        Self {
            interval: ANSWER_POLL_INTERVAL,
            timeout: ANSWER_WAIT_TIMEOUT,
        }
    }
}

impl GameFlowService {
    /// Record an answer on a round, first write wins. Returns true when
    /// this call performed the write; a second write is a logical no-op.
    pub async fn record_answer(
        &self,
        txn: &DatabaseTransaction,
        round_id: Uuid,
        answer: &str,
    ) -> Result<bool, AppError> {
        if answer.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyAnswer,
                "an answer must not be empty",
            )
            .into());
        }

        let round = rounds::require_round(txn, round_id).await?;
        let wrote = rounds::record_answer_if_empty(txn, round_id, answer).await?;

        if !wrote {
            if let Some(existing) = &round.answer {
                if existing != answer {
                    warn!(
                        round_id = %round_id,
                        "discarding divergent second answer for round"
                    );
                }
            }
        } else {
            info!(round_id = %round_id, "answer recorded");
        }

        Ok(wrote)
    }

    /// Produce the round's answer from the criminal's facts and record it.
    ///
    /// Every round of an investigation answers from the same fact:
    /// `pick_fact_index` is deterministic per investigation, so repeated
    /// questions cannot contradict each other.
    pub async fn generate_and_record_answer(
        &self,
        txn: &DatabaseTransaction,
        generator: &dyn AnswerGenerator,
        round_id: Uuid,
    ) -> Result<String, AppError> {
        let round = rounds::require_round(txn, round_id).await?;
        if round.is_answered() {
            // First write wins; re-generating returns the recorded answer
            // without consulting the generator again.
            return Ok(round.answer.unwrap_or_default());
        }
        let question = questions::require_question(txn, round.question_id).await?;
        let investigation =
            investigations::require_investigation(txn, round.investigation_id).await?;
        let game = games::require_game(txn, investigation.game_id).await?;

        let candidates =
            facts::find_for_answering(txn, investigation.criminal_id, &game.model).await?;
        if candidates.is_empty() {
            return Err(DomainError::upstream(format!(
                "no facts recorded for suspect {}",
                investigation.criminal_id
            ))
            .into());
        }

        let fact = &candidates[pick_fact_index(investigation.id, candidates.len())];
        let answer = generator
            .generate_answer(&question.text, &fact.fact, &game.model)
            .await
            .map_err(DomainError::from)?;

        self.record_answer(txn, round_id, &answer).await?;
        Ok(answer)
    }

    /// Wait until the round has a non-empty answer, polling at
    /// `wait.interval`. Elapsing `wait.timeout` is a Timeout error, never
    /// an empty string. Dropping the future cancels the wait.
    pub async fn wait_for_answer<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        round_id: Uuid,
        wait: AnswerWait,
    ) -> Result<String, AppError> {
        let deadline = tokio::time::Instant::now() + wait.timeout;

        loop {
            let round = rounds::require_round(conn, round_id).await?;
            if let Some(answer) = round.answer {
                if !answer.is_empty() {
                    return Ok(answer);
                }
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(DomainError::timeout(format!(
                    "no answer for round {round_id} within {:?}",
                    wait.timeout
                ))
                .into());
            }
            tokio::time::sleep(wait.interval).await;
        }
    }
}
