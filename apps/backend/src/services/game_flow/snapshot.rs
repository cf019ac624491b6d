//! Public snapshot of a game - the only shape handed to clients.
//!
//! Everything derivable is derived at read time: level is the count of
//! investigations, suspect statuses and the outcome come from the
//! elimination ledger. The criminal's identity never appears here while
//! the investigation is in progress; it is only revealed by the derived
//! `Fled` status once the player has eliminated them.

use std::collections::{HashMap, HashSet};

use sea_orm::ConnectionTrait;
use serde::Serialize;
use uuid::Uuid;

use super::GameFlowService;
use crate::domain::{compute_statuses, evaluate_outcome, InvestigationOutcome, SuspectStatus};
use crate::error::AppError;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::games::Game;
use crate::repos::{eliminations, investigations, questions, rounds, suspects};

#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub game_id: Uuid,
    pub investigator: String,
    pub model: String,
    pub score: i64,
    /// 1-based count of investigations started for this game.
    pub level: i64,
    /// True once the criminal of the current investigation was eliminated.
    pub game_over: bool,
    pub investigation: Option<InvestigationView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvestigationView {
    pub id: Uuid,
    pub outcome: InvestigationOutcome,
    pub suspects: Vec<SuspectView>,
    pub rounds: Vec<RoundView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuspectView {
    pub id: Uuid,
    pub image: String,
    /// None while the suspect is still in play.
    pub status: Option<SuspectStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundView {
    pub id: Uuid,
    pub question: String,
    pub topic: String,
    pub answer: Option<String>,
    /// Suspects eliminated during this round, in elimination order.
    pub eliminations: Vec<Uuid>,
}

impl GameFlowService {
    /// Assemble the public snapshot for a game from its newest
    /// investigation.
    pub async fn snapshot_for_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game: &Game,
    ) -> Result<GameSnapshot, AppError> {
        let level = investigations::count_by_game(conn, game.id).await? as i64;
        let investigation = investigations::find_latest_by_game(conn, game.id).await?;

        let (view, game_over) = match investigation {
            Some(investigation) => {
                let view = self.investigation_view(conn, &investigation).await?;
                let game_over = view.outcome == InvestigationOutcome::CriminalEliminated;
                (Some(view), game_over)
            }
            None => (None, false),
        };

        Ok(GameSnapshot {
            game_id: game.id,
            investigator: game.investigator.clone(),
            model: game.model.clone(),
            score: game.score,
            level,
            game_over,
            investigation: view,
        })
    }

    async fn investigation_view<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        investigation: &investigations::Investigation,
    ) -> Result<InvestigationView, AppError> {
        let pool = investigations::find_pool(conn, investigation.id).await?;

        let all_eliminations = eliminations::find_by_investigation(conn, investigation.id).await?;
        let eliminated: HashSet<Uuid> =
            all_eliminations.iter().map(|e| e.suspect_id).collect();
        let statuses = compute_statuses(&pool, investigation.criminal_id, &eliminated);

        // find_many follows database order; re-map into pool order.
        let mut images: HashMap<Uuid, String> = suspects::find_many(conn, &pool)
            .await?
            .into_iter()
            .map(|s| (s.id, s.image))
            .collect();

        let mut suspect_views = Vec::with_capacity(pool.len());
        for suspect_id in &pool {
            let image = images.remove(suspect_id).ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("pooled suspect {suspect_id} missing from catalogue"),
                )
            })?;
            suspect_views.push(SuspectView {
                id: *suspect_id,
                image,
                status: statuses.get(suspect_id).copied().flatten(),
            });
        }

        let mut by_round: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for elimination in &all_eliminations {
            by_round
                .entry(elimination.round_id)
                .or_default()
                .push(elimination.suspect_id);
        }

        let mut round_views = Vec::new();
        for round in rounds::find_all_by_investigation(conn, investigation.id).await? {
            let question = questions::require_question(conn, round.question_id).await?;
            round_views.push(RoundView {
                id: round.id,
                question: question.text,
                topic: question.topic,
                answer: round.answer,
                eliminations: by_round.remove(&round.id).unwrap_or_default(),
            });
        }

        let outcome = evaluate_outcome(
            pool.len(),
            eliminated.len(),
            eliminated.contains(&investigation.criminal_id),
        );

        Ok(InvestigationView {
            id: investigation.id,
            outcome,
            suspects: suspect_views,
            rounds: round_views,
        })
    }
}
