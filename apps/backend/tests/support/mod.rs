//! Shared helpers for the integration suites.

#![allow(dead_code)]

use backend::config::db::DbProfile;
use backend::error::AppError;
use backend::infra::state::build_state;
use backend::repos::facts::{self, FactCreate};
use backend::repos::questions::{self, Question, QuestionCreate};
use backend::repos::suspects::{self, Suspect};
use backend::state::app_state::AppState;
use sea_orm::DatabaseConnection;

#[ctor::ctor]
fn init_test_logging() {
    backend::test_bootstrap::logging::init();
}

/// Fresh in-memory SQLite state with migrations applied. Each call gets an
/// isolated database.
pub async fn build_test_state() -> AppState {
    build_state()
        .with_db(DbProfile::SqliteMemory)
        .build()
        .await
        .expect("build test state with in-memory db")
}

pub const TEST_MODEL: &str = "test-model";

pub struct Catalogue {
    pub suspects: Vec<Suspect>,
    pub questions: Vec<Question>,
}

/// Seed exactly `suspect_count` suspects (each with one fact) and a small
/// question deck.
pub async fn seed_catalogue(
    db: &DatabaseConnection,
    suspect_count: usize,
) -> Result<Catalogue, AppError> {
    let mut seeded_suspects = Vec::with_capacity(suspect_count);
    for i in 0..suspect_count {
        let suspect = suspects::create_if_absent(db, &format!("portrait_{i:02}.png")).await?;
        facts::create_fact(
            db,
            FactCreate {
                suspect_id: suspect.id,
                model: TEST_MODEL.to_string(),
                fact: format!("was seen near the gallery on night {i}"),
            },
        )
        .await?;
        seeded_suspects.push(suspect);
    }

    let mut seeded_questions = Vec::new();
    for (i, topic) in ["alibi", "motive", "witnesses", "habits"].iter().enumerate() {
        let question = questions::create_if_absent(
            db,
            QuestionCreate {
                text: format!("Question {i}: what about your {topic}?"),
                topic: topic.to_string(),
                level: 1,
            },
        )
        .await?;
        seeded_questions.push(question);
    }

    Ok(Catalogue {
        suspects: seeded_suspects,
        questions: seeded_questions,
    })
}
