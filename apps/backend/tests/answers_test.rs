//! Integration tests for answer recording, generation and waiting.

mod support;

use std::sync::Arc;
use std::time::Duration;

use backend::db::txn::with_txn;
use backend::domain::rules::POOL_SIZE;
use backend::error::AppError;
use backend::errors::ErrorCode;
use backend::generate::ScriptedAnswerer;
use backend::services::game_flow::{AnswerWait, GameFlowService};
use backend::state::app_state::AppState;
use sea_orm::TransactionTrait;
use support::{build_test_state, seed_catalogue, TEST_MODEL};
use uuid::Uuid;

async fn start_game_round(state: &AppState, player: &str) -> Result<Uuid, AppError> {
    let player = player.to_string();
    let snapshot = with_txn(None, state, |txn| {
        Box::pin(async move { GameFlowService.new_game(txn, &player, TEST_MODEL).await })
    })
    .await?;
    Ok(snapshot.investigation.expect("investigation").rounds[0].id)
}

async fn record(state: &AppState, round_id: Uuid, answer: &str) -> Result<bool, AppError> {
    let answer = answer.to_string();
    with_txn(None, state, |txn| {
        Box::pin(async move { GameFlowService.record_answer(txn, round_id, &answer).await })
    })
    .await
}

#[tokio::test]
async fn first_answer_wins() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;
    let round_id = start_game_round(&state, "player-1").await?;

    assert!(record(&state, round_id, "I was at the opera").await?);
    // The second write is a logical no-op, not an error.
    assert!(!record(&state, round_id, "I was at home").await?);

    let answer = GameFlowService
        .wait_for_answer(&state.db, round_id, AnswerWait::default())
        .await?;
    assert_eq!(answer, "I was at the opera");
    Ok(())
}

#[tokio::test]
async fn empty_answers_are_rejected() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;
    let round_id = start_game_round(&state, "player-1").await?;

    let err = record(&state, round_id, "   ").await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation {
            code: ErrorCode::EmptyAnswer,
            ..
        }
    ));
    Ok(())
}

#[tokio::test]
async fn recording_on_a_missing_round_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;
    start_game_round(&state, "player-1").await?;

    let err = record(&state, Uuid::new_v4(), "anything").await.unwrap_err();
    assert!(matches!(
        err,
        AppError::NotFound {
            code: ErrorCode::RoundNotFound,
            ..
        }
    ));
    Ok(())
}

#[tokio::test]
async fn wait_times_out_instead_of_returning_empty() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;
    let round_id = start_game_round(&state, "player-1").await?;

    let err = GameFlowService
        .wait_for_answer(
            &state.db,
            round_id,
            AnswerWait {
                interval: Duration::from_millis(10),
                timeout: Duration::from_millis(60),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Timeout { .. }));
    Ok(())
}

#[tokio::test]
async fn wait_picks_up_a_concurrently_recorded_answer() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;
    let round_id = start_game_round(&state, "player-1").await?;

    // The writer opens its own transaction; the request-aware helper is
    // not Send and cannot cross into the spawned task.
    let writer_db = state.db.clone();
    let writer = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(30)).await;
        let txn = writer_db.begin().await.map_err(AppError::from)?;
        let recorded = GameFlowService
            .record_answer(&txn, round_id, "a confession, eventually")
            .await?;
        txn.commit().await.map_err(AppError::from)?;
        Ok::<bool, AppError>(recorded)
    });

    let answer = GameFlowService
        .wait_for_answer(
            &state.db,
            round_id,
            AnswerWait {
                interval: Duration::from_millis(10),
                timeout: Duration::from_secs(5),
            },
        )
        .await?;

    assert_eq!(answer, "a confession, eventually");
    writer.await.expect("writer task")?;
    Ok(())
}

#[tokio::test]
async fn generated_answer_is_recorded_on_the_round() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;
    let round_id = start_game_round(&state, "player-1").await?;

    let generator = Arc::new(ScriptedAnswerer::with_answers(["I deny everything"]));
    let answer = with_txn(None, &state, |txn| {
        let generator = generator.clone();
        Box::pin(async move {
            GameFlowService
                .generate_and_record_answer(txn, generator.as_ref(), round_id)
                .await
        })
    })
    .await?;
    assert_eq!(answer, "I deny everything");

    let recorded = GameFlowService
        .wait_for_answer(&state.db, round_id, AnswerWait::default())
        .await?;
    assert_eq!(recorded, "I deny everything");
    Ok(())
}

#[tokio::test]
async fn regenerating_returns_the_recorded_answer() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;
    let round_id = start_game_round(&state, "player-1").await?;

    // A single scripted answer: a second generator call would fail, so
    // the repeat must be served from the round itself.
    let generator = Arc::new(ScriptedAnswerer::with_answers(["I was asleep"]));
    for _ in 0..2 {
        let answer = with_txn(None, &state, |txn| {
            let generator = generator.clone();
            Box::pin(async move {
                GameFlowService
                    .generate_and_record_answer(txn, generator.as_ref(), round_id)
                    .await
            })
        })
        .await?;
        assert_eq!(answer, "I was asleep");
    }
    Ok(())
}

#[tokio::test]
async fn generator_failure_maps_to_upstream() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;
    let round_id = start_game_round(&state, "player-1").await?;

    let generator = Arc::new(ScriptedAnswerer::new());
    generator.push_failure("generation backend unavailable");

    let err = with_txn(None, &state, |txn| {
        let generator = generator.clone();
        Box::pin(async move {
            GameFlowService
                .generate_and_record_answer(txn, generator.as_ref(), round_id)
                .await
        })
    })
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Upstream { .. }));
    Ok(())
}
