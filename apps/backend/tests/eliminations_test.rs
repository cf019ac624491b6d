//! Integration tests for eliminations, scoring and investigation outcomes.

mod support;

use backend::db::txn::with_txn;
use backend::domain::rules::POOL_SIZE;
use backend::domain::{InvestigationOutcome, SuspectStatus};
use backend::error::AppError;
use backend::errors::ErrorCode;
use backend::repos::investigations;
use backend::services::game_flow::{GameFlowService, GameSnapshot};
use backend::state::app_state::AppState;
use support::{build_test_state, seed_catalogue, TEST_MODEL};
use uuid::Uuid;

/// Start a game and return (snapshot, criminal_id, round_id).
async fn start_game(state: &AppState, player: &str) -> Result<(GameSnapshot, Uuid, Uuid), AppError> {
    let player = player.to_string();
    let snapshot = with_txn(None, state, |txn| {
        Box::pin(async move { GameFlowService.new_game(txn, &player, TEST_MODEL).await })
    })
    .await?;

    let investigation_id = snapshot.investigation.as_ref().expect("investigation").id;
    let round_id = snapshot.investigation.as_ref().expect("investigation").rounds[0].id;
    let criminal_id = investigations::require_investigation(&state.db, investigation_id)
        .await
        .map_err(AppError::from)?
        .criminal_id;

    Ok((snapshot, criminal_id, round_id))
}

async fn eliminate(
    state: &AppState,
    investigation_id: Uuid,
    round_id: Uuid,
    suspect_id: Uuid,
) -> Result<backend::services::game_flow::EliminationOutcome, AppError> {
    with_txn(None, state, |txn| {
        Box::pin(async move {
            GameFlowService
                .eliminate_suspect(txn, investigation_id, round_id, suspect_id)
                .await
        })
    })
    .await
}

#[tokio::test]
async fn correct_eliminations_score_level_times_count_in_round() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;

    let (snapshot, criminal_id, round_id) = start_game(&state, "player-1").await?;
    let investigation = snapshot.investigation.expect("investigation");
    let innocents: Vec<Uuid> = investigation
        .suspects
        .iter()
        .map(|s| s.id)
        .filter(|id| *id != criminal_id)
        .collect();

    // Level 1, first elimination in the round: 1 x 1 = 1.
    let first = eliminate(&state, investigation.id, round_id, innocents[0]).await?;
    assert_eq!(first.score_delta, 1);
    assert_eq!(first.game.score, 1);
    assert_eq!(first.outcome, InvestigationOutcome::InProgress);

    // Second elimination in the same round: 1 x 2 = 2, total 3.
    let second = eliminate(&state, investigation.id, round_id, innocents[1]).await?;
    assert_eq!(second.score_delta, 2);
    assert_eq!(second.game.score, 3);

    // A fresh round resets the per-round count: 1 x 1 = 1, total 4.
    let snapshot = with_txn(None, &state, |txn| {
        Box::pin(async move { GameFlowService.next_round(txn, "player-1").await })
    })
    .await?;
    let new_round_id = snapshot.investigation.expect("investigation").rounds[1].id;
    let third = eliminate(&state, investigation.id, new_round_id, innocents[2]).await?;
    assert_eq!(third.score_delta, 1);
    assert_eq!(third.game.score, 4);

    Ok(())
}

#[tokio::test]
async fn duplicate_elimination_is_a_conflict_and_score_stands() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;

    let (snapshot, criminal_id, round_id) = start_game(&state, "player-1").await?;
    let investigation = snapshot.investigation.expect("investigation");
    let innocent = investigation
        .suspects
        .iter()
        .map(|s| s.id)
        .find(|id| *id != criminal_id)
        .expect("an innocent suspect");

    let first = eliminate(&state, investigation.id, round_id, innocent).await?;
    assert_eq!(first.game.score, 1);

    let err = eliminate(&state, investigation.id, round_id, innocent)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Conflict {
            code: ErrorCode::AlreadyEliminated,
            ..
        }
    ));

    // The rejected duplicate must not have re-scored.
    let current = with_txn(None, &state, |txn| {
        Box::pin(async move { GameFlowService.current_game(txn, "player-1", "").await })
    })
    .await?;
    assert_eq!(current.score, 1);

    Ok(())
}

#[tokio::test]
async fn eliminating_the_criminal_ends_the_game_without_points() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;

    let (snapshot, criminal_id, round_id) = start_game(&state, "player-1").await?;
    let investigation_id = snapshot.investigation.expect("investigation").id;

    let outcome = eliminate(&state, investigation_id, round_id, criminal_id).await?;
    assert_eq!(outcome.score_delta, 0);
    assert_eq!(outcome.game.score, 0);
    assert_eq!(outcome.outcome, InvestigationOutcome::CriminalEliminated);

    let current = with_txn(None, &state, |txn| {
        Box::pin(async move { GameFlowService.current_game(txn, "player-1", "").await })
    })
    .await?;
    assert!(current.game_over);
    let investigation = current.investigation.expect("investigation");
    assert_eq!(investigation.outcome, InvestigationOutcome::CriminalEliminated);

    let fled = investigation
        .suspects
        .iter()
        .find(|s| s.id == criminal_id)
        .expect("criminal in pool");
    assert_eq!(fled.status, Some(SuspectStatus::Fled));

    Ok(())
}

#[tokio::test]
async fn solving_requires_exactly_all_innocents_eliminated() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;

    let (snapshot, criminal_id, round_id) = start_game(&state, "player-1").await?;
    let investigation = snapshot.investigation.expect("investigation");
    let innocents: Vec<Uuid> = investigation
        .suspects
        .iter()
        .map(|s| s.id)
        .filter(|id| *id != criminal_id)
        .collect();
    assert_eq!(innocents.len(), POOL_SIZE - 1);

    for (i, suspect_id) in innocents.iter().enumerate() {
        let outcome = eliminate(&state, investigation.id, round_id, *suspect_id).await?;
        if i + 1 < innocents.len() {
            assert_eq!(outcome.outcome, InvestigationOutcome::InProgress);
        } else {
            assert_eq!(outcome.outcome, InvestigationOutcome::Solved);
        }
    }

    let current = with_txn(None, &state, |txn| {
        Box::pin(async move { GameFlowService.current_game(txn, "player-1", "").await })
    })
    .await?;
    assert!(!current.game_over);
    let view = current.investigation.expect("investigation");
    assert_eq!(view.outcome, InvestigationOutcome::Solved);
    assert!(view
        .suspects
        .iter()
        .filter(|s| s.id != criminal_id)
        .all(|s| s.status == Some(SuspectStatus::Free)));

    Ok(())
}

#[tokio::test]
async fn eliminating_a_stranger_is_a_validation_error() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;

    let (snapshot, _, round_id) = start_game(&state, "player-1").await?;
    let investigation_id = snapshot.investigation.expect("investigation").id;

    // Registered after the draw, so it cannot be part of the pool.
    let stranger = backend::repos::suspects::create_if_absent(&state.db, "stranger.png").await?;

    let err = eliminate(&state, investigation_id, round_id, stranger.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation {
            code: ErrorCode::SuspectNotInPool,
            ..
        }
    ));
    Ok(())
}

#[tokio::test]
async fn round_must_belong_to_the_investigation() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;

    let (snapshot_a, criminal_a, _round_a) = start_game(&state, "player-a").await?;
    let (_snapshot_b, _, round_b) = start_game(&state, "player-b").await?;

    let investigation_a = snapshot_a.investigation.expect("investigation a");
    let innocent = investigation_a
        .suspects
        .iter()
        .map(|s| s.id)
        .find(|id| *id != criminal_a)
        .expect("an innocent suspect");

    let err = eliminate(&state, investigation_a.id, round_b, innocent)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation {
            code: ErrorCode::RoundMismatch,
            ..
        }
    ));
    Ok(())
}
