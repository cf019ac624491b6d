//! Integration tests for starting and resuming games.

mod support;

use backend::db::txn::with_txn;
use backend::domain::rules::POOL_SIZE;
use backend::domain::InvestigationOutcome;
use backend::error::AppError;
use backend::errors::ErrorCode;
use backend::services::game_flow::GameFlowService;
use support::{build_test_state, seed_catalogue, TEST_MODEL};

#[tokio::test]
async fn new_game_starts_level_one_with_full_pool() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;

    let snapshot = with_txn(None, &state, |txn| {
        Box::pin(async move { GameFlowService.new_game(txn, "player-1", TEST_MODEL).await })
    })
    .await?;

    assert_eq!(snapshot.level, 1);
    assert_eq!(snapshot.score, 0);
    assert!(!snapshot.game_over);
    assert_eq!(snapshot.model, TEST_MODEL);

    let investigation = snapshot.investigation.expect("new game opens an investigation");
    assert_eq!(investigation.outcome, InvestigationOutcome::InProgress);
    assert_eq!(investigation.suspects.len(), POOL_SIZE);
    assert!(investigation.suspects.iter().all(|s| s.status.is_none()));

    // Exactly one round, with a question and no answer yet.
    assert_eq!(investigation.rounds.len(), 1);
    let round = &investigation.rounds[0];
    assert!(!round.question.is_empty());
    assert!(round.answer.is_none());
    assert!(round.eliminations.is_empty());

    Ok(())
}

#[tokio::test]
async fn new_game_rejects_empty_model() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;

    let err = with_txn(None, &state, |txn| {
        Box::pin(async move { GameFlowService.new_game(txn, "player-1", "  ").await })
    })
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        AppError::Validation {
            code: ErrorCode::EmptyModel,
            ..
        }
    ));
    Ok(())
}

#[tokio::test]
async fn new_game_requires_a_full_catalogue() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE - 1).await?;

    let err = with_txn(None, &state, |txn| {
        Box::pin(async move { GameFlowService.new_game(txn, "player-1", TEST_MODEL).await })
    })
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        AppError::Validation {
            code: ErrorCode::InsufficientSuspects,
            ..
        }
    ));
    Ok(())
}

#[tokio::test]
async fn current_game_returns_the_latest_game() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;

    let created = with_txn(None, &state, |txn| {
        Box::pin(async move { GameFlowService.new_game(txn, "player-1", TEST_MODEL).await })
    })
    .await?;

    let current = with_txn(None, &state, |txn| {
        Box::pin(async move { GameFlowService.current_game(txn, "player-1", "").await })
    })
    .await?;

    assert_eq!(current.game_id, created.game_id);
    Ok(())
}

#[tokio::test]
async fn current_game_bootstraps_for_a_new_player() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;

    // No game exists for this player; current_game must create one
    // instead of reporting not-found.
    let snapshot = with_txn(None, &state, |txn| {
        Box::pin(async move { GameFlowService.current_game(txn, "newcomer", TEST_MODEL).await })
    })
    .await?;

    assert_eq!(snapshot.level, 1);
    assert!(snapshot.investigation.is_some());
    Ok(())
}

#[tokio::test]
async fn current_game_bootstraps_even_without_a_model() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;

    // Resuming play is zero-friction: the bootstrap tolerates an empty
    // model, unlike the explicit new-game entry point.
    let snapshot = with_txn(None, &state, |txn| {
        Box::pin(async move { GameFlowService.current_game(txn, "newcomer", "").await })
    })
    .await?;

    assert_eq!(snapshot.level, 1);
    assert_eq!(snapshot.model, "");
    assert!(snapshot.investigation.is_some());
    Ok(())
}

#[tokio::test]
async fn next_round_appends_to_the_current_investigation() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move { GameFlowService.new_game(txn, "player-1", TEST_MODEL).await })
    })
    .await?;

    let snapshot = with_txn(None, &state, |txn| {
        Box::pin(async move { GameFlowService.next_round(txn, "player-1").await })
    })
    .await?;

    let investigation = snapshot.investigation.expect("investigation present");
    assert_eq!(investigation.rounds.len(), 2);
    assert!(investigation.rounds[1].answer.is_none());
    Ok(())
}

#[tokio::test]
async fn next_investigation_raises_the_level() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move { GameFlowService.new_game(txn, "player-1", TEST_MODEL).await })
    })
    .await?;

    let snapshot = with_txn(None, &state, |txn| {
        Box::pin(async move { GameFlowService.next_investigation(txn, "player-1").await })
    })
    .await?;

    assert_eq!(snapshot.level, 2);
    let investigation = snapshot.investigation.expect("fresh investigation");
    // The fresh investigation starts clean with its own first round.
    assert_eq!(investigation.rounds.len(), 1);
    assert_eq!(investigation.outcome, InvestigationOutcome::InProgress);
    Ok(())
}

#[tokio::test]
async fn next_round_for_unknown_player_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await;
    seed_catalogue(&state.db, POOL_SIZE).await?;

    let err = with_txn(None, &state, |txn| {
        Box::pin(async move { GameFlowService.next_round(txn, "nobody").await })
    })
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFound {
            code: ErrorCode::GameNotFound,
            ..
        }
    ));
    Ok(())
}
