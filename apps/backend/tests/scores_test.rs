//! Integration tests for the high-score table.

mod support;

use backend::db::txn::with_txn;
use backend::error::AppError;
use backend::repos::games::{self, GameCreate};
use backend::services::scores::ScoreService;
use support::{build_test_state, TEST_MODEL};

#[tokio::test]
async fn scores_are_ranked_best_first() -> Result<(), AppError> {
    let state = build_test_state().await;

    let ids = with_txn(None, &state, |txn| {
        Box::pin(async move {
            let mut ids = Vec::new();
            for (name, score) in [("amber", 5), ("bruno", 12), ("carla", 3)] {
                let game = games::create_game(
                    txn,
                    GameCreate {
                        player_id: name.to_string(),
                        investigator: name.to_string(),
                        model: TEST_MODEL.to_string(),
                    },
                )
                .await?;
                let game = games::add_score(txn, game.id, score, game.lock_version).await?;
                ids.push(game.id);
            }
            Ok::<_, AppError>(ids)
        })
    })
    .await?;

    let entries = ScoreService.list_scores(&state.db).await?;
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].position, 1);
    assert_eq!(entries[0].game_id, ids[1]); // bruno, 12
    assert_eq!(entries[0].score, 12);
    assert_eq!(entries[1].score, 5);
    assert_eq!(entries[2].score, 3);
    Ok(())
}

#[tokio::test]
async fn player_name_is_saved_and_trimmed() -> Result<(), AppError> {
    let state = build_test_state().await;

    let game = with_txn(None, &state, |txn| {
        Box::pin(async move {
            games::create_game(
                txn,
                GameCreate {
                    player_id: "p".to_string(),
                    investigator: String::new(),
                    model: TEST_MODEL.to_string(),
                },
            )
            .await
            .map_err(AppError::from)
        })
    })
    .await?;

    let game_id = game.id;
    let updated = with_txn(None, &state, |txn| {
        Box::pin(async move {
            ScoreService
                .save_player_name(txn, game_id, "  Hercule  ")
                .await
        })
    })
    .await?;
    assert_eq!(updated.investigator, "Hercule");

    let err = with_txn(None, &state, |txn| {
        Box::pin(async move { ScoreService.save_player_name(txn, game_id, "   ").await })
    })
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
    Ok(())
}
