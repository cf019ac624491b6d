//! High-score table routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::scores::ScoreService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct NameBody {
    name: String,
}

/// GET /api/scores
async fn list_scores(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let entries = ScoreService.list_scores(&app_state.db).await?;
    Ok(HttpResponse::Ok().json(entries))
}

/// POST /api/scores/{game_id}/name
async fn save_player_name(
    http_req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<NameBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();
    let body = body.into_inner();
    let game = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { ScoreService.save_player_name(txn, game_id, &body.name).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "game_id": game.id,
        "investigator": game.investigator,
        "score": game.score,
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_scores))
        .route("/{game_id}/name", web::post().to(save_player_name));
}
