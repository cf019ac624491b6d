//! Game-related HTTP routes.
//!
//! The engine's public surface mirrors how a client drives a game: start
//! or resume, open investigations and rounds, eliminate suspects and
//! follow the answer of the current round.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::game_flow::{AnswerWait, GameFlowService};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct PlayerQuery {
    player_id: String,
    /// Generation model; only consulted when a game has to be created.
    #[serde(default)]
    model: String,
}

#[derive(Debug, Deserialize)]
struct EliminateQuery {
    investigation_id: Uuid,
    round_id: Uuid,
    suspect_id: Uuid,
}

#[derive(Debug, Deserialize)]
struct AnswerBody {
    answer: String,
}

/// POST /api/games/new
async fn new_game(
    http_req: HttpRequest,
    query: web::Query<PlayerQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let snapshot = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            GameFlowService
                .new_game(txn, &query.player_id, &query.model)
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(snapshot))
}

/// GET /api/games/current
///
/// Never a 404: a player without a game gets a fresh one.
async fn current_game(
    http_req: HttpRequest,
    query: web::Query<PlayerQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let snapshot = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            GameFlowService
                .current_game(txn, &query.player_id, &query.model)
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(snapshot))
}

/// POST /api/games/next-investigation
async fn next_investigation(
    http_req: HttpRequest,
    query: web::Query<PlayerQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let snapshot = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { GameFlowService.next_investigation(txn, &query.player_id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(snapshot))
}

/// POST /api/games/next-round
async fn next_round(
    http_req: HttpRequest,
    query: web::Query<PlayerQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let snapshot = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { GameFlowService.next_round(txn, &query.player_id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(snapshot))
}

/// POST /api/games/eliminate
async fn eliminate(
    http_req: HttpRequest,
    query: web::Query<EliminateQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let response = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let outcome = GameFlowService
                .eliminate_suspect(txn, query.investigation_id, query.round_id, query.suspect_id)
                .await?;
            let snapshot = GameFlowService.snapshot_for_game(txn, &outcome.game).await?;
            Ok(serde_json::json!({
                "score_delta": outcome.score_delta,
                "outcome": outcome.outcome,
                "snapshot": snapshot,
            }))
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// POST /api/games/rounds/{round_id}/answer
async fn record_answer(
    http_req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<AnswerBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let round_id = path.into_inner();
    let body = body.into_inner();
    let recorded = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { GameFlowService.record_answer(txn, round_id, &body.answer).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "recorded": recorded })))
}

/// POST /api/games/rounds/{round_id}/answer/generate
async fn generate_answer(
    http_req: HttpRequest,
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let round_id = path.into_inner();
    let generator = app_state.generator.clone();
    let answer = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            GameFlowService
                .generate_and_record_answer(txn, generator.as_ref(), round_id)
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "answer": answer })))
}

/// GET /api/games/rounds/{round_id}/answer
///
/// Bounded poll on a plain connection; dropping the request cancels it.
async fn wait_for_answer(
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let round_id = path.into_inner();
    let answer = GameFlowService
        .wait_for_answer(&app_state.db, round_id, AnswerWait::default())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "answer": answer })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/new", web::post().to(new_game))
        .route("/current", web::get().to(current_game))
        .route("/next-investigation", web::post().to(next_investigation))
        .route("/next-round", web::post().to(next_round))
        .route("/eliminate", web::post().to(eliminate))
        .route("/rounds/{round_id}/answer", web::post().to(record_answer))
        .route(
            "/rounds/{round_id}/answer/generate",
            web::post().to(generate_answer),
        )
        .route("/rounds/{round_id}/answer", web::get().to(wait_for_answer));
}
