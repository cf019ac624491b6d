use actix_web::web;

pub mod games;
pub mod scores;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// In production, `main.rs` wires these under the same scopes with CORS
/// and request tracing; tests register the same paths without those
/// wrappers so endpoint behavior can be exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(crate::health::configure));

    // Game routes: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));

    // High-score routes: /api/scores/**
    cfg.service(web::scope("/api/scores").configure(scores::configure_routes));
}
