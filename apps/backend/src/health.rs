use actix_web::{web, HttpResponse};

use crate::error::AppError;

async fn health() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("ok"))
}

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}
