use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::generate::{AnswerGenerator, TemplateAnswerer};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection; all services run against this handle
    pub db: DatabaseConnection,
    /// Answer generation backend
    pub generator: Arc<dyn AnswerGenerator>,
}

impl AppState {
    /// Create a new AppState with the given database connection and the
    /// default template answerer
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            generator: Arc::new(TemplateAnswerer::new()),
        }
    }

    pub fn with_generator(db: DatabaseConnection, generator: Arc<dyn AnswerGenerator>) -> Self {
        Self { db, generator }
    }
}
