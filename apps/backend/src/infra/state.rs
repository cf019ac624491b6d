use std::sync::Arc;

use crate::config::db::{DbOwner, DbProfile};
use crate::error::AppError;
use crate::generate::AnswerGenerator;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
    generator: Option<Arc<dyn AnswerGenerator>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_profile: None,
            generator: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_generator(mut self, generator: Arc<dyn AnswerGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let profile = self
            .db_profile
            .ok_or_else(|| AppError::config("StateBuilder requires a database profile"))?;

        // single entrypoint: build + migrate
        let conn = bootstrap_db(profile, DbOwner::App).await?;
        Ok(match self.generator {
            Some(generator) => AppState::with_generator(conn, generator),
            None => AppState::new(conn),
        })
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
