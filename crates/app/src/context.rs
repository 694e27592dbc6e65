//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database,
    domain::widgets::{PgWidgetsService, WidgetsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub widgets: Arc<dyn WidgetsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(widgets: Arc<dyn WidgetsService>) -> Self {
        Self { widgets }
    }

    /// Build application context from a database URL, applying migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or migrating the database fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        Ok(Self::new(Arc::new(PgWidgetsService::new(pool))))
    }
}
