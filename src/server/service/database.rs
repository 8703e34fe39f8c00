use sea_orm::DatabaseConnection;

use crate::server::{data::schema::SchemaRepository, error::AppError};

pub struct DatabaseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DatabaseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates any missing tables and reports which tables exist afterwards.
    ///
    /// # Returns
    /// - `Ok(Vec<(&str, bool)>)` - Presence of each application table
    /// - `Err(AppError::DbErr)` - Migration or schema inspection failed
    pub async fn initialize(&self) -> Result<Vec<(&'static str, bool)>, AppError> {
        let repo = SchemaRepository::new(self.db);

        repo.migrate().await?;
        let tables = repo.probe_tables().await?;

        let missing: Vec<&str> = tables
            .iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            tracing::warn!("Tables missing after initialization: {}", missing.join(", "));
        }

        Ok(tables)
    }
}
