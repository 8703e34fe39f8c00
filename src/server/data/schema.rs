//! Schema bootstrap and table probing.

use migration::{Migrator, MigratorTrait, SchemaManager, APPLICATION_TABLES};
use sea_orm::{DatabaseConnection, DbErr};

pub struct SchemaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchemaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies pending migrations. Existing tables are left in place.
    pub async fn migrate(&self) -> Result<(), DbErr> {
        Migrator::up(self.db, None).await
    }

    /// Reports whether each application table exists.
    ///
    /// # Returns
    /// - `Ok(Vec<(&str, bool)>)` - Table name and presence, in creation order
    /// - `Err(DbErr)` - Database error while inspecting the schema
    pub async fn probe_tables(&self) -> Result<Vec<(&'static str, bool)>, DbErr> {
        let manager = SchemaManager::new(self.db);
        let mut tables = Vec::with_capacity(APPLICATION_TABLES.len());

        for table in APPLICATION_TABLES {
            tables.push((table, manager.has_table(table).await?));
        }

        Ok(tables)
    }
}
