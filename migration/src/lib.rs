pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_cars_table;
mod m20260301_000002_create_bookings_table;
mod m20260301_000003_create_users_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_cars_table::Migration),
            Box::new(m20260301_000002_create_bookings_table::Migration),
            Box::new(m20260301_000003_create_users_table::Migration),
        ]
    }
}

/// Names of the tables the application expects to exist, in creation order.
pub const APPLICATION_TABLES: [&str; 3] = ["cars", "bookings", "users"];
