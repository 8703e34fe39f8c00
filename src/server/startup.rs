use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    storage::{rest::RestObjectStorage, ObjectStorage},
};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured filter is used.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the `cars`, `bookings` and `users` tables exist
/// before the first request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for storage requests.
///
/// Redirects are disabled so the service credential is never forwarded to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(crate::server::error::storage::StorageError::from)?;

    Ok(client)
}

/// Builds the object storage backend for uploaded images.
pub fn setup_storage(config: &Config, http_client: reqwest::Client) -> Arc<dyn ObjectStorage> {
    if config.storage_url.is_empty() || config.storage_service_key.is_empty() {
        tracing::warn!("STORAGE_URL or STORAGE_SERVICE_KEY is empty; image uploads will fail");
    }

    Arc::new(RestObjectStorage::new(
        http_client,
        &config.storage_url,
        config.storage_service_key.clone(),
        config.storage_bucket.clone(),
    ))
}

/// Logs a warning when tokens would be signed with an empty secret.
pub fn check_jwt_secret(config: &Config) {
    if config.jwt_secret.is_empty() {
        tracing::warn!("JWT_SECRET is empty; issued tokens are not secure");
    }
}
