use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, database::DatabaseStatusDto},
    server::{error::AppError, service::database::DatabaseService, state::AppState},
};

/// Tag for grouping database endpoints in OpenAPI documentation
pub static DATABASE_TAG: &str = "database";

/// Create missing tables and report table status.
///
/// Safe to call repeatedly; existing tables and their rows are left untouched.
///
/// # Returns
/// - `200 OK` - Every table exists
/// - `500 Internal Server Error` - A table is still missing, or the database failed
#[utoipa::path(
    post,
    path = "/api/init-db",
    tag = DATABASE_TAG,
    responses(
        (status = 200, description = "Database ready", body = DatabaseStatusDto),
        (status = 500, description = "Database not ready", body = ErrorDto)
    ),
)]
pub async fn init_db(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = DatabaseService::new(&state.db);

    let tables = service.initialize().await?;
    let ready = tables.iter().all(|(_, present)| *present);

    let (status, message) = if ready {
        (StatusCode::OK, "Database initialized")
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Database initialization incomplete",
        )
    };

    Ok((
        status,
        Json(DatabaseStatusDto {
            success: ready,
            message: message.to_string(),
            tables: tables
                .into_iter()
                .map(|(name, present)| (name.to_string(), present))
                .collect(),
        }),
    ))
}
