use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{CreateAdminDto, CreateAdminResponseDto, LoginDto, LoginResponseDto},
    },
    server::{
        error::AppError,
        model::user::{CreateAdminParams, LoginParams},
        service::auth::{AdminAccount, AuthService},
        state::AppState,
        util::extract::JsonBody,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Create an administrator account.
///
/// Idempotent: when a user with the same username or email exists it is returned
/// unchanged with `200 OK`.
///
/// # Returns
/// - `201 Created` - New administrator stored
/// - `200 OK` - Matching administrator already existed
/// - `400 Bad Request` - Missing username, password or email
/// - `500 Internal Server Error` - Hashing or database error
#[utoipa::path(
    post,
    path = "/api/create-admin",
    tag = AUTH_TAG,
    request_body = CreateAdminDto,
    responses(
        (status = 201, description = "Administrator created", body = CreateAdminResponseDto),
        (status = 200, description = "Administrator already exists", body = CreateAdminResponseDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_admin(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt_secret);

    let params = CreateAdminParams::from_dto(payload)?;

    let (status, message, user) = match service.create_admin(params).await? {
        AdminAccount::Created(user) => (StatusCode::CREATED, "Admin user created", user),
        AdminAccount::Existing(user) => (StatusCode::OK, "Admin user already exists", user),
    };

    Ok((
        status,
        Json(CreateAdminResponseDto {
            success: true,
            message: message.to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// Log in with username and password.
///
/// Returns a signed token valid for 24 hours. Unknown usernames and wrong passwords
/// produce the same response.
///
/// # Returns
/// - `200 OK` - Token and user details
/// - `400 Bad Request` - Missing username or password
/// - `401 Unauthorized` - Invalid credentials
/// - `500 Internal Server Error` - Token or database error
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = LoginResponseDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt_secret);

    let params = LoginParams::from_dto(payload)?;
    let (token, user) = service.login(params).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            success: true,
            token,
            user: user.into_dto(),
        }),
    ))
}
