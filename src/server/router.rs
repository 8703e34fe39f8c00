use axum::{
    extract::DefaultBodyLimit,
    http::{header::ALLOW, Method, StatusCode},
    middleware::map_response,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{CreateAdminDto, CreateAdminResponseDto, LoginDto, LoginResponseDto, UserDto},
        booking::{
            BookingCarDto, BookingDto, BookingListDto, BookingListItemDto, BookingResponseDto,
            BulkUpdateBookingDto, CreateBookingDto, UpdateBookingDto, UpdateBookingStatusDto,
        },
        car::{CarDto, CarInputDto, CarListDto, CarResponseDto},
        database::DatabaseStatusDto,
        field::ListField,
        upload::UploadResponseDto,
    },
    server::{
        controller::{auth, booking, car, database, upload},
        error::AppError,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Car Rental API"),
    tags(
        (name = "car", description = "Car listings"),
        (name = "booking", description = "Bookings"),
        (name = "upload", description = "Image uploads"),
        (name = "database", description = "Database bootstrap"),
        (name = "auth", description = "Administrator accounts and login")
    ),
    paths(
        car::get_cars,
        car::create_car,
        car::get_car_by_id,
        car::update_car,
        car::delete_car,
        booking::get_bookings,
        booking::create_booking,
        booking::update_booking_from_body,
        booking::get_booking_by_id,
        booking::update_booking,
        booking::delete_booking,
        booking::update_booking_status,
        booking::patch_booking_status,
        upload::upload_multiple,
        database::init_db,
        auth::create_admin,
        auth::login,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        ListField,
        CarDto,
        CarInputDto,
        CarListDto,
        CarResponseDto,
        BookingDto,
        BookingCarDto,
        BookingListItemDto,
        BookingListDto,
        BookingResponseDto,
        CreateBookingDto,
        UpdateBookingDto,
        BulkUpdateBookingDto,
        UpdateBookingStatusDto,
        UploadResponseDto,
        DatabaseStatusDto,
        UserDto,
        CreateAdminDto,
        CreateAdminResponseDto,
        LoginDto,
        LoginResponseDto,
    ))
)]
pub struct ApiDoc;

/// Builds every API route.
///
/// # Arguments
/// - `upload_body_limit` - Largest multipart body, in bytes, accepted by the image upload
pub fn router(upload_body_limit: usize) -> Router<AppState> {
    Router::new()
        .route("/api/cars", get(car::get_cars).post(car::create_car))
        .route(
            "/api/cars/{id}",
            get(car::get_car_by_id)
                .put(car::update_car)
                .delete(car::delete_car),
        )
        .route(
            "/api/bookings",
            get(booking::get_bookings)
                .post(booking::create_booking)
                .put(booking::update_booking_from_body),
        )
        .route(
            "/api/bookings/{id}",
            get(booking::get_booking_by_id)
                .put(booking::update_booking)
                .delete(booking::delete_booking),
        )
        .route(
            "/api/bookings/{id}/status",
            put(booking::update_booking_status).patch(booking::patch_booking_status),
        )
        .route(
            "/api/upload-multiple",
            post(upload::upload_multiple).layer(DefaultBodyLimit::max(upload_body_limit)),
        )
        .route("/api/init-db", post(database::init_db))
        .route("/api/create-admin", post(auth::create_admin))
        .route("/api/login", post(auth::login))
        .route("/api/openapi.json", get(openapi))
        .layer(map_response(method_not_allowed_as_json))
        .fallback(not_found)
}

/// Cross-origin policy: any origin, the methods the API serves, any header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers(Any)
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

/// Replaces axum's empty 405 body with the JSON error body, keeping the `Allow` header.
async fn method_not_allowed_as_json(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let mut json = AppError::MethodNotAllowed.into_response();
    if let Some(allow) = response.headers().get(ALLOW) {
        json.headers_mut().insert(ALLOW, allow.clone());
    }
    json
}
