use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{
            BookingFilterQuery, BookingListDto, BookingResponseDto, BulkUpdateBookingDto,
            CreateBookingDto, UpdateBookingDto, UpdateBookingStatusDto,
        },
    },
    server::{
        error::AppError,
        model::booking::{
            Booking, BookingFilter, BookingListItem, CreateBookingParams, StatusChange,
            UpdateBookingParams,
        },
        service::booking::BookingService,
        state::AppState,
        util::{extract::JsonBody, parse::parse_id},
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

fn booking_response(booking: Booking) -> Json<BookingResponseDto> {
    Json(BookingResponseDto {
        success: true,
        booking: booking.into_dto(),
    })
}

fn booking_not_found() -> AppError {
    AppError::NotFound("Booking not found".to_string())
}

/// List bookings.
///
/// Each booking carries a summary of its car under `cars`. A booking whose car cannot
/// be attached is still listed, with `cars` null and an `error` note.
///
/// # Arguments
/// - `query` - Optional `startDate`, `endDate` (inclusive, on pickup date) and `status`
///   (`all` disables the filter)
///
/// # Returns
/// - `200 OK` - Matching bookings, newest first
/// - `400 Bad Request` - Malformed date filter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    params(BookingFilterQuery),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = BookingListDto),
        (status = 400, description = "Invalid date filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    Query(query): Query<BookingFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let filter = BookingFilter::from_query(query)?;
    let bookings = service.get_filtered(filter).await?;

    Ok((
        StatusCode::OK,
        Json(BookingListDto {
            success: true,
            bookings: bookings.into_iter().map(BookingListItem::into_dto).collect(),
        }),
    ))
}

/// Create a booking.
///
/// Requires pickup_location, dropoff_location, pickup_date, car_id, full_name, email and
/// phone; every missing field is listed in the error. Status defaults to `pending`.
///
/// # Returns
/// - `201 Created` - The stored booking
/// - `400 Bad Request` - Missing fields, invalid status or malformed date
/// - `500 Internal Server Error` - Database error, including unknown car references
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = BookingResponseDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let params = CreateBookingParams::from_dto(payload)?;
    let booking = service.create(params).await?;

    Ok((StatusCode::CREATED, booking_response(booking)))
}

/// Update a booking identified in the body.
///
/// Merges the provided fields and refreshes `updated_at`.
///
/// # Returns
/// - `200 OK` - The booking after the update
/// - `400 Bad Request` - Missing `id`, invalid status or malformed date
/// - `404 Not Found` - No booking with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = BulkUpdateBookingDto,
    responses(
        (status = 200, description = "Successfully updated booking", body = BookingResponseDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking_from_body(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<BulkUpdateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = payload
        .id
        .ok_or_else(|| AppError::BadRequest("Booking ID is required".to_string()))?;
    let service = BookingService::new(&state.db);

    let params = UpdateBookingParams::from_dto(payload.changes)?;
    let booking = service
        .update(id, params)
        .await?
        .ok_or_else(booking_not_found)?;

    Ok((StatusCode::OK, booking_response(booking)))
}

/// Get a booking by ID.
///
/// # Returns
/// - `200 OK` - The booking
/// - `400 Bad Request` - ID is not numeric
/// - `404 Not Found` - No booking with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved booking", body = BookingResponseDto),
        (status = 400, description = "Invalid booking ID", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "booking")?;
    let service = BookingService::new(&state.db);

    let booking = service
        .get_by_id(id)
        .await?
        .ok_or_else(booking_not_found)?;

    Ok((StatusCode::OK, booking_response(booking)))
}

/// Update a booking by ID.
///
/// # Returns
/// - `200 OK` - The booking after the update
/// - `400 Bad Request` - Invalid ID, invalid status or malformed date
/// - `404 Not Found` - No booking with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Successfully updated booking", body = BookingResponseDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "booking")?;
    let service = BookingService::new(&state.db);

    let params = UpdateBookingParams::from_dto(payload)?;
    let booking = service
        .update(id, params)
        .await?
        .ok_or_else(booking_not_found)?;

    Ok((StatusCode::OK, booking_response(booking)))
}

/// Delete a booking.
///
/// Succeeds whether or not the booking existed.
///
/// # Returns
/// - `200 OK` - Booking deleted
/// - `400 Bad Request` - ID is not numeric
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted booking", body = MessageDto),
        (status = 400, description = "Invalid booking ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "booking")?;
    let service = BookingService::new(&state.db);

    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::success("Booking deleted successfully")),
    ))
}

/// Set a booking's status.
///
/// Accepts `pending`, `confirmed`, `cancelled`, `completed` or the empty string. The
/// empty string leaves the status as stored and only refreshes `updated_at`.
///
/// # Returns
/// - `200 OK` - The booking after the update
/// - `400 Bad Request` - Invalid ID, missing status, or a status outside the allowed set
///   (echoed as `validValues`)
/// - `404 Not Found` - No booking with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/bookings/{id}/status",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Successfully updated booking status", body = BookingResponseDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    set_status(&state, &id, payload).await
}

/// Set a booking's status (PATCH form).
///
/// Behaves exactly like the PUT form.
#[utoipa::path(
    patch,
    path = "/api/bookings/{id}/status",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Successfully updated booking status", body = BookingResponseDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_booking_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    set_status(&state, &id, payload).await
}

async fn set_status(
    state: &AppState,
    id: &str,
    payload: UpdateBookingStatusDto,
) -> Result<(StatusCode, Json<BookingResponseDto>), AppError> {
    let id = parse_id(id, "booking")?;
    let status = payload
        .status
        .ok_or_else(|| AppError::BadRequest("Status is required".to_string()))?;
    let change = StatusChange::parse(&status)?;

    let service = BookingService::new(&state.db);
    let booking = service
        .update_status(id, change)
        .await?
        .ok_or_else(booking_not_found)?;

    Ok((StatusCode::OK, booking_response(booking)))
}
