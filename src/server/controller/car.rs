use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        car::{CarInputDto, CarListDto, CarResponseDto},
    },
    server::{
        error::AppError,
        model::car::{Car, CarParams, CarUpdate},
        service::car::CarService,
        state::AppState,
        util::{extract::JsonBody, parse::parse_id},
    },
};

/// Tag for grouping car endpoints in OpenAPI documentation
pub static CAR_TAG: &str = "car";

/// List all cars.
///
/// Returns every car listing, newest first, with `images` and `features` decoded
/// into arrays.
///
/// # Returns
/// - `200 OK` - All cars
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cars",
    tag = CAR_TAG,
    responses(
        (status = 200, description = "Successfully retrieved cars", body = CarListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cars(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CarService::new(&state.db);

    let cars = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(CarListDto {
            success: true,
            cars: cars.into_iter().map(Car::into_dto).collect(),
        }),
    ))
}

/// Create a car.
///
/// Requires non-blank `name` and `category`. `images` and `features` may be sent as
/// arrays or as raw strings.
///
/// # Returns
/// - `201 Created` - The stored car
/// - `400 Bad Request` - Missing `name` or `category`, or malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cars",
    tag = CAR_TAG,
    request_body = CarInputDto,
    responses(
        (status = 201, description = "Successfully created car", body = CarResponseDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_car(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CarInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarService::new(&state.db);

    let params = CarParams::for_create(payload)?;
    let car = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CarResponseDto {
            success: true,
            message: None,
            car: car.into_dto(),
        }),
    ))
}

/// Get a car by ID.
///
/// # Returns
/// - `200 OK` - The car
/// - `400 Bad Request` - ID is not numeric
/// - `404 Not Found` - No car with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved car", body = CarResponseDto),
        (status = 400, description = "Invalid car ID", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_car_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "car")?;
    let service = CarService::new(&state.db);

    let car = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(CarResponseDto {
            success: true,
            message: None,
            car: car.into_dto(),
        }),
    ))
}

/// Replace a car.
///
/// Same validation as creation; blank feature entries are dropped. Resubmitting the
/// values already stored writes nothing and succeeds with a "No changes made" message.
///
/// # Returns
/// - `200 OK` - The car after the update
/// - `400 Bad Request` - Invalid ID or missing required fields
/// - `404 Not Found` - No car with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    request_body = CarInputDto,
    responses(
        (status = 200, description = "Successfully updated car", body = CarResponseDto),
        (status = 400, description = "Invalid car ID or missing required fields", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<CarInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "car")?;
    let service = CarService::new(&state.db);

    let params = CarParams::for_update(payload)?;
    let update = service
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

    let (car, message) = match update {
        CarUpdate::Updated(car) => (car, None),
        CarUpdate::Unchanged(car) => (car, Some("No changes made".to_string())),
    };

    Ok((
        StatusCode::OK,
        Json(CarResponseDto {
            success: true,
            message,
            car: car.into_dto(),
        }),
    ))
}

/// Delete a car.
///
/// Succeeds whether or not the car existed.
///
/// # Returns
/// - `200 OK` - Car deleted
/// - `400 Bad Request` - ID is not numeric
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted car", body = MessageDto),
        (status = 400, description = "Invalid car ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "car")?;
    let service = CarService::new(&state.db);

    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::success("Car deleted successfully")),
    ))
}
