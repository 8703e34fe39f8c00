//! Booking domain models and parameters.
//!
//! Covers the booking record itself, the car summary joined onto listings, status
//! validation and the validated parameter types for create, update and listing.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{
    model::booking::{
        BookingCarDto, BookingDto, BookingFilterQuery, BookingListItemDto, CreateBookingDto,
        UpdateBookingDto,
    },
    server::{
        error::{validation::ValidationError, AppError},
        util::{json_field, parse::parse_date_input},
    },
};

/// Lifecycle state of a booking. Any state may move to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
        BookingStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }

    /// Every value accepted by the status endpoint, the empty string included.
    pub fn valid_values() -> Vec<String> {
        Self::ALL
            .iter()
            .map(|status| status.as_str().to_string())
            .chain(std::iter::once(String::new()))
            .collect()
    }
}

/// Requested change to the status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// Leave the stored status untouched.
    Keep,
    Set(BookingStatus),
}

impl StatusChange {
    /// Parses a requested status; the empty string means "keep".
    ///
    /// # Returns
    /// - `Ok(StatusChange)` - One of the four states, or `Keep` for `""`
    /// - `Err(ValidationError::InvalidValue)` - Any other value, with the allowed set
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Ok(Self::Keep);
        }

        BookingStatus::parse(value)
            .map(Self::Set)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "status".to_string(),
                value: value.to_string(),
                allowed: BookingStatus::valid_values(),
            })
    }
}

/// Stored booking.
///
/// `status` is kept as stored; writes go through `StatusChange` so it holds one of the
/// allowed values.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: NaiveDateTime,
    pub dropoff_date: Option<NaiveDateTime>,
    pub passengers: Option<i32>,
    pub car_id: Option<i32>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            pickup_location: entity.pickup_location,
            dropoff_location: entity.dropoff_location,
            pickup_date: entity.pickup_date,
            dropoff_date: entity.dropoff_date,
            passengers: entity.passengers,
            car_id: entity.car_id,
            full_name: entity.full_name,
            email: entity.email,
            phone: entity.phone,
            notes: entity.notes,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            pickup_location: self.pickup_location,
            dropoff_location: self.dropoff_location,
            pickup_date: self.pickup_date,
            dropoff_date: self.dropoff_date,
            passengers: self.passengers,
            car_id: self.car_id,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            notes: self.notes,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Car summary attached to booking listings.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingCar {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub price_per_day: Option<f64>,
    pub images: Vec<String>,
}

impl BookingCar {
    pub fn from_entity(entity: entity::car::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            category: entity.category,
            price_per_day: entity.price_per_day,
            images: json_field::decode(entity.images.as_deref()),
        }
    }

    pub fn into_dto(self) -> BookingCarDto {
        BookingCarDto {
            id: self.id,
            name: self.name,
            category: self.category,
            price_per_day: self.price_per_day,
            images: self.images,
        }
    }
}

/// One listing row: the booking, its car when it could be attached, and the reason
/// when it could not.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingListItem {
    pub booking: Booking,
    pub car: Option<BookingCar>,
    pub error: Option<String>,
}

impl BookingListItem {
    /// Builds a listing row from a booking and its left-joined car.
    ///
    /// A booking that references a car which no longer resolves is kept, with the car
    /// left empty and an error annotation, so one bad row never fails the listing.
    pub fn from_joined(booking: entity::booking::Model, car: Option<entity::car::Model>) -> Self {
        let (car, error) = match (booking.car_id, car) {
            (_, Some(car)) => (Some(BookingCar::from_entity(car)), None),
            (Some(car_id), None) => (None, Some(format!("Car {} not found", car_id))),
            (None, None) => (None, None),
        };

        Self {
            booking: Booking::from_entity(booking),
            car,
            error,
        }
    }

    pub fn into_dto(self) -> BookingListItemDto {
        BookingListItemDto {
            booking: self.booking.into_dto(),
            cars: self.car.map(BookingCar::into_dto),
            error: self.error,
        }
    }
}

/// Validated input for a new booking.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookingParams {
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: NaiveDateTime,
    pub dropoff_date: Option<NaiveDateTime>,
    pub passengers: Option<i32>,
    pub car_id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub notes: Option<String>,
    pub status: BookingStatus,
}

impl CreateBookingParams {
    /// Validates a create request.
    ///
    /// All of pickup_location, dropoff_location, pickup_date, car_id, full_name, email and
    /// phone are required and reported together when missing. Status defaults to
    /// `pending` when absent or empty.
    ///
    /// # Returns
    /// - `Ok(CreateBookingParams)` - Validated input
    /// - `Err(AppError::ValidationErr)` - Missing fields or unknown status
    /// - `Err(AppError::BadRequest)` - Unparseable date
    pub fn from_dto(dto: CreateBookingDto) -> Result<Self, AppError> {
        let presence = [
            ("pickup_location", is_present(&dto.pickup_location)),
            ("dropoff_location", is_present(&dto.dropoff_location)),
            ("pickup_date", is_present(&dto.pickup_date)),
            ("car_id", dto.car_id.is_some()),
            ("full_name", is_present(&dto.full_name)),
            ("email", is_present(&dto.email)),
            ("phone", is_present(&dto.phone)),
        ];

        let (
            Some(pickup_location),
            Some(dropoff_location),
            Some(pickup_date),
            Some(car_id),
            Some(full_name),
            Some(email),
            Some(phone),
        ) = (
            non_blank(dto.pickup_location),
            non_blank(dto.dropoff_location),
            non_blank(dto.pickup_date),
            dto.car_id,
            non_blank(dto.full_name),
            non_blank(dto.email),
            non_blank(dto.phone),
        )
        else {
            return Err(ValidationError::missing(&presence).into());
        };

        let status = match StatusChange::parse(dto.status.as_deref().unwrap_or_default())? {
            StatusChange::Keep => BookingStatus::Pending,
            StatusChange::Set(status) => status,
        };

        Ok(Self {
            pickup_location,
            dropoff_location,
            pickup_date: parse_date_input(&pickup_date, "pickup_date")?.start(),
            dropoff_date: parse_optional_date(dto.dropoff_date, "dropoff_date")?,
            passengers: dto.passengers,
            car_id,
            full_name,
            email,
            phone,
            notes: dto.notes,
            status,
        })
    }
}

/// Validated partial update; `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBookingParams {
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub pickup_date: Option<NaiveDateTime>,
    pub dropoff_date: Option<NaiveDateTime>,
    pub passengers: Option<i32>,
    pub car_id: Option<i32>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub status: StatusChange,
}

impl UpdateBookingParams {
    /// Validates an update request.
    ///
    /// # Returns
    /// - `Ok(UpdateBookingParams)` - Validated changes
    /// - `Err(AppError::ValidationErr)` - Unknown status
    /// - `Err(AppError::BadRequest)` - Unparseable date
    pub fn from_dto(dto: UpdateBookingDto) -> Result<Self, AppError> {
        let status = match dto.status.as_deref() {
            Some(status) => StatusChange::parse(status)?,
            None => StatusChange::Keep,
        };

        Ok(Self {
            pickup_location: dto.pickup_location,
            dropoff_location: dto.dropoff_location,
            pickup_date: parse_optional_date(dto.pickup_date, "pickup_date")?,
            dropoff_date: parse_optional_date(dto.dropoff_date, "dropoff_date")?,
            passengers: dto.passengers,
            car_id: dto.car_id,
            full_name: dto.full_name,
            email: dto.email,
            phone: dto.phone,
            notes: dto.notes,
            status,
        })
    }

    /// An update that only refreshes `updated_at` and optionally sets the status.
    pub fn status_only(status: StatusChange) -> Self {
        Self {
            pickup_location: None,
            dropoff_location: None,
            pickup_date: None,
            dropoff_date: None,
            passengers: None,
            car_id: None,
            full_name: None,
            email: None,
            phone: None,
            notes: None,
            status,
        }
    }
}

/// Filters for listing bookings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFilter {
    /// Inclusive lower bound on pickup date.
    pub pickup_from: Option<NaiveDateTime>,
    /// Inclusive upper bound on pickup date.
    pub pickup_until: Option<NaiveDateTime>,
    /// Exact status match.
    pub status: Option<String>,
}

impl BookingFilter {
    /// Builds filters from the query string.
    ///
    /// Blank values are ignored and `status=all` disables status filtering. A bare date
    /// as `endDate` includes the whole day.
    pub fn from_query(query: BookingFilterQuery) -> Result<Self, AppError> {
        let pickup_from = match non_blank(query.start_date) {
            Some(value) => Some(parse_date_input(&value, "startDate")?.start()),
            None => None,
        };
        let pickup_until = match non_blank(query.end_date) {
            Some(value) => Some(parse_date_input(&value, "endDate")?.end()),
            None => None,
        };

        Ok(Self {
            pickup_from,
            pickup_until,
            status: non_blank(query.status).filter(|status| status != "all"),
        })
    }
}

fn parse_optional_date(
    value: Option<String>,
    field: &str,
) -> Result<Option<NaiveDateTime>, AppError> {
    match non_blank(value) {
        Some(value) => Ok(Some(parse_date_input(&value, field)?.start())),
        None => Ok(None),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
