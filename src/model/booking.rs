use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
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
    /// One of `pending`, `confirmed`, `cancelled`, `completed`, or empty.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Summary of the car a booking refers to, as joined onto booking listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingCarDto {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub price_per_day: Option<f64>,
    pub images: Vec<String>,
}

/// One row of a booking listing.
///
/// When the referenced car could not be attached the row is still returned, with
/// `cars` set to null and `error` describing what went wrong.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingListItemDto {
    #[serde(flatten)]
    pub booking: BookingDto,
    pub cars: Option<BookingCarDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingListDto {
    pub success: bool,
    pub bookings: Vec<BookingListItemDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingResponseDto {
    pub success: bool,
    pub booking: BookingDto,
}

/// Request body for creating a booking.
///
/// Every field is optional at the wire level; the service reports all missing required
/// fields at once. Dates are accepted as RFC 3339, `YYYY-MM-DDTHH:MM[:SS]` or `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingDto {
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub pickup_date: Option<String>,
    pub dropoff_date: Option<String>,
    pub passengers: Option<i32>,
    pub car_id: Option<i32>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

/// Partial booking update; only the fields present are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookingDto {
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub pickup_date: Option<String>,
    pub dropoff_date: Option<String>,
    pub passengers: Option<i32>,
    pub car_id: Option<i32>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

/// Update request carrying the booking ID in the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BulkUpdateBookingDto {
    pub id: Option<i32>,
    #[serde(flatten)]
    pub changes: UpdateBookingDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookingStatusDto {
    pub status: Option<String>,
}

/// Query string filters for listing bookings.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BookingFilterQuery {
    /// Inclusive lower bound on the pickup date.
    pub start_date: Option<String>,
    /// Inclusive upper bound on the pickup date.
    pub end_date: Option<String>,
    /// Exact status match; `all` disables the filter.
    pub status: Option<String>,
}
