//! Booking factory for creating test booking entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let booking = BookingFactory::new(&db, Some(car.id))
///     .status("confirmed")
///     .pickup_date(date_time(2026, 5, 1, 10))
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    car_id: Option<i32>,
    full_name: String,
    email: String,
    pickup_date: NaiveDateTime,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - full_name: `"Customer {id}"`
    /// - email: `"customer{id}@example.com"`
    /// - pickup_date: 2026-06-01 10:00
    /// - status: `"pending"`
    pub fn new(db: &'a DatabaseConnection, car_id: Option<i32>) -> Self {
        let id = next_id();
        Self {
            db,
            car_id,
            full_name: format!("Customer {}", id),
            email: format!("customer{}@example.com", id),
            pickup_date: date_time(2026, 6, 1, 10),
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn pickup_date(mut self, pickup_date: NaiveDateTime) -> Self {
        self.pickup_date = pickup_date;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            pickup_location: ActiveValue::Set("Airport".to_string()),
            dropoff_location: ActiveValue::Set("City Centre".to_string()),
            pickup_date: ActiveValue::Set(self.pickup_date),
            dropoff_date: ActiveValue::Set(Some(self.pickup_date + chrono::Duration::days(3))),
            passengers: ActiveValue::Set(Some(2)),
            car_id: ActiveValue::Set(self.car_id),
            full_name: ActiveValue::Set(self.full_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set("+1 555 0100".to_string()),
            notes: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking for the given car with default values.
pub async fn create_booking(
    db: &DatabaseConnection,
    car_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, Some(car_id)).build().await
}

/// Builds a naive date-time at the start of the given hour.
///
/// Panics on an out-of-range date, which only test code constructs.
pub fn date_time(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("valid test date")
}
