//! Booking data repository for database operations.
//!
//! Provides the `BookingRepository` for creating, listing, updating and deleting bookings.
//! Listings join each booking to its car in one query.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::booking::{
    Booking, BookingFilter, BookingListItem, CreateBookingParams, StatusChange,
    UpdateBookingParams,
};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets bookings matching the filter, each joined to its car.
    ///
    /// Pickup date bounds are inclusive. Rows are ordered newest first with the ID as a
    /// tiebreaker.
    ///
    /// # Arguments
    /// - `filter` - Optional pickup date range and status
    ///
    /// # Returns
    /// - `Ok(Vec<BookingListItem>)` - Matching bookings with car summaries attached
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_filtered(&self, filter: BookingFilter) -> Result<Vec<BookingListItem>, DbErr> {
        let mut query = entity::prelude::Booking::find();

        if let Some(from) = filter.pickup_from {
            query = query.filter(entity::booking::Column::PickupDate.gte(from));
        }
        if let Some(until) = filter.pickup_until {
            query = query.filter(entity::booking::Column::PickupDate.lte(until));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::booking::Column::Status.eq(status));
        }

        let rows = query
            .find_also_related(entity::prelude::Car)
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(booking, car)| BookingListItem::from_joined(booking, car))
            .collect())
    }

    /// Inserts a booking and returns the stored row.
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, DbErr> {
        let now = Utc::now();

        let entity = entity::booking::ActiveModel {
            pickup_location: ActiveValue::Set(params.pickup_location),
            dropoff_location: ActiveValue::Set(params.dropoff_location),
            pickup_date: ActiveValue::Set(params.pickup_date),
            dropoff_date: ActiveValue::Set(params.dropoff_date),
            passengers: ActiveValue::Set(params.passengers),
            car_id: ActiveValue::Set(Some(params.car_id)),
            full_name: ActiveValue::Set(params.full_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            notes: ActiveValue::Set(params.notes),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    /// Finds a booking by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking found
    /// - `Ok(None)` - No booking with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Writes the provided fields and refreshes `updated_at`.
    ///
    /// Fields that are `None` in `params` keep their stored value, as does the status
    /// when `params.status` is `StatusChange::Keep`.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The booking after the update
    /// - `Ok(None)` - No booking with that ID
    /// - `Err(DbErr)` - Database error during update or refetch
    pub async fn update(
        &self,
        id: i32,
        params: UpdateBookingParams,
    ) -> Result<Option<Booking>, DbErr> {
        let mut changes = entity::booking::ActiveModel {
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        if let Some(pickup_location) = params.pickup_location {
            changes.pickup_location = ActiveValue::Set(pickup_location);
        }
        if let Some(dropoff_location) = params.dropoff_location {
            changes.dropoff_location = ActiveValue::Set(dropoff_location);
        }
        if let Some(pickup_date) = params.pickup_date {
            changes.pickup_date = ActiveValue::Set(pickup_date);
        }
        if let Some(dropoff_date) = params.dropoff_date {
            changes.dropoff_date = ActiveValue::Set(Some(dropoff_date));
        }
        if let Some(passengers) = params.passengers {
            changes.passengers = ActiveValue::Set(Some(passengers));
        }
        if let Some(car_id) = params.car_id {
            changes.car_id = ActiveValue::Set(Some(car_id));
        }
        if let Some(full_name) = params.full_name {
            changes.full_name = ActiveValue::Set(full_name);
        }
        if let Some(email) = params.email {
            changes.email = ActiveValue::Set(email);
        }
        if let Some(phone) = params.phone {
            changes.phone = ActiveValue::Set(phone);
        }
        if let Some(notes) = params.notes {
            changes.notes = ActiveValue::Set(Some(notes));
        }
        if let StatusChange::Set(status) = params.status {
            changes.status = ActiveValue::Set(status.as_str().to_string());
        }

        let result = entity::prelude::Booking::update_many()
            .set(changes)
            .filter(entity::booking::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Deletes a booking by ID. Deleting a missing row is not an error.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Booking::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
