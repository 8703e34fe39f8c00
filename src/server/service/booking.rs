use sea_orm::DatabaseConnection;

use crate::server::{
    data::booking::BookingRepository,
    error::AppError,
    model::booking::{
        Booking, BookingFilter, BookingListItem, CreateBookingParams, StatusChange,
        UpdateBookingParams,
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists bookings matching the filter, each with its car summary.
    ///
    /// Rows whose car cannot be attached are kept and annotated rather than failing
    /// the listing.
    pub async fn get_filtered(
        &self,
        filter: BookingFilter,
    ) -> Result<Vec<BookingListItem>, AppError> {
        let repo = BookingRepository::new(self.db);

        let items = repo.get_filtered(filter).await?;

        for item in items.iter().filter(|item| item.error.is_some()) {
            tracing::warn!(
                "Booking {} listed without car: {}",
                item.booking.id,
                item.error.as_deref().unwrap_or_default()
            );
        }

        Ok(items)
    }

    /// Creates a booking from validated input
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        let repo = BookingRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets a booking by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Booking>, AppError> {
        let repo = BookingRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Merges the provided fields into a booking and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The updated booking
    /// - `Ok(None)` - No booking with that ID
    /// - `Err(AppError)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateBookingParams,
    ) -> Result<Option<Booking>, AppError> {
        let repo = BookingRepository::new(self.db);

        Ok(repo.update(id, params).await?)
    }

    /// Sets a booking's status; `StatusChange::Keep` only refreshes `updated_at`.
    pub async fn update_status(
        &self,
        id: i32,
        status: StatusChange,
    ) -> Result<Option<Booking>, AppError> {
        self.update(id, UpdateBookingParams::status_only(status))
            .await
    }

    /// Deletes a booking. Missing bookings are not an error.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = BookingRepository::new(self.db);

        repo.delete(id).await?;

        Ok(())
    }
}
