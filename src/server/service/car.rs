use sea_orm::DatabaseConnection;

use crate::server::{
    data::car::CarRepository,
    error::AppError,
    model::car::{Car, CarParams, CarUpdate},
};

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every car, newest first
    pub async fn get_all(&self) -> Result<Vec<Car>, AppError> {
        let repo = CarRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Creates a car from validated input
    pub async fn create(&self, params: CarParams) -> Result<Car, AppError> {
        let repo = CarRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets a car by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Car>, AppError> {
        let repo = CarRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Replaces a car's editable fields.
    ///
    /// The stored car is compared with the submitted values first. Both SQLite and
    /// Postgres count matched rather than changed rows, so the write itself cannot tell
    /// an identical update apart; an identical update is therefore not written at all.
    ///
    /// # Returns
    /// - `Ok(Some(CarUpdate::Updated))` - The row was written
    /// - `Ok(Some(CarUpdate::Unchanged))` - The row already held these values
    /// - `Ok(None)` - No car with that ID
    /// - `Err(AppError)` - Database error
    pub async fn update(&self, id: i32, params: CarParams) -> Result<Option<CarUpdate>, AppError> {
        let repo = CarRepository::new(self.db);

        let Some(current) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        if params.matches(&current) {
            tracing::debug!("Update of car {} changed nothing", id);
            return Ok(Some(CarUpdate::Unchanged(current)));
        }

        if repo.update(id, params).await? == 0 {
            return Ok(None);
        }

        Ok(repo.get_by_id(id).await?.map(CarUpdate::Updated))
    }

    /// Deletes a car. Missing cars are not an error.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CarRepository::new(self.db);

        repo.delete(id).await?;

        Ok(())
    }
}
