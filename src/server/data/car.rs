//! Car data repository for database operations.
//!
//! Provides the `CarRepository` for managing car listings. List columns arrive already
//! encoded in `CarParams`; rows leave through `Car::from_entity`, which decodes them.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::car::{Car, CarParams};

pub struct CarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every car, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Car>)` - All cars ordered by creation time descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Car>, DbErr> {
        let entities = entity::prelude::Car::find()
            .order_by_desc(entity::car::Column::CreatedAt)
            .order_by_desc(entity::car::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Car::from_entity).collect())
    }

    /// Inserts a car and returns the stored row.
    pub async fn create(&self, params: CarParams) -> Result<Car, DbErr> {
        let entity = entity::car::ActiveModel {
            name: ActiveValue::Set(params.name),
            category: ActiveValue::Set(params.category),
            image: ActiveValue::Set(params.image),
            images: ActiveValue::Set(params.images),
            year: ActiveValue::Set(params.year),
            fuel_type: ActiveValue::Set(params.fuel_type),
            seats: ActiveValue::Set(params.seats),
            features: ActiveValue::Set(params.features),
            price_per_day: ActiveValue::Set(params.price_per_day),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Car::from_entity(entity))
    }

    /// Finds a car by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - Car found
    /// - `Ok(None)` - No car with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Car>, DbErr> {
        let entity = entity::prelude::Car::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Car::from_entity))
    }

    /// Overwrites every editable column of a car.
    ///
    /// `created_at` is left as stored.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows written; zero when no row matched
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: CarParams) -> Result<u64, DbErr> {
        let result = entity::prelude::Car::update_many()
            .set(entity::car::ActiveModel {
                name: ActiveValue::Set(params.name),
                category: ActiveValue::Set(params.category),
                image: ActiveValue::Set(params.image),
                images: ActiveValue::Set(params.images),
                year: ActiveValue::Set(params.year),
                fuel_type: ActiveValue::Set(params.fuel_type),
                seats: ActiveValue::Set(params.seats),
                features: ActiveValue::Set(params.features),
                price_per_day: ActiveValue::Set(params.price_per_day),
                ..Default::default()
            })
            .filter(entity::car::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether a car with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Car::find()
            .filter(entity::car::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a car by ID. Deleting a missing row is not an error.
    ///
    /// Bookings referencing the car keep their row with `car_id` cleared by the
    /// foreign key.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Car::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
