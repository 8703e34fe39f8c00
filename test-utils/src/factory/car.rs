//! Car factory for creating test car entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let car = CarFactory::new(&db)
///     .name("Sprinter")
///     .category("Van")
///     .price_per_day(Some(89.0))
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    category: String,
    image: Option<String>,
    images: Option<String>,
    features: Option<String>,
    price_per_day: Option<f64>,
    created_at: DateTime<Utc>,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Car {id}"`
    /// - category: `"Sedan"`
    /// - images / features: stored as `NULL`
    /// - price_per_day: `Some(50.0)`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Car {}", id),
            category: "Sedan".to_string(),
            image: None,
            images: None,
            features: None,
            price_per_day: Some(50.0),
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Stores the images as a JSON-encoded array, the way the API writes them.
    pub fn images(mut self, images: &[&str]) -> Self {
        self.images = serde_json::to_string(images).ok();
        self
    }

    /// Stores a raw images column value, bypassing JSON encoding.
    pub fn raw_images(mut self, raw: impl Into<String>) -> Self {
        self.images = Some(raw.into());
        self
    }

    /// Stores the features as a JSON-encoded array.
    pub fn features(mut self, features: &[&str]) -> Self {
        self.features = serde_json::to_string(features).ok();
        self
    }

    /// Stores a raw features column value, bypassing JSON encoding.
    pub fn raw_features(mut self, raw: impl Into<String>) -> Self {
        self.features = Some(raw.into());
        self
    }

    pub fn price_per_day(mut self, price: Option<f64>) -> Self {
        self.price_per_day = price;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            name: ActiveValue::Set(self.name),
            category: ActiveValue::Set(self.category),
            image: ActiveValue::Set(self.image),
            images: ActiveValue::Set(self.images),
            year: ActiveValue::Set(Some(2022)),
            fuel_type: ActiveValue::Set(Some("Petrol".to_string())),
            seats: ActiveValue::Set(Some(5)),
            features: ActiveValue::Set(self.features),
            price_per_day: ActiveValue::Set(self.price_per_day),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values.
///
/// Shorthand for `CarFactory::new(db).build().await`.
pub async fn create_car(db: &DatabaseConnection) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db).build().await
}
