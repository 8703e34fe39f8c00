//! Car domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        car::{CarDto, CarInputDto},
        field::ListField,
    },
    server::{error::validation::ValidationError, util::json_field},
};

/// Car listing with list fields already decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub year: Option<i32>,
    pub fuel_type: Option<String>,
    pub seats: Option<i32>,
    pub features: Vec<String>,
    pub price_per_day: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Car {
    /// Converts an entity model to a car domain model at the repository boundary.
    ///
    /// The JSON-encoded `images` and `features` columns are decoded here, so callers
    /// always see arrays.
    pub fn from_entity(entity: entity::car::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            category: entity.category,
            image: entity.image,
            images: json_field::decode(entity.images.as_deref()),
            year: entity.year,
            fuel_type: entity.fuel_type,
            seats: entity.seats,
            features: json_field::decode(entity.features.as_deref()),
            price_per_day: entity.price_per_day,
            created_at: entity.created_at,
        }
    }

    /// Converts domain model to DTO for API responses. The daily price is dropped.
    pub fn into_dto(self) -> CarDto {
        CarDto {
            id: self.id,
            name: self.name,
            category: self.category,
            image: self.image,
            images: self.images,
            year: self.year,
            fuel_type: self.fuel_type,
            seats: self.seats,
            features: self.features,
            created_at: self.created_at,
        }
    }
}

/// Validated car input, shared by create and full update.
///
/// List fields hold their storage encoding already.
#[derive(Debug, Clone, PartialEq)]
pub struct CarParams {
    pub name: String,
    pub category: String,
    pub image: Option<String>,
    pub images: Option<String>,
    pub year: Option<i32>,
    pub fuel_type: Option<String>,
    pub seats: Option<i32>,
    pub features: Option<String>,
    pub price_per_day: Option<f64>,
}

impl CarParams {
    /// Validates a create request and encodes its list fields.
    ///
    /// # Returns
    /// - `Ok(CarParams)` - Input with non-blank `name` and `category`
    /// - `Err(ValidationError::MissingFields)` - `name` and/or `category` absent or blank
    pub fn for_create(dto: CarInputDto) -> Result<Self, ValidationError> {
        Self::build(dto, |features| features)
    }

    /// Validates a full update request.
    ///
    /// Identical to `for_create` except blank feature entries are dropped before
    /// encoding.
    pub fn for_update(dto: CarInputDto) -> Result<Self, ValidationError> {
        Self::build(dto, json_field::without_blank_items)
    }

    /// Whether writing these values would leave `car` as it is.
    ///
    /// List fields are compared in decoded form, so a raw string and the equivalent
    /// JSON array count as equal.
    pub fn matches(&self, car: &Car) -> bool {
        self.name == car.name
            && self.category == car.category
            && self.image == car.image
            && json_field::decode(self.images.as_deref()) == car.images
            && self.year == car.year
            && self.fuel_type == car.fuel_type
            && self.seats == car.seats
            && json_field::decode(self.features.as_deref()) == car.features
            && self.price_per_day == car.price_per_day
    }

    fn build(
        dto: CarInputDto,
        clean_features: impl FnOnce(Option<ListField>) -> Option<ListField>,
    ) -> Result<Self, ValidationError> {
        let name_present = is_present(&dto.name);
        let category_present = is_present(&dto.category);

        let (Some(name), Some(category)) = (non_blank(dto.name), non_blank(dto.category)) else {
            return Err(ValidationError::missing(&[
                ("name", name_present),
                ("category", category_present),
            ]));
        };

        Ok(Self {
            name,
            category,
            image: dto.image,
            images: json_field::encode(dto.images),
            year: dto.year,
            fuel_type: dto.fuel_type,
            seats: dto.seats,
            features: json_field::encode(clean_features(dto.features)),
            price_per_day: dto.price_per_day,
        })
    }
}

/// Outcome of a car update that found its row.
#[derive(Debug, Clone, PartialEq)]
pub enum CarUpdate {
    /// The row was written.
    Updated(Car),
    /// The row already held the submitted values; nothing was written.
    Unchanged(Car),
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: Option<&str>, category: Option<&str>) -> CarInputDto {
        CarInputDto {
            name: name.map(str::to_string),
            category: category.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn requires_name_and_category() {
        let err = CarParams::for_create(input(None, Some("  "))).unwrap_err();

        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["name".to_string(), "category".to_string()])
        );
    }

    #[test]
    fn encodes_list_fields() {
        let mut dto = input(Some("Transit"), Some("Van"));
        dto.images = Some(ListField::Items(vec!["a.jpg".to_string()]));
        dto.features = Some(ListField::Raw("GPS, AC".to_string()));

        let params = CarParams::for_create(dto).unwrap();

        assert_eq!(params.images.as_deref(), Some(r#"["a.jpg"]"#));
        assert_eq!(params.features.as_deref(), Some("GPS, AC"));
    }

    fn stored_car() -> Car {
        Car {
            id: 1,
            name: "Transit".to_string(),
            category: "Van".to_string(),
            image: None,
            images: vec!["a.jpg".to_string()],
            year: Some(2022),
            fuel_type: None,
            seats: Some(3),
            features: vec!["GPS".to_string(), "AC".to_string()],
            price_per_day: Some(55.0),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn matches_stored_car_with_same_values() {
        let mut dto = input(Some("Transit"), Some("Van"));
        dto.images = Some(ListField::Items(vec!["a.jpg".to_string()]));
        dto.features = Some(ListField::Raw("GPS, AC".to_string()));
        dto.year = Some(2022);
        dto.seats = Some(3);
        dto.price_per_day = Some(55.0);

        let params = CarParams::for_update(dto).unwrap();

        assert!(params.matches(&stored_car()));
    }

    #[test]
    fn does_not_match_when_any_field_differs() {
        let mut dto = input(Some("Transit"), Some("Van"));
        dto.images = Some(ListField::Items(vec!["a.jpg".to_string()]));
        dto.features = Some(ListField::Raw("GPS, AC".to_string()));
        dto.year = Some(2022);
        dto.seats = Some(3);

        let params = CarParams::for_update(dto).unwrap();

        assert!(!params.matches(&stored_car()));
    }

    #[test]
    fn update_drops_blank_features() {
        let mut dto = input(Some("Transit"), Some("Van"));
        dto.features = Some(ListField::Items(vec![
            "GPS".to_string(),
            "".to_string(),
            "  ".to_string(),
        ]));

        let params = CarParams::for_update(dto).unwrap();

        assert_eq!(params.features.as_deref(), Some(r#"["GPS"]"#));
    }
}
