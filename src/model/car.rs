use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::field::ListField;

/// Car listing as exposed by the API.
///
/// `images` and `features` are always arrays regardless of how they are stored.
/// The daily price is internal and never part of this DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarDto {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub year: Option<i32>,
    pub fuel_type: Option<String>,
    pub seats: Option<i32>,
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or replacing a car.
///
/// `name` and `category` are optional here so that their absence can be reported as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CarInputDto {
    pub name: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub images: Option<ListField>,
    pub year: Option<i32>,
    pub fuel_type: Option<String>,
    pub seats: Option<i32>,
    pub features: Option<ListField>,
    pub price_per_day: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarResponseDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub car: CarDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarListDto {
    pub success: bool,
    pub cars: Vec<CarDto>,
}
