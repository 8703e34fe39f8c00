use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// One or more required fields were absent or blank.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// A field holds a value outside its allowed set.
    #[error("Invalid {field} '{value}'")]
    InvalidValue {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
}

impl ValidationError {
    /// Builds a `MissingFields` error listing every field flagged as absent.
    ///
    /// # Arguments
    /// - `fields` - Pairs of field name and whether the field holds a usable value
    pub fn missing(fields: &[(&str, bool)]) -> Self {
        Self::MissingFields(
            fields
                .iter()
                .filter(|(_, present)| !present)
                .map(|(name, _)| name.to_string())
                .collect(),
        )
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation failed: {}", self);

        let body = match self {
            Self::MissingFields(fields) => ErrorDto {
                error: "Missing required fields".to_string(),
                message: Some(format!("Missing required fields: {}", fields.join(", "))),
                missing_fields: Some(fields),
                ..Default::default()
            },
            Self::InvalidValue {
                field,
                value,
                allowed,
            } => ErrorDto {
                error: format!("Invalid {}", field),
                message: Some(format!("'{}' is not a valid {}", value, field)),
                valid_values: Some(allowed),
                ..Default::default()
            },
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
