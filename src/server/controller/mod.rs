//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into validated parameters, call the
//! service layer and convert the resulting domain models back into response DTOs. Every
//! handler returns `Result<impl IntoResponse, AppError>` so failures share one JSON error
//! format.

pub mod auth;
pub mod booking;
pub mod car;
pub mod database;
pub mod upload;

#[cfg(test)]
mod test;
