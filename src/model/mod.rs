//! Wire-level DTOs shared by every endpoint.
//!
//! These types define the JSON request and response bodies of the public API. Server-side
//! domain models convert into them at the controller boundary.

pub mod api;
pub mod auth;
pub mod booking;
pub mod car;
pub mod database;
pub mod field;
pub mod upload;
