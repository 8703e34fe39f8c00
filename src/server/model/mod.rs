//! Domain models and operation-specific parameter types.
//!
//! Domain models are built from entities at the repository boundary and converted into
//! DTOs at the controller boundary. Parameter types carry request input after validation.

pub mod booking;
pub mod car;
pub mod user;
