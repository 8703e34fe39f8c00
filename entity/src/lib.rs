//! SeaORM entity models for the rental tables.

pub mod prelude;

pub mod booking;
pub mod car;
pub mod user;
