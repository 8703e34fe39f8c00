//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let car = factory::car::create_car(&db).await?;
//!     let booking = factory::booking::create_booking(&db, car.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let car = factory::car::CarFactory::new(&db)
//!     .name("Transit")
//!     .category("Van")
//!     .images(&["https://cdn.example/a.jpg"])
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod car;
pub mod helpers;
pub mod user;

pub use booking::create_booking;
pub use car::create_car;
pub use user::create_user;
