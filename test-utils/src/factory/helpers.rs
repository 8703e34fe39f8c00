//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a car and a booking referencing it, both with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((car, booking))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_car(
    db: &DatabaseConnection,
) -> Result<(entity::car::Model, entity::booking::Model), DbErr> {
    let car = crate::factory::car::create_car(db).await?;
    let booking = crate::factory::booking::create_booking(db, car.id).await?;

    Ok((car, booking))
}
