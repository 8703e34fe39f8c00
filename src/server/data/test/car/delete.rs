use super::*;

/// Tests deleting a car.
///
/// Expected: Ok with the car gone
#[tokio::test]
async fn deletes_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;

    let repo = CarRepository::new(db);
    repo.delete(car.id).await?;

    assert!(!repo.exists(car.id).await?);

    Ok(())
}

/// Tests deleting a car that does not exist.
///
/// Verifies that deletion is idempotent.
///
/// Expected: Ok
#[tokio::test]
async fn deleting_missing_car_succeeds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);

    assert!(repo.delete(12345).await.is_ok());

    Ok(())
}

/// Tests deleting a car that has bookings.
///
/// Verifies that the bookings survive with their car reference cleared.
///
/// Expected: Ok with booking car_id set to None
#[tokio::test]
async fn clears_car_reference_on_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, booking) = factory::helpers::create_booking_with_car(db).await?;

    let repo = CarRepository::new(db);
    repo.delete(car.id).await?;

    let booking = crate::server::data::booking::BookingRepository::new(db)
        .get_by_id(booking.id)
        .await?
        .unwrap();
    assert_eq!(booking.car_id, None);

    Ok(())
}
