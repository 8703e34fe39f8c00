use super::*;

/// Tests deleting a booking.
///
/// Expected: Ok with the booking gone and its car untouched
#[tokio::test]
async fn deletes_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, booking) = factory::helpers::create_booking_with_car(db).await?;

    let repo = BookingRepository::new(db);
    repo.delete(booking.id).await?;

    assert!(repo.get_by_id(booking.id).await?.is_none());
    assert!(crate::server::data::car::CarRepository::new(db)
        .exists(car.id)
        .await?);

    Ok(())
}

/// Tests deleting a booking that does not exist.
///
/// Expected: Ok
#[tokio::test]
async fn deleting_missing_booking_succeeds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);

    assert!(repo.delete(555).await.is_ok());

    Ok(())
}
