use super::*;

/// Tests fetching an existing booking.
///
/// Expected: Ok(Some) with the stored booking
#[tokio::test]
async fn finds_existing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, created) = factory::helpers::create_booking_with_car(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(booking.id, created.id);
    assert_eq!(booking.car_id, Some(car.id));
    assert_eq!(booking.full_name, created.full_name);

    Ok(())
}

/// Tests fetching a booking that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);

    assert!(repo.get_by_id(404).await?.is_none());

    Ok(())
}
