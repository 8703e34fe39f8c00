use super::*;

/// Tests updating selected booking fields.
///
/// Verifies that provided fields are written, omitted fields keep their values and
/// `updated_at` moves forward.
///
/// Expected: Ok(Some) with merged values
#[tokio::test]
async fn merges_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;
    let created = factory::booking::BookingFactory::new(db, Some(car.id))
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateBookingParams {
                full_name: Some("Grace Hopper".to_string()),
                passengers: Some(4),
                ..UpdateBookingParams::status_only(StatusChange::Keep)
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.full_name, "Grace Hopper");
    assert_eq!(updated.passengers, Some(4));
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.status, "pending");
    assert!(updated.updated_at > created.updated_at);

    Ok(())
}

/// Tests setting a new status.
///
/// Expected: Ok(Some) with the status changed
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_car, created) = factory::helpers::create_booking_with_car(db).await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateBookingParams::status_only(StatusChange::Set(BookingStatus::Confirmed)),
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, "confirmed");

    Ok(())
}

/// Tests a status-only update that keeps the current status.
///
/// Verifies that only `updated_at` changes.
///
/// Expected: Ok(Some) with the status untouched and a newer `updated_at`
#[tokio::test]
async fn keep_status_only_touches_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;
    let created = factory::booking::BookingFactory::new(db, Some(car.id))
        .status("cancelled")
        .created_at(Utc::now() - Duration::minutes(5))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .update(created.id, UpdateBookingParams::status_only(StatusChange::Keep))
        .await?
        .unwrap();

    assert_eq!(updated.status, "cancelled");
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.created_at, created.created_at);

    Ok(())
}

/// Tests updating a booking that does not exist.
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
    let result = repo
        .update(77, UpdateBookingParams::status_only(StatusChange::Keep))
        .await?;

    assert!(result.is_none());

    Ok(())
}
