use super::*;

fn params(car_id: i32) -> CreateBookingParams {
    CreateBookingParams {
        pickup_location: "Airport".to_string(),
        dropoff_location: "Harbour".to_string(),
        pickup_date: date_time(2026, 7, 1, 9),
        dropoff_date: Some(date_time(2026, 7, 4, 9)),
        passengers: Some(2),
        car_id,
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555-0100".to_string(),
        notes: Some("Child seat".to_string()),
        status: BookingStatus::Pending,
    }
}

/// Tests creating a booking for an existing car.
///
/// Verifies that every field is stored and both timestamps are set.
///
/// Expected: Ok with status pending and matching timestamps
#[tokio::test]
async fn creates_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo.create(params(car.id)).await?;

    assert!(booking.id > 0);
    assert_eq!(booking.car_id, Some(car.id));
    assert_eq!(booking.status, "pending");
    assert_eq!(booking.pickup_date, date_time(2026, 7, 1, 9));
    assert_eq!(booking.notes.as_deref(), Some("Child seat"));
    assert_eq!(booking.created_at, booking.updated_at);

    Ok(())
}

/// Tests creating a booking with an explicit status.
///
/// Expected: Ok with the given status stored
#[tokio::test]
async fn stores_requested_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(CreateBookingParams {
            status: BookingStatus::Confirmed,
            ..params(car.id)
        })
        .await?;

    assert_eq!(booking.status, "confirmed");

    Ok(())
}
