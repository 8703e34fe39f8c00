use super::*;

/// Tests listing every booking with its car attached.
///
/// Verifies newest-first ordering and that the car summary carries decoded images and
/// the daily price.
///
/// Expected: Ok with both bookings, newest first, cars attached
#[tokio::test]
async fn lists_bookings_with_cars() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::car::CarFactory::new(db)
        .images(&["side.jpg"])
        .price_per_day(Some(55.0))
        .build()
        .await?;
    let now = Utc::now();
    let older = factory::booking::BookingFactory::new(db, Some(car.id))
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let newer = factory::booking::BookingFactory::new(db, Some(car.id))
        .created_at(now)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let items = repo.get_filtered(BookingFilter::default()).await?;

    let ids: Vec<i32> = items.iter().map(|i| i.booking.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    let summary = items[0].car.as_ref().unwrap();
    assert_eq!(summary.id, car.id);
    assert_eq!(summary.images, vec!["side.jpg"]);
    assert_eq!(summary.price_per_day, Some(55.0));
    assert!(items[0].error.is_none());

    Ok(())
}

/// Tests filtering by status.
///
/// Expected: Ok with only confirmed bookings
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;
    factory::booking::BookingFactory::new(db, Some(car.id))
        .build()
        .await?;
    let confirmed = factory::booking::BookingFactory::new(db, Some(car.id))
        .status("confirmed")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let items = repo
        .get_filtered(BookingFilter {
            status: Some("confirmed".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].booking.id, confirmed.id);

    Ok(())
}

/// Tests filtering by an inclusive pickup date range.
///
/// Verifies that bookings on the boundary days are included and those outside are
/// excluded.
///
/// Expected: Ok with the two in-range bookings
#[tokio::test]
async fn filters_by_pickup_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;
    for day in [1, 5, 10, 15] {
        factory::booking::BookingFactory::new(db, Some(car.id))
            .pickup_date(date_time(2026, 6, day, 18))
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);
    let items = repo
        .get_filtered(BookingFilter {
            pickup_from: Some(date_time(2026, 6, 5, 0)),
            pickup_until: Some(date_time(2026, 6, 10, 23)),
            status: None,
        })
        .await?;

    let mut days: Vec<u32> = items
        .iter()
        .map(|i| chrono::Datelike::day(&i.booking.pickup_date))
        .collect();
    days.sort();
    assert_eq!(days, vec![5, 10]);

    Ok(())
}

/// Tests listing a booking whose car was deleted.
///
/// Verifies that the row is still returned with no car attached and no error, since the
/// reference was cleared.
///
/// Expected: Ok with car None
#[tokio::test]
async fn keeps_bookings_without_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::booking::BookingFactory::new(db, None)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let items = repo.get_filtered(BookingFilter::default()).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].booking.id, booking.id);
    assert!(items[0].car.is_none());
    assert!(items[0].error.is_none());

    Ok(())
}
