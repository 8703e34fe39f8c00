use super::*;

/// Tests creating a car with only the required fields.
///
/// Verifies that list columns left empty decode to empty arrays.
///
/// Expected: Ok with empty images and features
#[tokio::test]
async fn creates_car_with_required_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let car = repo.create(params("X", "Van")).await?;

    assert!(car.id > 0);
    assert_eq!(car.name, "X");
    assert_eq!(car.category, "Van");
    assert!(car.images.is_empty());
    assert!(car.features.is_empty());

    Ok(())
}

/// Tests creating a car with encoded list columns.
///
/// Verifies that JSON-encoded images and features are decoded on the way out and the
/// daily price is stored.
///
/// Expected: Ok with arrays decoded and price kept
#[tokio::test]
async fn creates_car_with_list_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let car = repo
        .create(CarParams {
            images: Some(r#"["a.jpg","b.jpg"]"#.to_string()),
            features: Some(r#"["GPS","AC"]"#.to_string()),
            price_per_day: Some(65.5),
            seats: Some(7),
            ..params("Sharan", "Van")
        })
        .await?;

    assert_eq!(car.images, vec!["a.jpg", "b.jpg"]);
    assert_eq!(car.features, vec!["GPS", "AC"]);
    assert_eq!(car.price_per_day, Some(65.5));
    assert_eq!(car.seats, Some(7));

    Ok(())
}
