use super::*;

/// Tests listing cars newest first.
///
/// Verifies that cars are ordered by creation time descending regardless of insertion
/// order.
///
/// Expected: Ok with newest car first
#[tokio::test]
async fn returns_cars_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::car::CarFactory::new(db)
        .name("Old")
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    factory::car::CarFactory::new(db)
        .name("New")
        .created_at(now)
        .build()
        .await?;
    factory::car::CarFactory::new(db)
        .name("Middle")
        .created_at(now - Duration::days(1))
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let cars = repo.get_all().await?;

    let names: Vec<&str> = cars.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["New", "Middle", "Old"]);

    Ok(())
}

/// Tests listing cars whose stored lists are not valid JSON.
///
/// Verifies that malformed list columns degrade to a comma split instead of failing
/// the listing.
///
/// Expected: Ok with comma-split arrays
#[tokio::test]
async fn decodes_malformed_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::car::CarFactory::new(db)
        .raw_images("a.jpg, b.jpg")
        .raw_features("[GPS, AC")
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let cars = repo.get_all().await?;

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].images, vec!["a.jpg", "b.jpg"]);
    assert_eq!(cars[0].features, vec!["[GPS", "AC"]);

    Ok(())
}

/// Tests listing with no cars stored.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_cars() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
