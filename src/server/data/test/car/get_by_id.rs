use super::*;

/// Tests fetching an existing car.
///
/// Expected: Ok(Some) with decoded images
#[tokio::test]
async fn finds_existing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::car::CarFactory::new(db)
        .images(&["front.jpg"])
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let car = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(car.id, created.id);
    assert_eq!(car.images, vec!["front.jpg"]);

    Ok(())
}

/// Tests fetching a car that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);

    assert!(repo.get_by_id(999).await?.is_none());

    Ok(())
}
