use super::*;

/// Tests overwriting a car.
///
/// Verifies that every editable column is replaced and unset optional columns are
/// cleared.
///
/// Expected: Ok with one row affected and new values stored
#[tokio::test]
async fn overwrites_existing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::car::CarFactory::new(db)
        .features(&["GPS"])
        .price_per_day(Some(40.0))
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let affected = repo
        .update(
            created.id,
            CarParams {
                features: Some(r#"["Heated seats"]"#.to_string()),
                ..params("Renamed", "SUV")
            },
        )
        .await?;

    assert_eq!(affected, 1);
    let car = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(car.name, "Renamed");
    assert_eq!(car.category, "SUV");
    assert_eq!(car.features, vec!["Heated seats"]);
    assert_eq!(car.price_per_day, None);
    assert_eq!(car.created_at, created.created_at);

    Ok(())
}

/// Tests updating a car that does not exist.
///
/// Expected: Ok with zero rows affected
#[tokio::test]
async fn affects_nothing_for_missing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let affected = repo.update(999, params("Ghost", "Van")).await?;

    assert_eq!(affected, 0);
    assert!(!repo.exists(999).await?);

    Ok(())
}
