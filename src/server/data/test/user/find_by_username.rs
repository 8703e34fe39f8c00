use super::*;

/// Tests finding a user by username.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_user_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("rentaladmin")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("rentaladmin").await?.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.email, created.email);

    Ok(())
}

/// Tests looking up an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}
