use super::*;

/// Tests matching on username alone.
///
/// Expected: Ok(Some) with the existing user
#[tokio::test]
async fn matches_on_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("root")
        .email("root@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .find_by_username_or_email("root", "different@example.com")
        .await?
        .unwrap();

    assert_eq!(user.id, created.id);

    Ok(())
}

/// Tests matching on email alone.
///
/// Expected: Ok(Some) with the existing user
#[tokio::test]
async fn matches_on_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("root")
        .email("root@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .find_by_username_or_email("someone-else", "root@example.com")
        .await?
        .unwrap();

    assert_eq!(user.id, created.id);

    Ok(())
}

/// Tests that neither identifier matching yields no user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_neither_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo
        .find_by_username_or_email("ghost", "ghost@example.com")
        .await?;

    assert!(user.is_none());

    Ok(())
}
