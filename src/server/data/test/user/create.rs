use super::*;

/// Tests creating a new user.
///
/// Verifies that the user repository stores the username, email and password hash.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "admin".to_string(),
            "admin@example.com".to_string(),
            "$argon2id$stub".to_string(),
        )
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "admin");
    assert_eq!(user.email, "admin@example.com");
    assert_eq!(user.password_hash, "$argon2id$stub");

    Ok(())
}

/// Tests creating a user with a username that is already taken.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(
            existing.username,
            "other@example.com".to_string(),
            "hash".to_string(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
