use super::*;

/// Tests probing an empty database.
///
/// Expected: Ok with every table reported missing
#[tokio::test]
async fn reports_missing_tables_before_migration() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    let repo = SchemaRepository::new(&db);
    let tables = repo.probe_tables().await?;

    assert_eq!(
        tables,
        vec![("cars", false), ("bookings", false), ("users", false)]
    );

    Ok(())
}

/// Tests migrating and probing.
///
/// Verifies that migrating twice is harmless and every table is present afterwards.
///
/// Expected: Ok with every table reported present
#[tokio::test]
async fn creates_every_table() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    let repo = SchemaRepository::new(&db);
    repo.migrate().await?;
    repo.migrate().await?;

    let tables = repo.probe_tables().await?;

    assert!(tables.iter().all(|(_, present)| *present));

    Ok(())
}
