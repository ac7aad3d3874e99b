use super::*;

/// Tests that a verified record bound to the id is reported as taken.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_verified_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_verified_registration(db, "1001").await?;

    let repo = RegistrationRepository::new(db);
    assert!(repo.id_taken(1001).await?);

    Ok(())
}

/// Tests that an unknown id is not taken.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_verified_registration(db, "1001").await?;

    let repo = RegistrationRepository::new(db);
    assert!(!repo.id_taken(2002).await?);

    Ok(())
}

/// Tests that pending registrations never count as a taken id.
///
/// Pending records carry no Discord id until the auth code is redeemed.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_pending_registrations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_registration(db).await?;

    let repo = RegistrationRepository::new(db);
    assert!(!repo.id_taken(1001).await?);

    Ok(())
}
