use super::*;
use test_utils::factory::registration::RegistrationFactory;

/// Tests that the code of a pending registration is recognised.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_unredeemed_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RegistrationFactory::new(db)
        .auth_code("ABCD2345")
        .build()
        .await?;

    let repo = RegistrationRepository::new(db);
    assert!(repo.auth_code_taken("ABCD2345").await?);

    Ok(())
}

/// Tests that a redeemed code can no longer be used.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_redeemed_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RegistrationFactory::new(db)
        .auth_code("ABCD2345")
        .verified_as("1001")
        .build()
        .await?;

    let repo = RegistrationRepository::new(db);
    assert!(!repo.auth_code_taken("ABCD2345").await?);

    Ok(())
}

/// Tests that an unknown code is rejected.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_registration(db).await?;

    let repo = RegistrationRepository::new(db);
    assert!(!repo.auth_code_taken("NOPE0000").await?);

    Ok(())
}
