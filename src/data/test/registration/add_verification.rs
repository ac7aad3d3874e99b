use super::*;

/// Tests storing a confirmed registration.
///
/// Verifies the record is pending, unbound and carries an 8 character auth code.
///
/// Expected: Ok with a pending record
#[tokio::test]
async fn stores_pending_record_with_auth_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegistrationRepository::new(db);
    let record = repo.add_verification(&pending("jane@school.edu")).await?;

    assert_eq!(record.first_name, "Jane");
    assert_eq!(record.last_name, "Doe");
    assert_eq!(record.email, "jane@school.edu");
    assert_eq!(record.auth_code.len(), 8);
    assert!(record
        .auth_code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    assert!(record.discord_id.is_none());
    assert!(!record.verified);
    assert!(repo.auth_code_taken(&record.auth_code).await?);

    Ok(())
}

/// Tests that the stored email is normalised.
///
/// Expected: Ok with lower-cased email
#[tokio::test]
async fn normalizes_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegistrationRepository::new(db);
    let record = repo.add_verification(&pending(" Jane@School.EDU")).await?;

    assert_eq!(record.email, "jane@school.edu");

    Ok(())
}

/// Tests that the email uniqueness constraint is enforced.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegistrationRepository::new(db);
    repo.add_verification(&pending("jane@school.edu")).await?;
    let result = repo.add_verification(&pending("jane@school.edu")).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests that consecutive registrations receive distinct auth codes.
///
/// Expected: Ok with different codes
#[tokio::test]
async fn generates_distinct_codes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegistrationRepository::new(db);
    let first = repo.add_verification(&pending("jane@school.edu")).await?;
    let second = repo.add_verification(&pending("john@school.edu")).await?;

    assert_ne!(first.auth_code, second.auth_code);

    Ok(())
}
