use super::*;

/// Tests adding a new domain.
///
/// Expected: Added, stored lower-cased, confirmation sent
#[tokio::test]
async fn adds_domain() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (ctx, platform, _) = fake::context(db);

    let outcome = AllowListService::new(&ctx)
        .add_email(&invocation(), Some("College.AC.uk"))
        .await?;

    assert_eq!(
        outcome,
        AddEmailOutcome::Added {
            pattern: "college.ac.uk".to_string()
        }
    );
    assert_eq!(
        platform.last_reply(),
        Some(Reply::success("Added @college.ac.uk as a valid email address."))
    );
    assert!(AllowedEmailRepository::new(db)
        .is_edu_email("jane@college.ac.uk", true)
        .await?);

    Ok(())
}

/// Tests adding a single address.
///
/// Expected: Added, only that address becomes valid
#[tokio::test]
async fn adds_single_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (ctx, _, _) = fake::context(db);

    AllowListService::new(&ctx)
        .add_email(&invocation(), Some("jane@gmail.com"))
        .await?;

    let allow_list = AllowedEmailRepository::new(db);
    assert!(allow_list.is_edu_email("jane@gmail.com", false).await?);
    assert!(!allow_list.is_edu_email("john@gmail.com", false).await?);

    Ok(())
}

/// Tests adding a domain already covered by a parent entry.
///
/// Expected: AlreadyAllowed and nothing inserted
#[tokio::test]
async fn refuses_already_allowed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (ctx, platform, _) = fake::context(db);

    factory::create_allowed_email(db, "ac.uk").await?;

    let outcome = AllowListService::new(&ctx)
        .add_email(&invocation(), Some("college.ac.uk"))
        .await?;

    assert_eq!(outcome, AddEmailOutcome::AlreadyAllowed);
    assert_eq!(
        platform.last_reply(),
        Some(Reply::error("Already a valid email address."))
    );

    Ok(())
}

/// Tests adding a `.edu` address that is not on the list itself.
///
/// Expected: Added, the built-in rule does not count as already allowed
#[tokio::test]
async fn adds_unlisted_edu_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let (ctx, _, _) = fake::context(test.db.as_ref().unwrap());

    let outcome = AllowListService::new(&ctx)
        .add_email(&invocation(), Some("jane@school.edu"))
        .await?;

    assert!(matches!(outcome, AddEmailOutcome::Added { .. }));

    Ok(())
}

/// Tests `addemail` without an argument.
///
/// Expected: MissingAddress with an error
#[tokio::test]
async fn rejects_missing_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let (ctx, platform, _) = fake::context(test.db.as_ref().unwrap());

    let outcome = AllowListService::new(&ctx)
        .add_email(&invocation(), None)
        .await?;

    assert_eq!(outcome, AddEmailOutcome::MissingAddress);
    assert_eq!(
        platform.last_reply(),
        Some(Reply::error("No email address provided."))
    );

    Ok(())
}

/// Tests malformed input.
///
/// Expected: Invalid for both a broken address and a broken domain
#[tokio::test]
async fn rejects_malformed_input() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let (ctx, _, _) = fake::context(test.db.as_ref().unwrap());
    let service = AllowListService::new(&ctx);

    assert_eq!(
        service.add_email(&invocation(), Some("jane@")).await?,
        AddEmailOutcome::Invalid
    );
    assert_eq!(
        service.add_email(&invocation(), Some("not a domain")).await?,
        AddEmailOutcome::Invalid
    );

    Ok(())
}
