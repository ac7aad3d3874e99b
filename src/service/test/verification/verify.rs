use super::*;

/// Tests redeeming a valid code.
///
/// Expected: record verified and bound, reply sent, role and nickname applied, audit entry
#[tokio::test]
async fn verifies_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (ctx, platform, audit) = fake::context(db);

    factory::registration::RegistrationFactory::new(db)
        .first_name("Jane")
        .last_name("Doe")
        .auth_code("ABCD2345")
        .build()
        .await?;

    let outcome = VerificationService::new(&ctx)
        .verify(&invocation(), Some("ABCD2345"))
        .await?;

    assert_eq!(
        outcome,
        VerifyOutcome::Verified {
            nickname: "Jane D".to_string()
        }
    );
    assert!(RegistrationRepository::new(db).id_taken(MEMBER.get()).await?);
    assert_eq!(
        platform.calls(),
        vec![
            PlatformCall::Reply {
                channel: VERIFICATION_CHANNEL,
                message: MessageId::new(77),
                reply: Reply::success("You're in! :smile:"),
            },
            PlatformCall::AddRole {
                user: MEMBER,
                role: VERIFIED_ROLE,
            },
            PlatformCall::SetNickname {
                user: MEMBER,
                nickname: "Jane D".to_string(),
            },
        ]
    );
    assert_eq!(
        audit.entries(),
        vec![AuditEntry::Verified {
            user: MEMBER,
            nickname: "Jane D".to_string(),
            invite: None,
        }]
    );

    Ok(())
}

/// Tests that codes are matched case-insensitively.
///
/// Expected: lower-case input redeems the upper-case code
#[tokio::test]
async fn accepts_lower_case_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (ctx, _, _) = fake::context(db);

    factory::registration::RegistrationFactory::new(db)
        .auth_code("ABCD2345")
        .build()
        .await?;

    let outcome = VerificationService::new(&ctx)
        .verify(&invocation(), Some("abcd2345"))
        .await?;

    assert!(matches!(outcome, VerifyOutcome::Verified { .. }));

    Ok(())
}

/// Tests verifying a member who joined through an invite.
///
/// Expected: edge consumed and the inviter credited in the audit entry
#[tokio::test]
async fn credits_inviter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (ctx, _, audit) = fake::context(db);

    factory::registration::RegistrationFactory::new(db)
        .auth_code("ABCD2345")
        .build()
        .await?;
    factory::create_invite(db, MEMBER.get().to_string(), "42").await?;
    factory::invite::InviteFactory::new(db, "1001", "42")
        .consumed(true)
        .build()
        .await?;

    VerificationService::new(&ctx)
        .verify(&invocation(), Some("ABCD2345"))
        .await?;

    let invites = InviteRepository::new(db);
    assert!(!invites.was_invited(MEMBER.get()).await?);
    assert_eq!(invites.count_consumed_by_inviter(42).await?, 2);

    let Some(AuditEntry::Verified { invite, .. }) = audit.entries().pop() else {
        panic!("expected a verified audit entry");
    };
    assert_eq!(
        invite,
        Some(InviteAttribution {
            inviter: UserId::new(42),
            verified_invites: 2,
        })
    );

    Ok(())
}
