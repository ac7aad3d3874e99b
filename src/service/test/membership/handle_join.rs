use super::*;

/// Tests a verified member rejoining.
///
/// Expected: role, nickname and welcome-back DM re-applied with one rejoin audit entry
#[tokio::test]
async fn reverifies_returning_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (ctx, platform, audit) = fake::context(db);

    factory::registration::RegistrationFactory::new(db)
        .first_name("Jane")
        .last_name("Doe")
        .verified_as(MEMBER.get().to_string())
        .build()
        .await?;

    let outcome = MembershipService::new(&ctx).handle_join(GUILD, MEMBER).await?;

    assert_eq!(
        outcome,
        JoinOutcome::Reverified {
            nickname: "Jane D".to_string()
        }
    );
    assert_eq!(
        platform.calls(),
        vec![
            PlatformCall::AddRole {
                user: MEMBER,
                role: VERIFIED_ROLE,
            },
            PlatformCall::SetNickname {
                user: MEMBER,
                nickname: "Jane D".to_string(),
            },
            PlatformCall::DirectMessage {
                user: MEMBER,
                reply: Reply::text(
                    "Welcome back to the Campus Discord Jane! I've automagically applied your \
                     verification again.\n\nIf you think this was a mistake, let an admin know :smile:"
                ),
            },
        ]
    );
    assert_eq!(
        audit.entries(),
        vec![AuditEntry::Rejoined {
            user: MEMBER,
            nickname: "Jane D".to_string(),
        }]
    );

    Ok(())
}

/// Tests a returning member does not get an invite edge.
///
/// Expected: no edge even though an inviter resolves
#[tokio::test]
async fn returning_member_records_no_invite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (ctx, _, _) =
        fake::context_with(db, RecordingPlatform::default().with_inviter(UserId::new(42)));

    factory::create_verified_registration(db, MEMBER.get().to_string()).await?;

    MembershipService::new(&ctx).handle_join(GUILD, MEMBER).await?;

    assert!(!InviteRepository::new(db).was_invited(MEMBER.get()).await?);

    Ok(())
}

/// Tests a new member joining through an attributable invite.
///
/// Expected: edge recorded, nothing sent to the member
#[tokio::test]
async fn records_invite_edge() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (ctx, platform, audit) =
        fake::context_with(db, RecordingPlatform::default().with_inviter(UserId::new(42)));

    let outcome = MembershipService::new(&ctx).handle_join(GUILD, MEMBER).await?;

    assert_eq!(
        outcome,
        JoinOutcome::InviteRecorded {
            inviter: UserId::new(42)
        }
    );
    let edge = InviteRepository::new(db)
        .find_unconsumed(MEMBER.get())
        .await?
        .expect("edge should be stored");
    assert_eq!(edge.inviter_id, 42);
    assert!(platform.calls().is_empty());
    assert!(audit.entries().is_empty());

    Ok(())
}

/// Tests a pending (unverified) registration does not count as returning.
///
/// Expected: treated as a new member
#[tokio::test]
async fn pending_registration_is_not_returning() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (ctx, _, _) =
        fake::context_with(db, RecordingPlatform::default().with_inviter(UserId::new(42)));

    factory::create_registration(db).await?;

    let outcome = MembershipService::new(&ctx).handle_join(GUILD, MEMBER).await?;

    assert!(matches!(outcome, JoinOutcome::InviteRecorded { .. }));

    Ok(())
}

/// Tests a join whose invite cannot be attributed.
///
/// Expected: InviterUnknown and no edge
#[tokio::test]
async fn skips_unknown_inviter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (ctx, _, _) = fake::context(db);

    let outcome = MembershipService::new(&ctx).handle_join(GUILD, MEMBER).await?;

    assert_eq!(outcome, JoinOutcome::InviterUnknown);
    assert!(!InviteRepository::new(db).was_invited(MEMBER.get()).await?);

    Ok(())
}

/// Tests a verified member leaving and rejoining.
///
/// Expected: consumed edge survives the leave, verification re-applied, one rejoin entry
#[tokio::test]
async fn leave_then_rejoin_restores_verification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (ctx, platform, audit) =
        fake::context_with(db, RecordingPlatform::default().with_inviter(UserId::new(7)));

    factory::registration::RegistrationFactory::new(db)
        .first_name("Jane")
        .last_name("Doe")
        .verified_as(MEMBER.get().to_string())
        .build()
        .await?;
    factory::invite::InviteFactory::new(db, MEMBER.get().to_string(), "42")
        .consumed(true)
        .build()
        .await?;

    let service = MembershipService::new(&ctx);
    assert!(!service.handle_leave(MEMBER).await?);
    let outcome = service.handle_join(GUILD, MEMBER).await?;

    assert!(matches!(outcome, JoinOutcome::Reverified { .. }));
    let invites = InviteRepository::new(db);
    assert_eq!(invites.count_consumed_by_inviter(42).await?, 1);
    assert!(!invites.was_invited(MEMBER.get()).await?);
    assert!(platform.calls().contains(&PlatformCall::AddRole {
        user: MEMBER,
        role: VERIFIED_ROLE,
    }));
    assert_eq!(
        audit.entries(),
        vec![AuditEntry::Rejoined {
            user: MEMBER,
            nickname: "Jane D".to_string(),
        }]
    );

    Ok(())
}
