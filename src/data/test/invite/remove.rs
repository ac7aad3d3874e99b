use super::*;
use test_utils::factory::invite::InviteFactory;

/// Tests removing an unconsumed edge.
///
/// Expected: Ok(true) and edge gone
#[tokio::test]
async fn removes_unconsumed_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Invite)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_invite(db, "1001", "42").await?;

    let repo = InviteRepository::new(db);
    assert!(repo.remove(1001).await?);
    assert!(!repo.was_invited(1001).await?);

    Ok(())
}

/// Tests that consumed edges survive removal.
///
/// Expected: Ok(false) and edge still counted for the inviter
#[tokio::test]
async fn keeps_consumed_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Invite)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    InviteFactory::new(db, "1001", "42")
        .consumed(true)
        .build()
        .await?;

    let repo = InviteRepository::new(db);
    assert!(!repo.remove(1001).await?);
    assert_eq!(repo.count_consumed_by_inviter(42).await?, 1);

    Ok(())
}

/// Tests removing when nothing exists.
///
/// Expected: Ok(false)
#[tokio::test]
async fn no_op_without_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Invite)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InviteRepository::new(db);
    assert!(!repo.remove(1001).await?);

    Ok(())
}
