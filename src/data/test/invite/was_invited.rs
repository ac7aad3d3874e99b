use super::*;
use test_utils::factory::invite::InviteFactory;

/// Tests that an unconsumed edge counts as invited.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_unconsumed_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Invite)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_invite(db, "1001", "42").await?;

    let repo = InviteRepository::new(db);
    assert!(repo.was_invited(1001).await?);

    Ok(())
}

/// Tests that consumed edges are not reported.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_consumed_edge() -> Result<(), DbErr> {
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
    assert!(!repo.was_invited(1001).await?);

    Ok(())
}

/// Tests that members without an edge are not reported.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Invite)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InviteRepository::new(db);
    assert!(!repo.was_invited(1001).await?);

    Ok(())
}
