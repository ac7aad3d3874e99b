use super::*;

/// Tests consuming an edge.
///
/// Expected: Ok(true), edge no longer reported as invited
#[tokio::test]
async fn consumes_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Invite)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_invite(db, "1001", "42").await?;

    let repo = InviteRepository::new(db);
    assert!(repo.consume(1001).await?);
    assert!(!repo.was_invited(1001).await?);
    assert_eq!(repo.count_consumed_by_inviter(42).await?, 1);

    Ok(())
}

/// Tests that an edge is consumed at most once.
///
/// Expected: second call Ok(false), inviter count unchanged
#[tokio::test]
async fn consumes_at_most_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Invite)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_invite(db, "1001", "42").await?;

    let repo = InviteRepository::new(db);
    assert!(repo.consume(1001).await?);
    assert!(!repo.consume(1001).await?);
    assert_eq!(repo.count_consumed_by_inviter(42).await?, 1);

    Ok(())
}

/// Tests consuming only touches the invitee's edge.
///
/// Expected: other edges remain unconsumed
#[tokio::test]
async fn leaves_other_edges_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Invite)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_invite(db, "1001", "42").await?;
    factory::create_invite(db, "1002", "42").await?;

    let repo = InviteRepository::new(db);
    repo.consume(1001).await?;

    assert!(repo.was_invited(1002).await?);
    assert_eq!(repo.count_consumed_by_inviter(42).await?, 1);

    Ok(())
}
