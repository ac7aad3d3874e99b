//! Invite edge repository.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::{error::AppError, model::invite::InviteEdge};

/// Repository providing the invite-edge lifecycle: create on join, remove on leave,
/// consume on verification.
pub struct InviteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InviteRepository<'a> {
    /// Creates a new InviteRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records that `inviter_id` invited `invitee_id`.
    ///
    /// There is at most one edge per invitee; joining again through another invite
    /// replaces the inviter.
    ///
    /// # Returns
    /// - `Ok(InviteEdge)` - The created or updated edge
    /// - `Err(AppError)` - Database error during upsert
    pub async fn create(&self, invitee_id: u64, inviter_id: u64) -> Result<InviteEdge, AppError> {
        let entity = entity::prelude::Invite::insert(entity::invite::ActiveModel {
            invitee_id: ActiveValue::Set(invitee_id.to_string()),
            inviter_id: ActiveValue::Set(inviter_id.to_string()),
            consumed: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::invite::Column::InviteeId)
                .update_columns([
                    entity::invite::Column::InviterId,
                    entity::invite::Column::CreatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        InviteEdge::from_entity(entity)
    }

    /// Finds the unconsumed edge for an invitee.
    pub async fn find_unconsumed(&self, invitee_id: u64) -> Result<Option<InviteEdge>, AppError> {
        let entity = entity::prelude::Invite::find()
            .filter(entity::invite::Column::InviteeId.eq(invitee_id.to_string()))
            .filter(entity::invite::Column::Consumed.eq(false))
            .one(self.db)
            .await?;

        entity.map(InviteEdge::from_entity).transpose()
    }

    /// Checks whether an unconsumed edge exists for the invitee.
    pub async fn was_invited(&self, invitee_id: u64) -> Result<bool, DbErr> {
        let count = entity::prelude::Invite::find()
            .filter(entity::invite::Column::InviteeId.eq(invitee_id.to_string()))
            .filter(entity::invite::Column::Consumed.eq(false))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes the invitee's edge unless it has been consumed.
    ///
    /// # Returns
    /// - `Ok(true)` - An unconsumed edge was removed
    /// - `Ok(false)` - Nothing to remove
    pub async fn remove(&self, invitee_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::Invite::delete_many()
            .filter(entity::invite::Column::InviteeId.eq(invitee_id.to_string()))
            .filter(entity::invite::Column::Consumed.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks the invitee's edge consumed.
    ///
    /// Only unconsumed edges are updated, so an edge is consumed at most once.
    ///
    /// # Returns
    /// - `Ok(true)` - The edge moved from unconsumed to consumed
    /// - `Ok(false)` - No unconsumed edge existed
    pub async fn consume(&self, invitee_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::Invite::update_many()
            .filter(entity::invite::Column::InviteeId.eq(invitee_id.to_string()))
            .filter(entity::invite::Column::Consumed.eq(false))
            .col_expr(entity::invite::Column::Consumed, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts how many members invited by `inviter_id` went on to verify.
    pub async fn count_consumed_by_inviter(&self, inviter_id: u64) -> Result<u64, DbErr> {
        entity::prelude::Invite::find()
            .filter(entity::invite::Column::InviterId.eq(inviter_id.to_string()))
            .filter(entity::invite::Column::Consumed.eq(true))
            .count(self.db)
            .await
    }
}
