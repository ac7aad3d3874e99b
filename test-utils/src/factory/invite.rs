//! Invite edge factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating invite attribution edges.
pub struct InviteFactory<'a> {
    db: &'a DatabaseConnection,
    invitee_id: String,
    inviter_id: String,
    consumed: bool,
}

impl<'a> InviteFactory<'a> {
    /// Creates a new unconsumed edge from `inviter_id` to `invitee_id`.
    pub fn new(
        db: &'a DatabaseConnection,
        invitee_id: impl Into<String>,
        inviter_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            invitee_id: invitee_id.into(),
            inviter_id: inviter_id.into(),
            consumed: false,
        }
    }

    pub fn consumed(mut self, consumed: bool) -> Self {
        self.consumed = consumed;
        self
    }

    /// Builds and inserts the invite entity into the database.
    pub async fn build(self) -> Result<entity::invite::Model, DbErr> {
        entity::invite::ActiveModel {
            invitee_id: ActiveValue::Set(self.invitee_id),
            inviter_id: ActiveValue::Set(self.inviter_id),
            consumed: ActiveValue::Set(self.consumed),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unconsumed invite edge.
pub async fn create_invite(
    db: &DatabaseConnection,
    invitee_id: impl Into<String>,
    inviter_id: impl Into<String>,
) -> Result<entity::invite::Model, DbErr> {
    InviteFactory::new(db, invitee_id, inviter_id).build().await
}
