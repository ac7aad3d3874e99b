//! Invite attribution domain model.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Records which member invited `invitee_id` into the guild.
///
/// The edge is consumed once the invitee verifies, after which it is kept for analytics
/// and no longer removed when the invitee leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteEdge {
    pub invitee_id: u64,
    pub inviter_id: u64,
    pub consumed: bool,
    pub created_at: DateTime<Utc>,
}

impl InviteEdge {
    /// Converts an entity model to an invite edge at the repository boundary.
    pub fn from_entity(entity: entity::invite::Model) -> Result<Self, AppError> {
        Ok(Self {
            invitee_id: parse_u64_from_string(entity.invitee_id)?,
            inviter_id: parse_u64_from_string(entity.inviter_id)?,
            consumed: entity.consumed,
            created_at: entity.created_at,
        })
    }
}
