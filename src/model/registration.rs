//! Registration domain models.

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    util::{name, parse::parse_u64_from_string},
};

/// Details collected by the registration dialogue before they are submitted.
///
/// Lives only as long as one dialogue; nothing is persisted until the member confirms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingRegistration {
    /// Title-cased first name.
    pub first_name: String,
    /// Title-cased last name.
    pub last_name: String,
    /// Normalised school email.
    pub email: String,
}

/// Stored registration, pending or verified.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    /// Discord id bound when the auth code was redeemed; `None` while pending.
    pub discord_id: Option<u64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// One-time code delivered to `email` out of band.
    pub auth_code: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub verified_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Converts an entity model to a record at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(UserRecord)` - The converted record
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored Discord id is not a u64
    pub fn from_entity(entity: entity::registration::Model) -> Result<Self, AppError> {
        let discord_id = entity.discord_id.map(parse_u64_from_string).transpose()?;

        Ok(Self {
            discord_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            auth_code: entity.auth_code,
            verified: entity.verified,
            created_at: entity.created_at,
            verified_at: entity.verified_at,
        })
    }

    /// Nickname applied to the member inside the guild.
    pub fn display_name(&self) -> String {
        name::nickname(&self.first_name, &self.last_name)
    }
}
