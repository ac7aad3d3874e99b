//! Context handed to every handler and service.

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, RoleId};
use std::sync::Arc;

use crate::{
    config::Config,
    service::{audit::AuditLog, platform::Platform},
};

/// Guild-specific settings the services need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Role granted once a member verifies.
    pub verified_role: RoleId,
    /// Only channel in which `verify` is accepted.
    pub verification_channel: ChannelId,
    /// Prefix in front of command names, e.g. `!`.
    pub command_prefix: String,
    /// Community name used in the welcome-back DM.
    pub community_name: String,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            verified_role: RoleId::new(config.verified_role_id),
            verification_channel: ChannelId::new(config.verification_channel_id),
            command_prefix: config.command_prefix.clone(),
            community_name: config.community_name.clone(),
        }
    }
}

/// Everything a handler may use, passed explicitly instead of a global client.
///
/// Cheap to clone: the connection is a pool and the collaborators are reference counted.
#[derive(Clone)]
pub struct BotContext {
    pub db: DatabaseConnection,
    pub platform: Arc<dyn Platform>,
    pub audit: Arc<dyn AuditLog>,
    pub settings: Arc<Settings>,
}

impl BotContext {
    pub fn new(
        db: DatabaseConnection,
        platform: Arc<dyn Platform>,
        audit: Arc<dyn AuditLog>,
        settings: Settings,
    ) -> Self {
        Self {
            db,
            platform,
            audit,
            settings: Arc::new(settings),
        }
    }
}
