//! Capabilities the bot needs from the chat platform.

use serenity::all::{ChannelId, GuildId, MessageId, RoleId, UserId};
use serenity::async_trait;

use crate::{error::AppError, model::reply::Reply};

/// Discord operations available to services.
///
/// Implemented over serenity's HTTP client by `bot::platform::SerenityPlatform`.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Sends a message to a channel and returns its id.
    async fn send(&self, channel: ChannelId, reply: Reply) -> Result<MessageId, AppError>;

    /// Sends a message to a channel as a reply to `message`.
    async fn reply(
        &self,
        channel: ChannelId,
        message: MessageId,
        reply: Reply,
    ) -> Result<MessageId, AppError>;

    /// Opens (or reuses) a DM channel with `user` and sends a message there.
    async fn direct_message(&self, user: UserId, reply: Reply) -> Result<(), AppError>;

    /// Adds a unicode emoji reaction to a message.
    async fn add_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        emoji: &str,
    ) -> Result<(), AppError>;

    /// Grants a guild role to a member.
    async fn add_role(&self, guild: GuildId, user: UserId, role: RoleId) -> Result<(), AppError>;

    /// Sets a member's guild nickname.
    async fn set_nickname(&self, guild: GuildId, user: UserId, nickname: &str)
        -> Result<(), AppError>;

    /// Works out who invited a member that has just joined.
    ///
    /// # Returns
    /// - `Ok(Some(inviter))` - The invite used could be attributed
    /// - `Ok(None)` - No invite could be attributed (vanity URL, expired invite, ...)
    async fn resolve_inviter(&self, guild: GuildId, member: UserId)
        -> Result<Option<UserId>, AppError>;
}
