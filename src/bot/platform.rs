use serenity::{
    all::{
        ChannelId, EditMember, GuildId, MessageId, MessageReference, ReactionType, RoleId, UserId,
    },
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::{
    bot::{embed, invite_tracker::InviteTracker},
    error::AppError,
    model::reply::Reply,
    service::platform::Platform,
};

const VERIFY_AUDIT_REASON: &str = "Email verification";

/// [`Platform`] over serenity's HTTP client.
pub struct SerenityPlatform {
    http: Arc<Http>,
    invites: Arc<InviteTracker>,
}

impl SerenityPlatform {
    pub fn new(http: Arc<Http>, invites: Arc<InviteTracker>) -> Self {
        Self { http, invites }
    }
}

#[async_trait]
impl Platform for SerenityPlatform {
    async fn send(&self, channel: ChannelId, reply: Reply) -> Result<MessageId, AppError> {
        let message = channel
            .send_message(&self.http, embed::render(reply))
            .await?;

        Ok(message.id)
    }

    async fn reply(
        &self,
        channel: ChannelId,
        message: MessageId,
        reply: Reply,
    ) -> Result<MessageId, AppError> {
        let builder =
            embed::render(reply).reference_message(MessageReference::from((channel, message)));
        let sent = channel.send_message(&self.http, builder).await?;

        Ok(sent.id)
    }

    async fn direct_message(&self, user: UserId, reply: Reply) -> Result<(), AppError> {
        user.direct_message(&self.http, embed::render(reply))
            .await?;

        Ok(())
    }

    async fn add_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        emoji: &str,
    ) -> Result<(), AppError> {
        channel
            .create_reaction(&self.http, message, ReactionType::Unicode(emoji.to_string()))
            .await?;

        Ok(())
    }

    async fn add_role(&self, guild: GuildId, user: UserId, role: RoleId) -> Result<(), AppError> {
        self.http
            .add_member_role(guild, user, role, Some(VERIFY_AUDIT_REASON))
            .await?;

        Ok(())
    }

    async fn set_nickname(
        &self,
        guild: GuildId,
        user: UserId,
        nickname: &str,
    ) -> Result<(), AppError> {
        guild
            .edit_member(
                &self.http,
                user,
                EditMember::new()
                    .nickname(nickname)
                    .audit_log_reason(VERIFY_AUDIT_REASON),
            )
            .await?;

        Ok(())
    }

    async fn resolve_inviter(
        &self,
        guild: GuildId,
        _member: UserId,
    ) -> Result<Option<UserId>, AppError> {
        self.invites.resolve(&self.http, guild).await
    }
}
