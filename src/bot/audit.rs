use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage, UserId},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::{
    bot::embed,
    model::registration::PendingRegistration,
    service::audit::{AuditLog, InviteAttribution},
};

/// [`AuditLog`] that emits a tracing event for every entry and, when configured, posts an
/// embed to the audit channel.
pub struct ChannelAuditLog {
    http: Arc<Http>,
    channel: Option<ChannelId>,
}

impl ChannelAuditLog {
    pub fn new(http: Arc<Http>, channel: Option<ChannelId>) -> Self {
        Self { http, channel }
    }

    async fn post(&self, embed: CreateEmbed) {
        let Some(channel) = self.channel else {
            return;
        };

        if let Err(e) = channel
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await
        {
            tracing::error!("Failed to post audit entry to channel {}: {}", channel, e);
        }
    }
}

#[async_trait]
impl AuditLog for ChannelAuditLog {
    async fn registered(&self, user: UserId, registration: &PendingRegistration) {
        tracing::info!(
            user = %user,
            email = %registration.email,
            "Registration submitted"
        );

        self.post(embed::registered_embed(user, registration)).await;
    }

    async fn verified(&self, user: UserId, nickname: &str, invite: Option<InviteAttribution>) {
        match invite {
            Some(invite) => tracing::info!(
                user = %user,
                nickname,
                inviter = %invite.inviter,
                verified_invites = invite.verified_invites,
                "Member verified"
            ),
            None => tracing::info!(user = %user, nickname, "Member verified"),
        }

        self.post(embed::verified_embed(user, nickname, invite)).await;
    }

    async fn rejoined(&self, user: UserId, nickname: &str) {
        tracing::info!(user = %user, nickname, "Verified member rejoined");

        self.post(embed::rejoined_embed(user, nickname)).await;
    }
}
