use serenity::all::{
    Context, EventHandler, Guild, GuildId, InviteCreateEvent, InviteDeleteEvent, Member, Message,
    Reaction, Ready, User,
};
use serenity::async_trait;
use std::sync::Arc;

use crate::{
    bot::{invite_tracker::InviteTracker, router::DialogueRouter},
    service::context::BotContext,
};

pub mod guild;
pub mod invite;
pub mod member;
pub mod message;
pub mod reaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub bot: BotContext,
    pub router: DialogueRouter,
    pub invites: Arc<InviteTracker>,
}

impl Handler {
    pub fn new(bot: BotContext, router: DialogueRouter, invites: Arc<InviteTracker>) -> Self {
        Self {
            bot,
            router,
            invites,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.invites, ctx, guild, is_new).await;
    }

    /// Called when an invite is created in a guild
    async fn invite_create(&self, _ctx: Context, data: InviteCreateEvent) {
        invite::handle_invite_create(&self.invites, data).await;
    }

    /// Called when an invite is deleted or expires
    async fn invite_delete(&self, _ctx: Context, data: InviteDeleteEvent) {
        invite::handle_invite_delete(&self.invites, data).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, _ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.bot, new_member).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        _ctx: Context,
        guild_id: GuildId,
        user: User,
        _member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(&self.bot, guild_id, user).await;
    }

    /// Called when a message is sent in a guild channel or DM
    async fn message(&self, _ctx: Context, new_message: Message) {
        message::handle_message(&self.bot, &self.router, new_message).await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, _ctx: Context, add_reaction: Reaction) {
        reaction::handle_reaction_add(&self.router, add_reaction).await;
    }
}
