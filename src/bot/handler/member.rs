use serenity::all::{GuildId, Member, User};

use crate::service::{
    context::BotContext,
    membership::{JoinOutcome, MembershipService},
};

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(bot: &BotContext, new_member: Member) {
    if new_member.user.bot {
        return;
    }

    let service = MembershipService::new(bot);

    match service
        .handle_join(new_member.guild_id, new_member.user.id)
        .await
    {
        Ok(JoinOutcome::Reverified { nickname }) => {
            tracing::info!("{} rejoined as {}", new_member.user.name, nickname)
        }
        Ok(_) => {}
        Err(e) => tracing::error!(
            "Failed to handle join of {} in guild {}: {}",
            new_member.user.id,
            new_member.guild_id,
            e
        ),
    }
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(bot: &BotContext, guild_id: GuildId, user: User) {
    if user.bot {
        return;
    }

    if let Err(e) = MembershipService::new(bot).handle_leave(user.id).await {
        tracing::error!(
            "Failed to handle leave of {} from guild {}: {}",
            user.id,
            guild_id,
            e
        );
    }
}
