use serenity::all::{Context, Guild};

use crate::bot::invite_tracker::InviteTracker;

/// Handles the guild_create event by caching the guild's invites.
///
/// Joins that happen before the cache is primed cannot be attributed and are logged by
/// the join handler.
pub async fn handle_guild_create(
    invites: &InviteTracker,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}",
        guild.name,
        guild.id,
        guild.member_count
    );

    if let Err(e) = invites.prime(&ctx.http, guild.id).await {
        tracing::error!("Failed to cache invites for guild {}: {}", guild.id, e);
    }
}
