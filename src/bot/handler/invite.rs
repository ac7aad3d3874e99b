use serenity::all::{InviteCreateEvent, InviteDeleteEvent};

use crate::bot::invite_tracker::{InviteTracker, InviteUse};

pub async fn handle_invite_create(invites: &InviteTracker, data: InviteCreateEvent) {
    let Some(guild_id) = data.guild_id else {
        return;
    };

    tracing::debug!("Invite {} created in guild {}", data.code, guild_id);

    invites
        .record_created(
            guild_id,
            data.code,
            InviteUse {
                uses: data.uses,
                inviter: data.inviter.map(|user| user.id),
            },
        )
        .await;
}

pub async fn handle_invite_delete(invites: &InviteTracker, data: InviteDeleteEvent) {
    let Some(guild_id) = data.guild_id else {
        return;
    };

    tracing::debug!("Invite {} deleted in guild {}", data.code, guild_id);

    invites.record_deleted(guild_id, &data.code).await;
}
