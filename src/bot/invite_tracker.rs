//! Invite attribution by diffing invite use counts.
//!
//! Discord does not say which invite a member joined with. The tracker caches the use
//! count of every invite per guild and, when a member joins, fetches fresh counts and
//! looks for the invite whose count went up. Single-use invites are deleted by Discord as
//! soon as they are used, so an invite that vanished is the fallback.

use serenity::{
    all::{GuildId, RichInvite, UserId},
    http::Http,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::AppError;

/// Cached state of one invite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InviteUse {
    pub uses: u64,
    pub inviter: Option<UserId>,
}

type InviteUses = HashMap<String, InviteUse>;

#[derive(Default)]
pub struct InviteTracker {
    guilds: RwLock<HashMap<GuildId, InviteUses>>,
}

impl InviteTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the current invites of a guild into the cache.
    pub async fn prime(&self, http: &Http, guild: GuildId) -> Result<(), AppError> {
        let invites = fetch(http, guild).await?;
        tracing::debug!("Cached {} invites for guild {}", invites.len(), guild);

        self.guilds.write().await.insert(guild, invites);

        Ok(())
    }

    pub async fn record_created(&self, guild: GuildId, code: String, invite: InviteUse) {
        self.guilds
            .write()
            .await
            .entry(guild)
            .or_default()
            .insert(code, invite);
    }

    pub async fn record_deleted(&self, guild: GuildId, code: &str) {
        if let Some(invites) = self.guilds.write().await.get_mut(&guild) {
            invites.remove(code);
        }
    }

    /// Works out who invited the member that just joined `guild`.
    ///
    /// Holds the cache lock across the fetch so concurrent joins are diffed one after
    /// another against up-to-date counts.
    pub async fn resolve(&self, http: &Http, guild: GuildId) -> Result<Option<UserId>, AppError> {
        let mut guilds = self.guilds.write().await;

        let current = fetch(http, guild).await?;
        let inviter = guilds
            .get(&guild)
            .and_then(|previous| used_invite(previous, &current))
            .and_then(|invite| invite.inviter);

        guilds.insert(guild, current);

        Ok(inviter)
    }
}

async fn fetch(http: &Http, guild: GuildId) -> Result<InviteUses, AppError> {
    let invites: Vec<RichInvite> = guild.invites(http).await?;

    Ok(invites
        .into_iter()
        .map(|invite| {
            (
                invite.code,
                InviteUse {
                    uses: invite.uses,
                    inviter: invite.inviter.map(|user| user.id),
                },
            )
        })
        .collect())
}

/// Picks the invite consumed between two snapshots.
///
/// Prefers the single invite whose use count increased; otherwise the single invite that
/// disappeared. Ambiguous or empty diffs yield `None`.
pub fn used_invite(previous: &InviteUses, current: &InviteUses) -> Option<InviteUse> {
    let increased: Vec<&InviteUse> = current
        .iter()
        .filter(|(code, invite)| {
            previous
                .get(*code)
                .map_or(invite.uses > 0, |before| invite.uses > before.uses)
        })
        .map(|(_, invite)| invite)
        .collect();

    if let [invite] = increased.as_slice() {
        return Some(**invite);
    }
    if !increased.is_empty() {
        return None;
    }

    let vanished: Vec<&InviteUse> = previous
        .iter()
        .filter(|(code, _)| !current.contains_key(*code))
        .map(|(_, invite)| invite)
        .collect();

    match vanished.as_slice() {
        [invite] => Some(**invite),
        _ => None,
    }
}
