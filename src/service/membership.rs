//! Guild join and leave handling.

use serenity::all::{GuildId, UserId};

use crate::{
    data::{invite::InviteRepository, registration::RegistrationRepository},
    error::{internal::InternalError, AppError},
    model::reply::Reply,
    service::context::BotContext,
};

/// How a member join was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// A previously verified member came back; role and nickname were re-applied.
    Reverified { nickname: String },
    /// An invite edge was recorded.
    InviteRecorded { inviter: UserId },
    /// The invite used could not be attributed; nothing was recorded.
    InviterUnknown,
}

/// Service handling membership events.
pub struct MembershipService<'a> {
    ctx: &'a BotContext,
}

impl<'a> MembershipService<'a> {
    pub fn new(ctx: &'a BotContext) -> Self {
        Self { ctx }
    }

    /// Handles a member joining the guild.
    ///
    /// Previously verified members get their role and nickname back, a welcome-back DM
    /// and a single rejoin audit entry. Everyone else has their inviter resolved and an
    /// invite edge recorded; unresolved inviters are logged and skipped.
    ///
    /// # Returns
    /// - `Ok(JoinOutcome)` - What was done for the member
    /// - `Err(AppError)` - Store or platform failure
    pub async fn handle_join(&self, guild: GuildId, member: UserId) -> Result<JoinOutcome, AppError> {
        let registrations = RegistrationRepository::new(&self.ctx.db);

        if registrations.id_taken(member.get()).await? {
            return self.reverify(guild, member).await;
        }

        let Some(inviter) = self.ctx.platform.resolve_inviter(guild, member).await? else {
            tracing::warn!(
                "Could not resolve inviter for {} in guild {}; no invite recorded",
                member,
                guild
            );
            return Ok(JoinOutcome::InviterUnknown);
        };

        InviteRepository::new(&self.ctx.db)
            .create(member.get(), inviter.get())
            .await?;

        tracing::info!("{} joined guild {} via invite from {}", member, guild, inviter);

        Ok(JoinOutcome::InviteRecorded { inviter })
    }

    /// Handles a member leaving the guild.
    ///
    /// # Returns
    /// - `Ok(true)` - An unconsumed invite edge was removed
    /// - `Ok(false)` - Nothing to clean up
    pub async fn handle_leave(&self, member: UserId) -> Result<bool, AppError> {
        let invites = InviteRepository::new(&self.ctx.db);

        if !invites.was_invited(member.get()).await? {
            return Ok(false);
        }

        let removed = invites.remove(member.get()).await?;
        if removed {
            tracing::debug!("Removed unconsumed invite edge for {}", member);
        }

        Ok(removed)
    }

    async fn reverify(&self, guild: GuildId, member: UserId) -> Result<JoinOutcome, AppError> {
        let record = RegistrationRepository::new(&self.ctx.db)
            .find_by_discord_id(member.get())
            .await?
            .ok_or(InternalError::MissingRegistration {
                discord_id: member.get(),
            })?;
        let nickname = record.display_name();
        let settings = &self.ctx.settings;

        self.ctx
            .platform
            .add_role(guild, member, settings.verified_role)
            .await?;
        self.ctx
            .platform
            .set_nickname(guild, member, &nickname)
            .await?;
        self.ctx
            .platform
            .direct_message(
                member,
                Reply::text(format!(
                    "Welcome back to the {} Discord {}! I've automagically applied your \
                     verification again.\n\nIf you think this was a mistake, let an admin \
                     know :smile:",
                    settings.community_name, record.first_name
                )),
            )
            .await?;
        self.ctx.audit.rejoined(member, &nickname).await;

        tracing::info!("Re-applied verification for returning member {}", member);

        Ok(JoinOutcome::Reverified { nickname })
    }
}
