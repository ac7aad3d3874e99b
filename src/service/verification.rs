//! `verify <auth_code>` command.

use crate::{
    data::{invite::InviteRepository, registration::RegistrationRepository},
    error::AppError,
    model::{invocation::Invocation, reply::Reply},
    service::{audit::InviteAttribution, context::BotContext},
};
use serenity::all::UserId;

const MISSING_CODE: &str = "No email verification code provided.";
const ALREADY_REGISTERED: &str =
    "Your ID is already registered.\nIf you think this was a mistake please contact an admin.";
const INVALID_CODE: &str = "Not a valid verification code.";
const VERIFIED: &str = "You're in! :smile:";

/// How a `verify` invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    MissingCode,
    WrongChannel,
    AlreadyVerified,
    InvalidCode,
    Verified { nickname: String },
}

/// Service handling the `verify` command.
pub struct VerificationService<'a> {
    ctx: &'a BotContext,
}

impl<'a> VerificationService<'a> {
    pub fn new(ctx: &'a BotContext) -> Self {
        Self { ctx }
    }

    /// Redeems an auth code for the invoking member.
    ///
    /// Checks run in order and stop at the first failure, which is reported to the
    /// member and changes nothing: code present, verification channel, member not yet
    /// verified, code known and unredeemed. On success the record is verified, the
    /// verified role and nickname are applied, the audit log is notified and the
    /// member's invite edge, if any, is consumed.
    ///
    /// # Arguments
    /// - `invocation` - Who invoked the command and where
    /// - `auth_code` - Command argument, if one was given
    pub async fn verify(
        &self,
        invocation: &Invocation,
        auth_code: Option<&str>,
    ) -> Result<VerifyOutcome, AppError> {
        let settings = &self.ctx.settings;
        let platform = &self.ctx.platform;

        let Some(auth_code) = auth_code.map(str::trim).filter(|code| !code.is_empty()) else {
            platform
                .send(invocation.channel, Reply::error(MISSING_CODE))
                .await?;
            return Ok(VerifyOutcome::MissingCode);
        };
        let auth_code = auth_code.to_uppercase();

        let guild = match invocation.guild {
            Some(guild) if invocation.channel == settings.verification_channel => guild,
            _ => {
                platform
                    .send(
                        invocation.channel,
                        Reply::error(format!(
                            "Command can only be run in <#{}>",
                            settings.verification_channel
                        )),
                    )
                    .await?;
                return Ok(VerifyOutcome::WrongChannel);
            }
        };

        let author_id = invocation.author.get();
        let registrations = RegistrationRepository::new(&self.ctx.db);

        if registrations.id_taken(author_id).await? {
            platform
                .send(invocation.channel, Reply::error(ALREADY_REGISTERED))
                .await?;
            return Ok(VerifyOutcome::AlreadyVerified);
        }

        if !registrations.auth_code_taken(&auth_code).await? {
            return self.reject_code(invocation).await;
        }

        let Some(nickname) = registrations.verify_user(author_id, &auth_code).await? else {
            // Redeemed by someone else between the two queries.
            return self.reject_code(invocation).await;
        };

        platform
            .reply(invocation.channel, invocation.message, Reply::success(VERIFIED))
            .await?;
        platform
            .add_role(guild, invocation.author, settings.verified_role)
            .await?;
        platform
            .set_nickname(guild, invocation.author, &nickname)
            .await?;

        let invite = self.consume_invite(author_id).await?;
        self.ctx
            .audit
            .verified(invocation.author, &nickname, invite)
            .await;

        tracing::info!("Verified {} as {}", invocation.author, nickname);

        Ok(VerifyOutcome::Verified { nickname })
    }

    async fn reject_code(&self, invocation: &Invocation) -> Result<VerifyOutcome, AppError> {
        self.ctx
            .platform
            .reply(
                invocation.channel,
                invocation.message,
                Reply::error(INVALID_CODE),
            )
            .await?;
        Ok(VerifyOutcome::InvalidCode)
    }

    async fn consume_invite(&self, invitee_id: u64) -> Result<Option<InviteAttribution>, AppError> {
        let invites = InviteRepository::new(&self.ctx.db);

        let Some(edge) = invites.find_unconsumed(invitee_id).await? else {
            return Ok(None);
        };
        if !invites.consume(invitee_id).await? {
            return Ok(None);
        }

        let verified_invites = invites.count_consumed_by_inviter(edge.inviter_id).await?;

        Ok(Some(InviteAttribution {
            inviter: UserId::new(edge.inviter_id),
            verified_invites,
        }))
    }
}
