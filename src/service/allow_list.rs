//! `addemail <address>` command.

use crate::{
    data::allowed_email::AllowedEmailRepository,
    error::AppError,
    model::{invocation::Invocation, reply::Reply},
    service::context::BotContext,
    util::email,
};

const MISSING_ADDRESS: &str = "No email address provided.";
const ALREADY_VALID: &str = "Already a valid email address.";
const INVALID_PATTERN: &str = "That is not an email address or domain.";

/// How an `addemail` invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddEmailOutcome {
    MissingAddress,
    Invalid,
    AlreadyAllowed,
    Added { pattern: String },
}

/// Service handling the `addemail` command.
pub struct AllowListService<'a> {
    ctx: &'a BotContext,
}

impl<'a> AllowListService<'a> {
    pub fn new(ctx: &'a BotContext) -> Self {
        Self { ctx }
    }

    /// Adds an address or domain to the allow-list unless it is already accepted.
    ///
    /// A full address is checked against the allow-list only (an `.edu` address that is
    /// not listed is still added); a bare domain is checked as a domain.
    pub async fn add_email(
        &self,
        invocation: &Invocation,
        address: Option<&str>,
    ) -> Result<AddEmailOutcome, AppError> {
        let platform = &self.ctx.platform;

        let Some(pattern) = address.map(email::normalize).filter(|p| !p.is_empty()) else {
            platform
                .send(invocation.channel, Reply::error(MISSING_ADDRESS))
                .await?;
            return Ok(AddEmailOutcome::MissingAddress);
        };

        let allow_list = AllowedEmailRepository::new(&self.ctx.db);
        let already_allowed = if pattern.contains('@') {
            if email::domain_of(&pattern).is_none() {
                return self.reject(invocation).await;
            }
            allow_list.is_edu_email(&pattern, true).await?
        } else {
            if !email::is_domain(&pattern) {
                return self.reject(invocation).await;
            }
            allow_list.is_allowed_domain(&pattern).await?
        };

        if already_allowed {
            platform
                .send(invocation.channel, Reply::error(ALREADY_VALID))
                .await?;
            return Ok(AddEmailOutcome::AlreadyAllowed);
        }

        allow_list.add(&pattern).await?;
        platform
            .send(
                invocation.channel,
                Reply::success(format!("Added @{} as a valid email address.", pattern)),
            )
            .await?;

        tracing::info!("{} added {} to the email allow-list", invocation.author, pattern);

        Ok(AddEmailOutcome::Added { pattern })
    }

    async fn reject(&self, invocation: &Invocation) -> Result<AddEmailOutcome, AppError> {
        self.ctx
            .platform
            .send(invocation.channel, Reply::error(INVALID_PATTERN))
            .await?;
        Ok(AddEmailOutcome::Invalid)
    }
}
