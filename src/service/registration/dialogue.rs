//! Registration dialogue state machine.
//!
//! The dialogue collects a first name, last name and school email in a DM, then asks the
//! member to confirm with a reaction. It is driven from outside: the runner feeds it
//! events and calls [`RegistrationDialogue::expire`] once [`RegistrationDialogue::deadline`]
//! passes. Every await state has its own deadline, armed when its prompt is sent.

use sea_orm::{DbErr, SqlErr};
use serenity::all::{ChannelId, MessageId, UserId};
use tokio::time::{Duration, Instant};

use crate::{
    data::{allowed_email::AllowedEmailRepository, registration::RegistrationRepository},
    error::AppError,
    model::{registration::PendingRegistration, reply::Reply},
    service::context::BotContext,
    util::{email, name::capwords},
};

/// Time allowed to answer a name or email prompt.
pub const PROMPT_TIMEOUT: Duration = Duration::from_secs(1800);
/// Time allowed to react to the confirmation summary.
pub const CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(60);

pub const CONFIRM_EMOJI: &str = "✅";
pub const REJECT_EMOJI: &str = "❌";

const FIRST_NAME_PROMPT: &str = "What is your first name?";
const LAST_NAME_PROMPT: &str = "What is your last name?";
const EMAIL_PROMPT: &str = "What is your **personal** school email?";
const INVALID_EMAIL: &str =
    "That is not a valid EDU email!\n\nContact modmail if you'd like to add yours.";
const EMAIL_TAKEN: &str =
    "Your email is already taken!\n\nPlease contact modmail if you think this was a mistake.";
const SUBMITTED: &str = "Check your email for further instructions :smile:";
const TIMED_OUT: &str = "Timed out. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueState {
    AwaitFirstName,
    AwaitLastName,
    AwaitEmail,
    /// Waiting for a reaction on the summary message.
    AwaitConfirmation {
        summary: MessageId,
    },
    Submitted,
    Cancelled,
    TimedOut,
}

impl DialogueState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted | Self::Cancelled | Self::TimedOut)
    }
}

/// Input fed to a running dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueEvent {
    Message {
        author: UserId,
        channel: ChannelId,
        content: String,
    },
    Reaction {
        user: UserId,
        message: MessageId,
        emoji: String,
    },
}

/// One member's registration conversation.
pub struct RegistrationDialogue {
    author: UserId,
    channel: ChannelId,
    state: DialogueState,
    registration: PendingRegistration,
    deadline: Instant,
}

impl RegistrationDialogue {
    /// Creates a dialogue for `author` in their DM `channel`.
    ///
    /// Nothing is sent until [`begin`](Self::begin) is called.
    pub fn new(author: UserId, channel: ChannelId) -> Self {
        Self {
            author,
            channel,
            state: DialogueState::AwaitFirstName,
            registration: PendingRegistration::default(),
            deadline: Instant::now() + PROMPT_TIMEOUT,
        }
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn state(&self) -> DialogueState {
        self.state
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    #[cfg(test)]
    pub fn registration(&self) -> &PendingRegistration {
        &self.registration
    }

    /// Sends the first prompt.
    pub async fn begin(&mut self, ctx: &BotContext) -> Result<(), AppError> {
        self.prompt(ctx, FIRST_NAME_PROMPT).await
    }

    /// Applies one event.
    ///
    /// Messages from another author or channel, and reactions that are not the
    /// invoking author's ✅/❌ on the summary, are ignored.
    pub async fn handle(&mut self, ctx: &BotContext, event: DialogueEvent) -> Result<(), AppError> {
        match event {
            DialogueEvent::Message {
                author,
                channel,
                content,
            } => {
                if author != self.author || channel != self.channel {
                    return Ok(());
                }
                self.on_message(ctx, &content).await
            }
            DialogueEvent::Reaction {
                user,
                message,
                emoji,
            } => {
                if user != self.author {
                    return Ok(());
                }
                self.on_reaction(ctx, message, &emoji).await
            }
        }
    }

    /// Ends the dialogue because its deadline passed.
    pub async fn expire(&mut self, ctx: &BotContext) -> Result<(), AppError> {
        if self.state.is_terminal() {
            return Ok(());
        }

        tracing::debug!(
            "Registration dialogue for {} timed out in {:?}",
            self.author,
            self.state
        );
        self.state = DialogueState::TimedOut;
        ctx.platform
            .send(self.channel, Reply::error(TIMED_OUT))
            .await?;

        Ok(())
    }

    /// Ends the dialogue silently, e.g. when it was replaced by a newer one.
    pub fn abandon(&mut self) {
        if !self.state.is_terminal() {
            self.state = DialogueState::Cancelled;
        }
    }

    async fn on_message(&mut self, ctx: &BotContext, content: &str) -> Result<(), AppError> {
        match self.state {
            DialogueState::AwaitFirstName => {
                let Some(first_name) = Self::name_from(content) else {
                    return self.prompt(ctx, FIRST_NAME_PROMPT).await;
                };
                self.registration.first_name = first_name;
                self.state = DialogueState::AwaitLastName;
                self.prompt(ctx, LAST_NAME_PROMPT).await
            }
            DialogueState::AwaitLastName => {
                let Some(last_name) = Self::name_from(content) else {
                    return self.prompt(ctx, LAST_NAME_PROMPT).await;
                };
                self.registration.last_name = last_name;
                self.state = DialogueState::AwaitEmail;
                self.prompt(ctx, EMAIL_PROMPT).await
            }
            DialogueState::AwaitEmail => self.on_email(ctx, content).await,
            _ => Ok(()),
        }
    }

    async fn on_email(&mut self, ctx: &BotContext, content: &str) -> Result<(), AppError> {
        let address = email::normalize(content);

        let allow_list = AllowedEmailRepository::new(&ctx.db);
        if !allow_list.is_edu_email(&address, false).await? {
            ctx.platform
                .send(self.channel, Reply::error(INVALID_EMAIL))
                .await?;
            return self.prompt(ctx, EMAIL_PROMPT).await;
        }

        let registrations = RegistrationRepository::new(&ctx.db);
        if registrations.email_taken(&address).await? {
            self.state = DialogueState::Cancelled;
            ctx.platform
                .send(self.channel, Reply::error(EMAIL_TAKEN))
                .await?;
            return Ok(());
        }

        self.registration.email = address;

        let summary = ctx
            .platform
            .send(
                self.channel,
                Reply::Summary {
                    registration: self.registration.clone(),
                    author: self.author,
                },
            )
            .await?;
        ctx.platform
            .add_reaction(self.channel, summary, CONFIRM_EMOJI)
            .await?;
        ctx.platform
            .add_reaction(self.channel, summary, REJECT_EMOJI)
            .await?;

        self.state = DialogueState::AwaitConfirmation { summary };
        self.deadline = Instant::now() + CONFIRMATION_TIMEOUT;

        Ok(())
    }

    async fn on_reaction(
        &mut self,
        ctx: &BotContext,
        message: MessageId,
        emoji: &str,
    ) -> Result<(), AppError> {
        let DialogueState::AwaitConfirmation { summary } = self.state else {
            return Ok(());
        };
        if message != summary {
            return Ok(());
        }

        if emoji == CONFIRM_EMOJI {
            self.submit(ctx).await
        } else if emoji == REJECT_EMOJI {
            self.state = DialogueState::Cancelled;
            ctx.platform
                .send(
                    self.channel,
                    Reply::text(format!(
                        "Try again with `{}register`",
                        ctx.settings.command_prefix
                    )),
                )
                .await?;
            Ok(())
        } else {
            Ok(())
        }
    }

    async fn submit(&mut self, ctx: &BotContext) -> Result<(), AppError> {
        let registrations = RegistrationRepository::new(&ctx.db);

        let record = match registrations.add_verification(&self.registration).await {
            Ok(record) => record,
            Err(AppError::DbErr(e)) if is_unique_violation(&e) => {
                if !registrations.email_taken(&self.registration.email).await? {
                    return Err(e.into());
                }

                // Another dialogue stored the same email after our check.
                self.state = DialogueState::Cancelled;
                ctx.platform
                    .send(self.channel, Reply::error(EMAIL_TAKEN))
                    .await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        self.state = DialogueState::Submitted;

        tracing::info!(
            "Stored pending registration for {} ({})",
            self.author,
            record.email
        );

        ctx.platform
            .send(self.channel, Reply::success(SUBMITTED))
            .await?;
        ctx.audit.registered(self.author, &self.registration).await;

        Ok(())
    }

    async fn prompt(&mut self, ctx: &BotContext, text: &str) -> Result<(), AppError> {
        ctx.platform.send(self.channel, Reply::text(text)).await?;
        self.deadline = Instant::now() + PROMPT_TIMEOUT;
        Ok(())
    }

    fn name_from(content: &str) -> Option<String> {
        let name = capwords(content);
        (!name.is_empty()).then_some(name)
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
