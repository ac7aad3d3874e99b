//! DM registration flow.
//!
//! [`RegistrationService::start`] enforces the DM-only precondition and creates a
//! [`RegistrationDialogue`]; [`run_dialogue`] then drives it from an event feed until it
//! reaches a terminal state, expiring it whenever its deadline passes first.

pub mod dialogue;

use tokio::{sync::mpsc, time};

use crate::{
    error::AppError,
    model::{invocation::Invocation, reply::Reply},
    service::context::BotContext,
};

pub use dialogue::{DialogueEvent, DialogueState, RegistrationDialogue};

const DM_ONLY: &str = "Command can only be run in my DM's!";

/// Service handling the `register` command.
pub struct RegistrationService<'a> {
    ctx: &'a BotContext,
}

impl<'a> RegistrationService<'a> {
    pub fn new(ctx: &'a BotContext) -> Self {
        Self { ctx }
    }

    /// Validates where `register` was invoked and prepares a dialogue.
    ///
    /// # Returns
    /// - `Ok(Some(dialogue))` - Invoked in a DM; the dialogue is ready to run
    /// - `Ok(None)` - Invoked in a guild channel; the member was told to use DMs
    /// - `Err(AppError)` - Sending the error message failed
    pub async fn start(
        &self,
        invocation: &Invocation,
    ) -> Result<Option<RegistrationDialogue>, AppError> {
        if !invocation.is_private() {
            self.ctx
                .platform
                .send(invocation.channel, Reply::error(DM_ONLY))
                .await?;
            return Ok(None);
        }

        Ok(Some(RegistrationDialogue::new(
            invocation.author,
            invocation.channel,
        )))
    }
}

/// Drives a dialogue to completion.
///
/// A closed feed abandons the dialogue; a passed deadline expires it.
///
/// # Returns
/// - `Ok(DialogueState)` - The terminal state reached
/// - `Err(AppError)` - A store or platform call failed; the dialogue is dropped
pub async fn run_dialogue(
    ctx: &BotContext,
    mut dialogue: RegistrationDialogue,
    mut events: mpsc::Receiver<DialogueEvent>,
) -> Result<DialogueState, AppError> {
    dialogue.begin(ctx).await?;

    while !dialogue.state().is_terminal() {
        match time::timeout_at(dialogue.deadline(), events.recv()).await {
            Ok(Some(event)) => dialogue.handle(ctx, event).await?,
            Ok(None) => dialogue.abandon(),
            Err(_) => dialogue.expire(ctx).await?,
        }
    }

    Ok(dialogue.state())
}
