use serenity::all::Message;

use crate::{
    bot::{command::Command, router::DialogueRouter},
    error::AppError,
    model::invocation::Invocation,
    service::{
        allow_list::AllowListService,
        context::BotContext,
        registration::{DialogueEvent, RegistrationService},
        verification::VerificationService,
    },
};

/// Handles message creation in a guild channel or DM.
///
/// Commands are dispatched to their service; any other DM is forwarded to the author's
/// running registration dialogue.
pub async fn handle_message(bot: &BotContext, router: &DialogueRouter, message: Message) {
    if message.author.bot {
        return;
    }

    let Some(command) = Command::parse(&bot.settings.command_prefix, &message.content) else {
        if message.guild_id.is_none() {
            router
                .dispatch(
                    message.author.id,
                    DialogueEvent::Message {
                        author: message.author.id,
                        channel: message.channel_id,
                        content: message.content,
                    },
                )
                .await;
        }
        return;
    };

    let invocation = Invocation::from_message(&message);
    tracing::debug!("{} invoked {:?} in {}", invocation.author, command, invocation.channel);

    if let Err(e) = run_command(bot, router, &invocation, command).await {
        tracing::error!(
            "Command from {} in channel {} failed: {}",
            invocation.author,
            invocation.channel,
            e
        );
    }
}

async fn run_command(
    bot: &BotContext,
    router: &DialogueRouter,
    invocation: &Invocation,
    command: Command,
) -> Result<(), AppError> {
    match command {
        Command::Register => {
            if let Some(dialogue) = RegistrationService::new(bot).start(invocation).await? {
                router.spawn(bot.clone(), dialogue).await;
            }
        }
        Command::Verify(code) => {
            VerificationService::new(bot)
                .verify(invocation, code.as_deref())
                .await?;
        }
        Command::AddEmail(address) => {
            AllowListService::new(bot)
                .add_email(invocation, address.as_deref())
                .await?;
        }
    }

    Ok(())
}
