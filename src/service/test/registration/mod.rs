use crate::{
    data::registration::RegistrationRepository,
    error::AppError,
    model::{invocation::Invocation, reply::Reply},
    service::registration::{
        dialogue::{CONFIRMATION_TIMEOUT, CONFIRM_EMOJI, PROMPT_TIMEOUT, REJECT_EMOJI},
        run_dialogue, DialogueEvent, DialogueState, RegistrationDialogue, RegistrationService,
    },
};
use serenity::all::{MessageId, UserId};
use test_utils::{builder::TestBuilder, factory};

use super::fake::{self, AuditEntry, PlatformCall, DM_CHANNEL, GUILD, MEMBER};


fn message(content: &str) -> DialogueEvent {
    DialogueEvent::Message {
        author: MEMBER,
        channel: DM_CHANNEL,
        content: content.to_string(),
    }
}

fn reaction(message: MessageId, emoji: &str) -> DialogueEvent {
    DialogueEvent::Reaction {
        user: MEMBER,
        message,
        emoji: emoji.to_string(),
    }
}

fn dm_invocation() -> Invocation {
    Invocation {
        author: MEMBER,
        channel: DM_CHANNEL,
        guild: None,
        message: MessageId::new(1),
    }
}
