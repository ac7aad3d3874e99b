//! Rendering of [`Reply`] values into Discord messages.

use serenity::all::{CreateEmbed, CreateEmbedFooter, CreateMessage, Mentionable, UserId};

use crate::{
    model::{registration::PendingRegistration, reply::Reply},
    service::{
        audit::InviteAttribution,
        registration::dialogue::{CONFIRM_EMOJI, REJECT_EMOJI},
    },
};

const ERROR_COLOR: u32 = 0xE74C3C;
const SUCCESS_COLOR: u32 = 0x2ECC71;
const INFO_COLOR: u32 = 0x3498DB;

pub fn render(reply: Reply) -> CreateMessage {
    match reply {
        Reply::Text(text) => CreateMessage::new().content(text),
        Reply::Error(text) => CreateMessage::new().embed(
            CreateEmbed::new()
                .title("Error")
                .description(text)
                .color(ERROR_COLOR),
        ),
        Reply::Success(text) => CreateMessage::new().embed(
            CreateEmbed::new()
                .title("Success")
                .description(text)
                .color(SUCCESS_COLOR),
        ),
        Reply::Summary {
            registration,
            author,
        } => CreateMessage::new().embed(summary_embed(&registration, author)),
    }
}

/// Confirmation summary shown before a registration is submitted.
fn summary_embed(registration: &PendingRegistration, author: UserId) -> CreateEmbed {
    CreateEmbed::new()
        .title("Is this information correct?")
        .color(INFO_COLOR)
        .field("First Name", &registration.first_name, true)
        .field("Last Name", &registration.last_name, true)
        .field("Email", &registration.email, false)
        .field("Discord", author.mention().to_string(), false)
        .footer(CreateEmbedFooter::new(format!(
            "React with {} to confirm or {} to start over",
            CONFIRM_EMOJI, REJECT_EMOJI
        )))
}

pub fn registered_embed(user: UserId, registration: &PendingRegistration) -> CreateEmbed {
    CreateEmbed::new()
        .title("New registration")
        .color(INFO_COLOR)
        .field("Member", user.mention().to_string(), false)
        .field(
            "Name",
            format!("{} {}", registration.first_name, registration.last_name),
            false,
        )
        .field("Email", &registration.email, false)
}

pub fn verified_embed(
    user: UserId,
    nickname: &str,
    invite: Option<InviteAttribution>,
) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Member verified")
        .color(SUCCESS_COLOR)
        .field("Member", user.mention().to_string(), false)
        .field("Nickname", nickname, false);

    if let Some(invite) = invite {
        embed = embed.field(
            "Invited by",
            format!(
                "{} ({} verified invites)",
                invite.inviter.mention(),
                invite.verified_invites
            ),
            false,
        );
    }

    embed
}

pub fn rejoined_embed(user: UserId, nickname: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Verified member rejoined")
        .color(INFO_COLOR)
        .field("Member", user.mention().to_string(), false)
        .field("Nickname", nickname, false)
}
