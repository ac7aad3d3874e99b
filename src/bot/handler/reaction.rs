use serenity::all::{Reaction, ReactionType};

use crate::{bot::router::DialogueRouter, service::registration::DialogueEvent};

/// Handles reaction_add by forwarding unicode reactions to the reacting member's dialogue.
pub async fn handle_reaction_add(router: &DialogueRouter, reaction: Reaction) {
    let Some(user) = reaction.user_id else {
        return;
    };
    let ReactionType::Unicode(emoji) = reaction.emoji else {
        return;
    };

    router
        .dispatch(
            user,
            DialogueEvent::Reaction {
                user,
                message: reaction.message_id,
                emoji,
            },
        )
        .await;
}
