use serenity::all::{ChannelId, GuildId, Message, MessageId, UserId};

/// Where and by whom a chat command was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub author: UserId,
    pub channel: ChannelId,
    /// `None` for direct messages.
    pub guild: Option<GuildId>,
    pub message: MessageId,
}

impl Invocation {
    pub fn from_message(message: &Message) -> Self {
        Self {
            author: message.author.id,
            channel: message.channel_id,
            guild: message.guild_id,
            message: message.id,
        }
    }

    /// Whether the command was sent in a one-to-one channel with the bot.
    pub fn is_private(&self) -> bool {
        self.guild.is_none()
    }
}
