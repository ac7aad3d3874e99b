use serenity::all::UserId;

use crate::model::registration::PendingRegistration;

/// Message content the bot sends, independent of how the platform renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain message text.
    Text(String),
    /// Red error embed.
    Error(String),
    /// Green success embed.
    Success(String),
    /// Confirmation summary of a registration awaiting reactions.
    Summary {
        registration: PendingRegistration,
        author: UserId,
    },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::Error(text.into())
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::Success(text.into())
    }
}
