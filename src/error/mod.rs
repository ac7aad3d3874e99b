//! Error types for the bot.
//!
//! `AppError` is the top-level error every service and handler returns. Domain-specific
//! errors live in their own modules and convert into it with `#[from]`. User-facing
//! failures (bad input, wrong channel, timeouts) are not errors: they are reported to the
//! user and modelled as outcomes. `AppError` is reserved for store and platform faults,
//! which are logged by the event handler and end the interaction.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Unexpected state indicating a bug or corrupt stored data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error so the large serenity error does not inflate every `AppError`.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
