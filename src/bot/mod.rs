//! Discord gateway integration.
//!
//! Everything serenity-specific lives here: the event handler that routes gateway events
//! to services, the command parser, the dialogue router, the invite-use cache and the
//! serenity-backed implementations of the `Platform` and `AuditLog` traits.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability, used to prime the invite cache
//! - `GUILD_MEMBERS` - Member join and leave events (privileged intent)
//! - `GUILD_MESSAGES` / `DIRECT_MESSAGES` - Commands and dialogue answers
//! - `MESSAGE_CONTENT` - Reading command text (privileged intent)
//! - `GUILD_MESSAGE_REACTIONS` / `DIRECT_MESSAGE_REACTIONS` - Confirmation reactions
//! - `GUILD_INVITES` - Invite create and delete events for the invite cache
//!
//! Note: `GUILD_MEMBERS` and `MESSAGE_CONTENT` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application. The bot
//! also needs the Manage Server permission to list invites, and Manage Roles and Manage
//! Nicknames to apply verification.

pub mod audit;
pub mod command;
pub mod embed;
pub mod handler;
pub mod invite_tracker;
pub mod platform;
pub mod router;
pub mod start;
