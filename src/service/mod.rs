//! Service layer holding the bot's behaviour.
//!
//! Each service receives a [`BotContext`](context::BotContext) explicitly and only talks to
//! Discord through the [`Platform`](platform::Platform) capability trait and to the audit
//! channel through [`AuditLog`](audit::AuditLog). The serenity-backed implementations live
//! in `bot`, which keeps everything here testable against in-memory fakes.
//!
//! - `registration` - DM dialogue collecting name and school email
//! - `verification` - `verify <auth_code>` command
//! - `membership` - guild join and leave handling, invite attribution
//! - `allow_list` - `addemail <address>` command

pub mod allow_list;
pub mod audit;
pub mod context;
pub mod membership;
pub mod platform;
pub mod registration;
pub mod verification;

#[cfg(test)]
mod test;
