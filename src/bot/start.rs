use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, Client, GatewayIntents},
    http::Http,
};
use std::sync::Arc;

use crate::{
    bot::{
        audit::ChannelAuditLog, handler::Handler, invite_tracker::InviteTracker,
        platform::SerenityPlatform, router::DialogueRouter,
    },
    config::Config,
    error::AppError,
    service::context::{BotContext, Settings},
};

/// Builds the Discord client and the context every handler receives.
///
/// The HTTP client is created up front and shared between the gateway client, the
/// platform implementation and the audit log so all Discord calls go through one rate
/// limiter.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection for the bot to use
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started with [`start_bot`]
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config, db: DatabaseConnection) -> Result<Client, AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGE_REACTIONS
        | GatewayIntents::GUILD_INVITES;

    let http = Arc::new(Http::new(&config.discord_bot_token));
    let invites = Arc::new(InviteTracker::new());

    let platform = Arc::new(SerenityPlatform::new(http.clone(), invites.clone()));
    let audit = Arc::new(ChannelAuditLog::new(
        http.clone(),
        config.audit_log_channel_id.map(ChannelId::new),
    ));

    let bot = BotContext::new(db, platform, audit, Settings::from_config(config));
    let handler = Handler::new(bot, DialogueRouter::new(), invites);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner.
///
/// Runs until the gateway connection shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
