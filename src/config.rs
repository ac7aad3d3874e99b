use crate::error::{config::ConfigError, AppError};

const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_COMMUNITY_NAME: &str = "community";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    pub verified_role_id: u64,
    pub verification_channel_id: u64,
    /// Channel audit embeds are posted to; audit entries are only logged when unset.
    pub audit_log_channel_id: Option<u64>,

    pub command_prefix: String,
    pub community_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            verified_role_id: parse_id("VERIFIED_ROLE_ID", required("VERIFIED_ROLE_ID")?)?,
            verification_channel_id: parse_id(
                "VERIFICATION_CHANNEL_ID",
                required("VERIFICATION_CHANNEL_ID")?,
            )?,
            audit_log_channel_id: optional("AUDIT_LOG_CHANNEL_ID")
                .map(|value| parse_id("AUDIT_LOG_CHANNEL_ID", value))
                .transpose()?,
            command_prefix: optional("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            community_name: optional("COMMUNITY_NAME")
                .unwrap_or_else(|| DEFAULT_COMMUNITY_NAME.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Parses a Discord snowflake; zero is rejected since serenity ids must be non-zero.
fn parse_id(name: &str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
