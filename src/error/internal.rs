use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a stored Discord id from String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A verified member has no registration record to restore from.
    ///
    /// Occurs when `id_taken` reported a record but the follow-up lookup did not find
    /// one, e.g. the row was deleted between the two queries.
    #[error("No verified registration found for Discord user {discord_id}")]
    MissingRegistration {
        /// Discord id of the member being restored
        discord_id: u64,
    },

    /// Could not generate an auth code that is not already in use.
    #[error("Failed to generate a unique auth code after {attempts} attempts")]
    AuthCodeExhausted {
        /// Number of generation attempts made
        attempts: usize,
    },
}
