use thiserror::Error;

/// Anything that can stop a seed run.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("failed to hash password for {email}: {message}")]
    Hash { email: String, message: String },

    #[error("invalid database configuration: {0}")]
    Config(String),
}

/// Placeholder reported when an error carries no text of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

impl SeedError {
    /// Text surfaced to HTTP clients and the CLI.
    pub fn public_message(&self) -> String {
        or_unknown(self.to_string())
    }
}

fn or_unknown(message: String) -> String {
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}
