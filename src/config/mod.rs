use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;
use sqlx::postgres::PgSslMode;

/// Configuration for the seeder
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Postgres connection string (`POSTGRES_URL`)
    pub postgres_url: String,
    /// TLS mode for the database connection (`POSTGRES_SSL_MODE`)
    #[serde(default = "default_ssl_mode")]
    pub postgres_ssl_mode: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Seconds an idle connection is kept before the pool drops it
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
}

fn default_ssl_mode() -> String {
    "require".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_idle_timeout() -> u64 {
    5
}

fn default_acquire_timeout() -> u64 {
    10
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function will:
    /// 1. Load variables from .env file if it exists
    /// 2. Deserialize environment variables into Config struct
    /// 3. Reject an SSL mode Postgres would not understand
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::from_env::<Config>()
            .context("failed to read configuration from the environment")?;
        config.validate()?;

        Ok(config)
    }

    /// Build a configuration from explicit key/value pairs instead of the process environment
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(pairs)
            .context("failed to read configuration")?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.ssl_mode()?;
        Ok(())
    }

    pub fn database_url(&self) -> &str {
        &self.postgres_url
    }

    pub fn ssl_mode(&self) -> Result<PgSslMode> {
        PgSslMode::from_str(&self.postgres_ssl_mode)
            .with_context(|| format!("unknown POSTGRES_SSL_MODE `{}`", self.postgres_ssl_mode))
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Initialize environment variables and load configuration
pub fn init() -> Result<Config> {
    Config::load()
}
