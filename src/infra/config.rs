//! Centralized configuration (environment variables + defaults).

use anyhow::Context;

/// Runtime configuration, built once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP listen port.
    pub port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_max_connections: u32,
    /// Full connection string; overrides the DB_* parts when set.
    pub database_url: Option<String>,
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, fallback: &str| lookup(key).unwrap_or_else(|| fallback.to_string());

        let port = var("PORT", "8080")
            .parse::<u16>()
            .context("PORT must be a valid port number")?;
        let db_port = var("DB_PORT", "5432")
            .parse::<u16>()
            .context("DB_PORT must be a valid port number")?;
        let db_max_connections = var("DB_MAX_CONNECTIONS", "5")
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid u32")?
            .max(1);

        Ok(Self {
            port,
            db_host: var("DB_HOST", "localhost"),
            db_port,
            db_user: var("DB_USER", "example_user"),
            db_password: var("DB_PASSWORD", "Passwd@1234"),
            db_name: var("DB_NAME", "bicdatabase"),
            db_max_connections,
            database_url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
        })
    }

    /// Address the HTTP server binds to.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
