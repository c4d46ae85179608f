use std::time::Duration;

use anyhow::Context as _;

/// Runtime settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub port: u16,
    pub skip_migrations: bool,
    pub introspection: bool,
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("invalid DATABASE_MAX_CONNECTIONS: {v}"))?,
            None => 30,
        };

        let port = match lookup("PORT") {
            Some(v) => v.parse().with_context(|| format!("invalid PORT: {v}"))?,
            None => 8080,
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(
                v.parse()
                    .with_context(|| format!("invalid REQUEST_TIMEOUT_SECS: {v}"))?,
            ),
            None => Duration::from_secs(30),
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        Ok(Self {
            database_url,
            max_connections,
            port,
            skip_migrations: flag(lookup("SKIP_MIGRATIONS")),
            introspection: flag(lookup("GQL_INTROSPECTION")),
            allowed_origins,
            request_timeout,
        })
    }
}

fn flag(value: Option<String>) -> bool {
    value.map(|v| v.to_lowercase() == "true").unwrap_or(false)
}
