use std::time::Duration;

use anyhow::{Context, Result};
use arena::random::{DEFAULT_RANDOM_ORG_URL, DEFAULT_TIMEOUT};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub random_org_url: String,
    pub random_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let random_timeout = match std::env::var("RANDOM_TIMEOUT_SECS") {
            Ok(secs) => Duration::from_secs(
                secs.parse()
                    .context("RANDOM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            random_org_url: std::env::var("RANDOM_ORG_URL")
                .unwrap_or_else(|_| DEFAULT_RANDOM_ORG_URL.to_string()),
            random_timeout,
        })
    }
}
