use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::error::{ArenaError, Result};

pub const DEFAULT_RANDOM_ORG_URL: &str =
    "https://www.random.org/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Supplies one draw in `[0, 1)` per fight.
///
/// Failures are final for the fight that asked; implementations do not retry
/// and must not fall back to a local value.
#[async_trait]
pub trait RandomSource: Send + Sync {
    async fn draw(&self) -> Result<f64>;
}

/// Client for the random.org decimal fraction service
pub struct RandomOrgClient {
    client: Client,
    url: String,
}

impl RandomOrgClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ArenaError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Wrap an already configured HTTP client; its timeout is the draw timeout.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RandomSource for RandomOrgClient {
    async fn draw(&self) -> Result<f64> {
        tracing::info!("Requesting random number from random.org");

        let body = async {
            self.client
                .get(&self.url)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await
        }
        .await
        .map_err(|e| {
            if e.is_timeout() {
                tracing::error!("Request to random.org timed out");
                ArenaError::Timeout
            } else {
                tracing::error!("Request to random.org failed: {}", e);
                ArenaError::Unavailable(e.to_string())
            }
        })?;

        let value = parse_fraction(&body)?;
        tracing::info!("Successfully retrieved random number: {}", value);
        Ok(value)
    }
}

/// Parse a plain-text body holding a single fraction in `[0, 1)`.
pub fn parse_fraction(body: &str) -> Result<f64> {
    let text = body.trim();
    match text.parse::<f64>() {
        Ok(value) if (0.0..1.0).contains(&value) => Ok(value),
        _ => {
            tracing::error!("Invalid response from random.org: {}", text);
            Err(ArenaError::MalformedResponse(text.to_string()))
        }
    }
}
