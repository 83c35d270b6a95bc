//! HTTP client for the CSRNG random number service

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::SourceConfig;
use crate::error::SourceError;
use crate::types::DrawResponse;

use super::NumberSource;

/// Draws numbers from `GET <base_url>?min=..&max=..`
#[derive(Debug, Clone)]
pub struct CsrngSource {
    base_url: String,
    client: Client,
}

impl CsrngSource {
    /// Build a source with its own HTTP client using the configured timeout
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(config.base_url.clone(), client))
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl NumberSource for CsrngSource {
    async fn draw(&self, min: i32, max: i32) -> Result<DrawResponse, SourceError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("min", min), ("max", max)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let draws: Vec<DrawResponse> = response.json().await?;
        let draw = draws.into_iter().next().ok_or(SourceError::Empty)?;
        if !draw.is_success() {
            return Err(SourceError::Rejected {
                status: draw.status,
            });
        }

        debug!(value = draw.random, "drew number from CSRNG");
        Ok(draw)
    }
}
