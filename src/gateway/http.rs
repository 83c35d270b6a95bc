//! `reqwest` implementation of [`StorageGateway`]

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::StorageClientConfig;
use crate::error::GatewayError;
use crate::types::{NumbersResponse, Record, StorageStats};

use super::StorageGateway;

const NUMBERS_PATH: &str = "/api/storage/numbers";
const STATS_PATH: &str = "/api/storage/stats";

/// Talks to the storage tier over HTTP/JSON
#[derive(Debug, Clone)]
pub struct HttpStorageClient {
    base_url: String,
    client: Client,
}

impl HttpStorageClient {
    /// Build a client with the configured base URL and request timeout
    pub fn new(config: &StorageClientConfig) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(config.base_url.clone(), client))
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn try_store(&self, numbers: &[Record]) -> Result<(), GatewayError> {
        let response = self
            .client
            .post(self.url(NUMBERS_PATH))
            .json(numbers)
            .send()
            .await?;
        ensure_success(response.status())
    }

    async fn try_get_all(&self) -> Result<Vec<Record>, GatewayError> {
        let listing: NumbersResponse = self.get_json(&self.url(NUMBERS_PATH)).await?;
        Ok(listing.numbers)
    }

    async fn try_get_by_id(&self, id: Uuid) -> Result<Option<Record>, GatewayError> {
        let url = format!("{}/{}", self.url(NUMBERS_PATH), id);
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        ensure_success(response.status())?;
        Ok(Some(response.json().await?))
    }

    async fn try_get_count(&self) -> Result<usize, GatewayError> {
        let stats: StorageStats = self.get_json(&self.url(STATS_PATH)).await?;
        Ok(stats.total_numbers)
    }

    async fn try_clear(&self) -> Result<(), GatewayError> {
        let response = self.client.delete(self.url(NUMBERS_PATH)).send().await?;
        ensure_success(response.status())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GatewayError> {
        let response = self.client.get(url).send().await?;
        ensure_success(response.status())?;
        Ok(response.json().await?)
    }
}

fn ensure_success(status: StatusCode) -> Result<(), GatewayError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(GatewayError::Status {
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl StorageGateway for HttpStorageClient {
    async fn store_numbers(&self, numbers: &[Record]) -> bool {
        match self.try_store(numbers).await {
            Ok(()) => {
                info!(count = numbers.len(), "stored numbers in Storage API");
                true
            }
            Err(e) => {
                error!(error = %e, count = numbers.len(), "failed to store numbers in Storage API");
                false
            }
        }
    }

    async fn get_all_numbers(&self) -> Vec<Record> {
        match self.try_get_all().await {
            Ok(numbers) => {
                info!(count = numbers.len(), "retrieved numbers from Storage API");
                numbers
            }
            Err(e) => {
                error!(error = %e, "failed to retrieve numbers from Storage API");
                Vec::new()
            }
        }
    }

    async fn get_number_by_id(&self, id: Uuid) -> Option<Record> {
        match self.try_get_by_id(id).await {
            Ok(Some(number)) => Some(number),
            Ok(None) => {
                warn!(%id, "number not found in Storage API");
                None
            }
            Err(e) => {
                error!(error = %e, %id, "failed to retrieve number from Storage API");
                None
            }
        }
    }

    async fn get_count(&self) -> usize {
        match self.try_get_count().await {
            Ok(count) => count,
            Err(e) => {
                error!(error = %e, "failed to retrieve stats from Storage API");
                0
            }
        }
    }

    async fn clear_all(&self) -> bool {
        match self.try_clear().await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "failed to clear Storage API");
                false
            }
        }
    }
}
