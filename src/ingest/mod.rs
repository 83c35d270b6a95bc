//! Ingestion Orchestrator - fetch N numbers, then store them as one batch
//!
//! Draws are strictly sequential with a pause between consecutive calls, as
//! a courtesy to the external generator. A failed draw is logged and
//! skipped; only a run where every draw failed, or where the batch could not
//! be stored, fails as a whole. Those two outcomes are reported as distinct
//! [`IngestError`] variants.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::error::{IngestError, SourceError};
use crate::gateway::StorageGateway;
use crate::source::NumberSource;
use crate::types::{DrawResponse, Record};

/// Parameters of a fetch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FetchRequest {
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default = "default_min")]
    pub min: i32,
    #[serde(default = "default_max")]
    pub max: i32,
}

fn default_count() -> u32 {
    5
}

fn default_min() -> i32 {
    1
}

fn default_max() -> i32 {
    1000
}

impl Default for FetchRequest {
    fn default() -> Self {
        Self {
            count: default_count(),
            min: default_min(),
            max: default_max(),
        }
    }
}

impl FetchRequest {
    pub fn new(count: u32, min: i32, max: i32) -> Self {
        Self { count, min, max }
    }

    fn validate(&self) -> Result<(), IngestError> {
        if self.count == 0 {
            return Err(IngestError::InvalidRequest {
                reason: "count must be at least 1".to_string(),
            });
        }
        if self.min > self.max {
            return Err(IngestError::InvalidRequest {
                reason: format!("min ({}) must not exceed max ({})", self.min, self.max),
            });
        }
        Ok(())
    }
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct IngestReport {
    pub requested: u32,
    /// Records produced and accepted by the storage tier
    pub numbers: Vec<Record>,
}

impl IngestReport {
    pub fn fetched(&self) -> usize {
        self.numbers.len()
    }
}

/// Drives the fetch loop and hands the batch to storage
pub struct IngestionOrchestrator {
    source: Arc<dyn NumberSource>,
    storage: Arc<dyn StorageGateway>,
    delay: Duration,
}

impl IngestionOrchestrator {
    pub fn new(
        source: Arc<dyn NumberSource>,
        storage: Arc<dyn StorageGateway>,
        delay: Duration,
    ) -> Self {
        Self {
            source,
            storage,
            delay,
        }
    }

    /// Pause applied between consecutive draws
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Fetch `request.count` numbers and store every one that was produced
    pub async fn fetch_and_store(&self, request: FetchRequest) -> Result<IngestReport, IngestError> {
        request.validate()?;
        info!(count = request.count, min = request.min, max = request.max, "fetching random numbers");

        let numbers = self.draw_all(&request).await;
        if numbers.is_empty() {
            warn!(requested = request.count, "no numbers fetched from external source");
            return Err(IngestError::NothingFetched {
                requested: request.count,
            });
        }

        if !self.storage.store_numbers(&numbers).await {
            error!(fetched = numbers.len(), "storage rejected fetched numbers");
            return Err(IngestError::StorageUnavailable {
                fetched: numbers.len(),
            });
        }

        info!(
            requested = request.count,
            fetched = numbers.len(),
            "fetched and stored random numbers"
        );
        Ok(IngestReport {
            requested: request.count,
            numbers,
        })
    }

    /// Run the sequential draw loop, returning one record per successful draw
    pub async fn draw_all(&self, request: &FetchRequest) -> Vec<Record> {
        let total = request.count;
        let mut numbers = Vec::new();

        for i in 0..total {
            let draw = i + 1;
            debug!(draw, total, "fetching random number");

            match self.source.draw(request.min, request.max).await {
                Ok(response) => numbers.push(to_record(&response)),
                Err(e) => log_draw_failure(&e, draw, total),
            }

            if draw < total && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        numbers
    }
}

fn to_record(response: &DrawResponse) -> Record {
    Record::new(response.random, response.min, response.max)
}

fn log_draw_failure(e: &SourceError, draw: u32, total: u32) {
    if e.is_timeout() {
        error!(draw, total, error = %e, "request timeout fetching random number");
    } else {
        error!(draw, total, error = %e, "failed to fetch random number");
    }
}
