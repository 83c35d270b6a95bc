//! Writer tier - draws numbers from CSRNG and submits them to the storage tier

use std::sync::Arc;

use anyhow::Result;

use data_exchange::api::writer::{create_router, WriterState};
use data_exchange::config::WriterApiConfig;
use data_exchange::gateway::HttpStorageClient;
use data_exchange::ingest::IngestionOrchestrator;
use data_exchange::server::{init_tracing, serve};
use data_exchange::source::CsrngSource;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let config = WriterApiConfig::from_env()?;

    let source = Arc::new(CsrngSource::new(&config.source)?);
    let storage = Arc::new(HttpStorageClient::new(&config.storage)?);
    let orchestrator = IngestionOrchestrator::new(source, storage, config.source.delay);
    let app = create_router(Arc::new(WriterState::new(orchestrator)));

    serve("writer-api", config.bind_addr, app).await?;
    Ok(())
}
