//! Reader tier - read-only queries over the storage tier

use std::sync::Arc;

use anyhow::Result;

use data_exchange::api::reader::{create_router, ReaderState};
use data_exchange::config::ReaderApiConfig;
use data_exchange::gateway::HttpStorageClient;
use data_exchange::server::{init_tracing, serve};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let config = ReaderApiConfig::from_env()?;

    let storage = Arc::new(HttpStorageClient::new(&config.storage)?);
    let app = create_router(Arc::new(ReaderState::new(storage)));

    serve("reader-api", config.bind_addr, app).await?;
    Ok(())
}
