//! Storage tier - holds the authoritative record set in memory

use std::sync::Arc;

use anyhow::Result;

use data_exchange::api::storage::{create_router, StorageState};
use data_exchange::config::StorageApiConfig;
use data_exchange::server::{init_tracing, serve};
use data_exchange::storage::InMemoryRecordStore;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let config = StorageApiConfig::from_env()?;

    // Lives until the process exits; nothing is persisted
    let store = Arc::new(InMemoryRecordStore::new());
    let app = create_router(Arc::new(StorageState::new(store)));

    serve("storage-api", config.bind_addr, app).await?;
    Ok(())
}
