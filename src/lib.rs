//! Data Exchange
//!
//! Three cooperating HTTP services that exchange random numbers:
//!
//! - **storage** holds the authoritative record set in memory
//! - **writer** draws numbers from an external generator, rate limited, and
//!   submits them to storage in one batch
//! - **reader** lists, looks up, summarizes and searches the stored records
//!
//! The writer and reader only ever reach the store through the exchange
//! protocol (`gateway`), never directly.
//!
//! # Modules
//!
//! - `types`: Record, generator response and endpoint bodies
//! - `storage`: concurrent in-memory record store
//! - `gateway`: client half of the exchange protocol
//! - `source`: external number source
//! - `ingest`: sequential fetch loop and batch submission
//! - `query`: statistics and range search
//! - `api`: axum routers for the three tiers
//! - `config`: environment-driven settings
//! - `server`: logging setup and server lifecycle
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use data_exchange::api::storage::{create_router, StorageState};
//! use data_exchange::storage::InMemoryRecordStore;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let store = Arc::new(InMemoryRecordStore::new());
//!     let app = create_router(Arc::new(StorageState::new(store)));
//!     data_exchange::server::serve("storage-api", "127.0.0.1:7000".parse().unwrap(), app).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod ingest;
pub mod query;
pub mod server;
pub mod source;
pub mod storage;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ConfigError, GatewayError, IngestError, SourceError};
pub use gateway::{HttpStorageClient, StorageGateway};
pub use ingest::{FetchRequest, IngestReport, IngestionOrchestrator};
pub use query::QueryService;
pub use source::{CsrngSource, NumberSource};
pub use storage::{InMemoryRecordStore, RecordStore};
pub use types::Record;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
