//! Storage gateway - client half of the exchange protocol
//!
//! The writer and reader tiers never touch the store directly; they go
//! through this gateway, even when all tiers share a process.
//!
//! Transport problems never escape the gateway. A failed read comes back
//! empty (`Vec::new()`, `None`, `0`) and a failed write comes back `false`,
//! with the cause logged. Callers therefore cannot tell "storage is empty"
//! from "storage is unreachable", which is the intended trade of
//! observability for availability.

mod http;

use async_trait::async_trait;
use uuid::Uuid;

use crate::types::Record;

pub use http::HttpStorageClient;

/// Operations the storage tier offers to its clients
#[async_trait]
pub trait StorageGateway: Send + Sync {
    /// Submit a batch; `true` once the storage tier accepted it
    async fn store_numbers(&self, numbers: &[Record]) -> bool;

    /// Every stored record, or an empty list if storage could not be read
    async fn get_all_numbers(&self) -> Vec<Record>;

    /// A single record; `None` when missing or when storage could not be read
    async fn get_number_by_id(&self, id: Uuid) -> Option<Record>;

    /// Live record count, `0` if storage could not be read
    async fn get_count(&self) -> usize;

    /// Empty the store; `true` on success
    async fn clear_all(&self) -> bool;
}
