//! Storage Engine - authoritative in-memory record set
//!
//! The store is an explicitly constructed object: the storage tier creates
//! one at startup and shares it behind an `Arc` with every request handler.
//! Its contents live exactly as long as that object.

mod memory;

use uuid::Uuid;

use crate::types::Record;

pub use memory::InMemoryRecordStore;

/// Keyed store of records.
///
/// Records are immutable once accepted. Inserting an id that is already
/// present is silently ignored: the first write wins and no error is
/// reported to the caller.
pub trait RecordStore: Send + Sync {
    /// Insert a record unless its id is already present
    fn insert(&self, record: Record);

    /// Insert each record independently; duplicates are absorbed
    fn insert_many(&self, records: Vec<Record>);

    /// Copy of the stored record, if any
    fn get(&self, id: &Uuid) -> Option<Record>;

    /// Snapshot of every stored record, in no particular order
    fn get_all(&self) -> Vec<Record>;

    /// Number of stored records
    fn count(&self) -> usize;

    /// Remove every record
    fn clear_all(&self);
}
