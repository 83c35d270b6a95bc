//! Record type exchanged between the tiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated number together with the bounds it was drawn from.
///
/// Identity and creation time are assigned by the producer when the record is
/// constructed, never by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub value: i32,
    pub min: i32,
    pub max: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Create a record with a fresh id, stamped with the current time
    pub fn new(value: i32, min: i32, max: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
            min,
            max,
            created_at: Utc::now(),
        }
    }

    /// Create a record with explicit identity and timestamp
    pub fn with_id(id: Uuid, value: i32, min: i32, max: i32, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            value,
            min,
            max,
            created_at,
        }
    }
}

/// Sort records newest first (descending `createdAt`)
pub fn sort_newest_first(records: &mut [Record]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
