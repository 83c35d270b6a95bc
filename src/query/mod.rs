//! Query Layer - read-only views over the stored records
//!
//! Every view is recomputed from a full snapshot fetched through the
//! storage gateway; nothing is cached or indexed between calls.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::gateway::StorageGateway;
use crate::types::{
    sort_newest_first, EmptyStats, NumberStats, NumbersResponse, Record, SearchCriteria,
    SearchResponse, StatsSummary,
};

pub const EMPTY_STATS_MESSAGE: &str = "No numbers stored yet";

/// Listing, lookup, statistics and range search over the storage tier
pub struct QueryService {
    storage: Arc<dyn StorageGateway>,
}

impl QueryService {
    pub fn new(storage: Arc<dyn StorageGateway>) -> Self {
        Self { storage }
    }

    /// All records, newest first
    pub async fn list(&self) -> NumbersResponse {
        let mut numbers = self.storage.get_all_numbers().await;
        sort_newest_first(&mut numbers);
        info!(count = numbers.len(), "retrieved random numbers");
        NumbersResponse::new(numbers)
    }

    pub async fn get(&self, id: Uuid) -> Option<Record> {
        self.storage.get_number_by_id(id).await
    }

    pub async fn stats(&self) -> NumberStats {
        let numbers = self.storage.get_all_numbers().await;
        let stats = compute_stats(&numbers);
        info!(count = numbers.len(), "computed statistics");
        stats
    }

    pub async fn search(&self, criteria: SearchCriteria) -> SearchResponse {
        let numbers = filter_by_value(self.storage.get_all_numbers().await, &criteria);
        info!(
            count = numbers.len(),
            min = ?criteria.min_value,
            max = ?criteria.max_value,
            "search completed"
        );
        SearchResponse {
            count: numbers.len(),
            search_criteria: criteria,
            numbers,
        }
    }
}

/// Min/max/average of values and the oldest/newest timestamps
pub fn compute_stats(numbers: &[Record]) -> NumberStats {
    let (first, rest) = match numbers.split_first() {
        Some(split) => split,
        None => {
            return NumberStats::Empty(EmptyStats {
                total_count: 0,
                message: EMPTY_STATS_MESSAGE.to_string(),
            })
        }
    };

    let mut summary = StatsSummary {
        total_count: numbers.len(),
        min_value: first.value,
        max_value: first.value,
        average_value: 0.0,
        oldest_entry: first.created_at,
        newest_entry: first.created_at,
    };
    let mut sum = i64::from(first.value);

    for record in rest {
        summary.min_value = summary.min_value.min(record.value);
        summary.max_value = summary.max_value.max(record.value);
        summary.oldest_entry = summary.oldest_entry.min(record.created_at);
        summary.newest_entry = summary.newest_entry.max(record.created_at);
        sum += i64::from(record.value);
    }
    summary.average_value = sum as f64 / numbers.len() as f64;

    NumberStats::Summary(summary)
}

/// Keep records inside the inclusive bounds, newest first
pub fn filter_by_value(numbers: Vec<Record>, criteria: &SearchCriteria) -> Vec<Record> {
    let mut filtered: Vec<Record> = numbers
        .into_iter()
        .filter(|r| criteria.matches(r.value))
        .collect();
    sort_newest_first(&mut filtered);
    filtered
}
