//! Response bodies for every endpoint of the three tiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::Record;

/// Body carrying only a human-readable message (errors, clear, not-found)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Acknowledgement of a write; `count` is the number submitted, not the number newly stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreNumbersResponse {
    pub message: String,
    pub count: usize,
}

/// A full listing, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumbersResponse {
    pub total_count: usize,
    #[serde(default)]
    pub numbers: Vec<Record>,
}

impl NumbersResponse {
    pub fn new(numbers: Vec<Record>) -> Self {
        Self {
            total_count: numbers.len(),
            numbers,
        }
    }
}

/// Storage tier statistics: just the live count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStats {
    pub total_numbers: usize,
    #[serde(default)]
    pub message: String,
}

/// Query layer statistics, computed from a full snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberStats {
    Summary(StatsSummary),
    Empty(EmptyStats),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_count: usize,
    pub min_value: i32,
    pub max_value: i32,
    pub average_value: f64,
    pub oldest_entry: DateTime<Utc>,
    pub newest_entry: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyStats {
    pub total_count: usize,
    pub message: String,
}

/// Inclusive value bounds for a search; an absent or empty bound imposes no constraint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(default, deserialize_with = "optional_bound")]
    pub min_value: Option<i32>,
    #[serde(default, deserialize_with = "optional_bound")]
    pub max_value: Option<i32>,
}

/// A bound as it arrives: a JSON number, or text from a query string
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBound {
    Number(i32),
    Text(String),
}

fn optional_bound<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawBound>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawBound::Number(n)) => Ok(Some(n)),
        Some(RawBound::Text(text)) => match text.trim() {
            "" => Ok(None),
            digits => digits.parse().map(Some).map_err(serde::de::Error::custom),
        },
    }
}

impl SearchCriteria {
    /// Check whether a value falls inside the bounds
    pub fn matches(&self, value: i32) -> bool {
        self.min_value.map_or(true, |min| value >= min)
            && self.max_value.map_or(true, |max| value <= max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub count: usize,
    pub search_criteria: SearchCriteria,
    pub numbers: Vec<Record>,
}

/// Outcome of a successful fetch-then-store run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchResponse {
    pub message: String,
    pub requested: u32,
    pub fetched: usize,
    pub numbers: Vec<Record>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_bounds_are_inclusive() {
        let criteria = SearchCriteria {
            min_value: Some(10),
            max_value: Some(20),
        };
        assert!(!criteria.matches(9));
        assert!(criteria.matches(10));
        assert!(criteria.matches(20));
        assert!(!criteria.matches(21));
    }

    #[test]
    fn test_open_criteria_match_everything() {
        let criteria = SearchCriteria::default();
        assert!(criteria.matches(i32::MIN));
        assert!(criteria.matches(i32::MAX));

        let only_min = SearchCriteria {
            min_value: Some(0),
            max_value: None,
        };
        assert!(only_min.matches(i32::MAX));
        assert!(!only_min.matches(-1));
    }

    #[test]
    fn test_criteria_from_json_numbers_and_nulls() {
        let criteria: SearchCriteria =
            serde_json::from_str(r#"{"minValue": 10, "maxValue": null}"#).unwrap();
        assert_eq!(criteria.min_value, Some(10));
        assert_eq!(criteria.max_value, None);

        let empty: SearchCriteria = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SearchCriteria::default());
    }

    #[test]
    fn test_empty_stats_shape() {
        let stats = NumberStats::Empty(EmptyStats {
            total_count: 0,
            message: "No numbers stored yet".to_string(),
        });
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalCount"], 0);
        assert_eq!(json["message"], "No numbers stored yet");
        assert!(json.get("minValue").is_none());
    }

    #[test]
    fn test_listing_uses_camel_case() {
        let json = serde_json::to_value(NumbersResponse::new(Vec::new())).unwrap();
        assert_eq!(json["totalCount"], 0);
        assert!(json["numbers"].as_array().unwrap().is_empty());
    }
}
