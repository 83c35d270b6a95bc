//! Data types shared by the storage, writer and reader tiers
//!
//! This module contains the record value object, the external generator's
//! response shape and the response bodies of every endpoint.

mod draw;
mod record;
mod responses;

pub use draw::DrawResponse;
pub use record::{sort_newest_first, Record};
pub use responses::{
    EmptyStats, FetchResponse, MessageResponse, NumberStats, NumbersResponse, SearchCriteria,
    SearchResponse, StatsSummary, StorageStats, StoreNumbersResponse,
};
