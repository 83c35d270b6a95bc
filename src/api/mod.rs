//! HTTP surfaces of the three tiers
//!
//! - `storage`: exchange protocol server over the record store
//! - `writer`: fetch-then-store trigger
//! - `reader`: listings, lookup, statistics and search
//!
//! Every router also answers `GET /health`, converts handler panics into a
//! generic 500 and reports errors as `{"message": "..."}`.

pub mod error;
pub mod http;
pub mod reader;
pub mod storage;
pub mod writer;

pub use error::ApiError;
pub use http::service_router;
