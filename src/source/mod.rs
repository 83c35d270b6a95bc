//! External number source
//!
//! The writer tier draws one value per call from a random number generator
//! reachable over HTTP. The trait is the seam the ingestion loop is written
//! against, so tests can script failures draw by draw.

mod csrng;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::types::DrawResponse;

pub use csrng::CsrngSource;

/// A generator that produces one number in `[min, max]` per call
#[async_trait]
pub trait NumberSource: Send + Sync {
    async fn draw(&self, min: i32, max: i32) -> Result<DrawResponse, SourceError>;
}
