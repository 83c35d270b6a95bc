//! Error types for the data exchange tiers
//!
//! Each boundary has its own error enum. None of them crosses a tier
//! boundary as raw detail: the HTTP layer maps them to `{message}` bodies.

use thiserror::Error;

/// Failure of a single draw from the external number source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request to number source failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("number source answered with HTTP {status}")]
    Status { status: u16 },

    #[error("number source reported status '{status}'")]
    Rejected { status: String },

    #[error("number source returned no values")]
    Empty,
}

impl SourceError {
    /// Whether the draw failed because the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, SourceError::Transport(e) if e.is_timeout())
    }
}

/// Failure talking to the storage tier, before it is degraded to an empty result
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("storage API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("storage API answered with HTTP {status}")]
    Status { status: u16 },
}

/// Outcome of a fetch-then-store run that did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("invalid fetch request: {reason}")]
    InvalidRequest { reason: String },

    #[error("Failed to fetch random numbers from external API")]
    NothingFetched { requested: u32 },

    #[error("Failed to store numbers in Storage API")]
    StorageUnavailable { fetched: usize },
}

/// Invalid configuration value supplied through the environment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value '{value}' for {key}: {reason}")]
pub struct ConfigError {
    pub key: String,
    pub value: String,
    pub reason: String,
}
