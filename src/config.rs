//! Environment-driven configuration for the three tiers
//!
//! ## Usage
//! ```bash
//! STORAGE_API_ADDR=0.0.0.0:7000 storage-api
//! STORAGE_API_BASE_URL=http://localhost:7000 CSRNG_DELAY_MS=1000 writer-api
//! STORAGE_API_BASE_URL=http://localhost:7000 reader-api
//! ```
//!
//! Every setting has a default. A variable that is set but cannot be parsed
//! is reported as a [`ConfigError`] instead of being silently ignored.

use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

pub const STORAGE_API_ADDR: &str = "STORAGE_API_ADDR";
pub const WRITER_API_ADDR: &str = "WRITER_API_ADDR";
pub const READER_API_ADDR: &str = "READER_API_ADDR";
pub const STORAGE_API_BASE_URL: &str = "STORAGE_API_BASE_URL";
pub const STORAGE_API_TIMEOUT_SECS: &str = "STORAGE_API_TIMEOUT_SECS";
pub const CSRNG_BASE_URL: &str = "CSRNG_BASE_URL";
pub const CSRNG_DELAY_MS: &str = "CSRNG_DELAY_MS";
pub const CSRNG_TIMEOUT_SECS: &str = "CSRNG_TIMEOUT_SECS";

const DEFAULT_STORAGE_ADDR: &str = "0.0.0.0:7000";
const DEFAULT_WRITER_ADDR: &str = "0.0.0.0:7001";
const DEFAULT_READER_ADDR: &str = "0.0.0.0:7002";
const DEFAULT_STORAGE_BASE_URL: &str = "http://localhost:7000";
const DEFAULT_CSRNG_BASE_URL: &str = "https://csrng.net/csrng/csrng.php";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DELAY_MS: u64 = 1000;

/// How the writer and reader reach the storage tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for StorageClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STORAGE_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl StorageClientConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            base_url: lookup(STORAGE_API_BASE_URL)
                .unwrap_or_else(|| DEFAULT_STORAGE_BASE_URL.to_string()),
            timeout: Duration::from_secs(parse_var(
                lookup,
                STORAGE_API_TIMEOUT_SECS,
                DEFAULT_TIMEOUT_SECS,
            )?),
        })
    }
}

/// External number source settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub base_url: String,
    /// Pause between consecutive draws
    pub delay: Duration,
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CSRNG_BASE_URL.to_string(),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SourceConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            base_url: lookup(CSRNG_BASE_URL).unwrap_or_else(|| DEFAULT_CSRNG_BASE_URL.to_string()),
            delay: Duration::from_millis(parse_var(lookup, CSRNG_DELAY_MS, DEFAULT_DELAY_MS)?),
            timeout: Duration::from_secs(parse_var(
                lookup,
                CSRNG_TIMEOUT_SECS,
                DEFAULT_TIMEOUT_SECS,
            )?),
        })
    }
}

/// Storage tier settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageApiConfig {
    pub bind_addr: SocketAddr,
}

impl StorageApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            bind_addr: parse_addr(lookup, STORAGE_API_ADDR, DEFAULT_STORAGE_ADDR)?,
        })
    }
}

/// Writer tier settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterApiConfig {
    pub bind_addr: SocketAddr,
    pub storage: StorageClientConfig,
    pub source: SourceConfig,
}

impl WriterApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            bind_addr: parse_addr(lookup, WRITER_API_ADDR, DEFAULT_WRITER_ADDR)?,
            storage: StorageClientConfig::from_lookup(lookup)?,
            source: SourceConfig::from_lookup(lookup)?,
        })
    }
}

/// Reader tier settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderApiConfig {
    pub bind_addr: SocketAddr,
    pub storage: StorageClientConfig,
}

impl ReaderApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            bind_addr: parse_addr(lookup, READER_API_ADDR, DEFAULT_READER_ADDR)?,
            storage: StorageClientConfig::from_lookup(lookup)?,
        })
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError {
            key: key.to_string(),
            value: raw,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn parse_addr<F>(lookup: &F, key: &str, default: &str) -> Result<SocketAddr, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    raw.trim().parse().map_err(|e: std::net::AddrParseError| ConfigError {
        key: key.to_string(),
        value: raw.clone(),
        reason: e.to_string(),
    })
}
