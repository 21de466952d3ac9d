//! Postal lookup HTTP client.
//!
//! Blocking reqwest client (no Tokio runtime required). Fetches the
//! partition file for a code's 3-digit prefix, caches it forever, and
//! answers lookups out of the cached map.

use std::time::Duration;

use yubin_core::{partition_file_name, Partition, PostalEntry, PREFIX_LEN};

use crate::cache::PrefixCache;

/// Length of a full postal code.
const ZIP_LEN: usize = 7;

/// Error type for lookup operations. HTTP error statuses are not
/// errors here — any non-2xx reads as "not found", matching what the
/// published dataset host returns for unknown prefixes.
#[derive(Debug)]
pub enum ClientError {
    /// Network error
    Network(String),
    /// JSON parsing error
    Parse(String),
}

/// Internal loader outcome: a non-2xx response is "no partition", kept
/// out of the cache so the next lookup for the prefix refetches.
enum LoadError {
    NotFound,
    Client(ClientError),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ClientError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

/// Postal lookup client (blocking).
pub struct PostalClient {
    http: reqwest::blocking::Client,
    base_url: String,
    cache: PrefixCache<Partition>,
}

impl PostalClient {
    /// Create a client serving lookups from partition files under
    /// `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("yubin/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(PostalClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache: PrefixCache::new(),
        })
    }

    /// Look up a 7-digit postal code.
    ///
    /// Returns `Ok(None)` when the code is malformed, its partition
    /// request gets a non-2xx response, or the partition has no such
    /// code. Only transport and decode failures are errors. A non-2xx
    /// miss is not cached, so a later lookup refetches the prefix.
    pub fn lookup(&self, zip: &str) -> Result<Option<PostalEntry>, ClientError> {
        if zip.len() != ZIP_LEN || !zip.chars().all(|c| c.is_ascii_digit()) {
            return Ok(None);
        }
        let prefix = &zip[..PREFIX_LEN];
        let partition = match self
            .cache
            .get_or_load(prefix, || self.fetch_partition(prefix))
        {
            Ok(partition) => partition,
            Err(LoadError::NotFound) => return Ok(None),
            Err(LoadError::Client(err)) => return Err(err),
        };
        Ok(partition.get(zip).cloned())
    }

    /// Number of partitions held in the cache.
    pub fn cached_partitions(&self) -> usize {
        self.cache.len()
    }

    fn fetch_partition(&self, prefix: &str) -> Result<Partition, LoadError> {
        let url = format!("{}/{}", self.base_url, partition_file_name(prefix));
        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| LoadError::Client(ClientError::Network(e.to_string())))?;

        if !response.status().is_success() {
            return Err(LoadError::NotFound);
        }

        response
            .json::<Partition>()
            .map_err(|e| LoadError::Client(ClientError::Parse(e.to_string())))
    }
}
