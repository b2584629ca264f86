//! HTTP transport module
//!
//! Provides the [`Transport`] seam the pagination engine talks through, and
//! the production [`BrowseClient`] implementation built on reqwest.
//!
//! The engine never touches reqwest directly: everything above this module
//! depends on the trait, which keeps the pagination state machine testable
//! against deterministic in-memory transports.

mod client;

pub use client::{BrowseClient, BrowseClientConfig, BrowseClientConfigBuilder};

use crate::error::Result;
use crate::types::JsonValue;
use async_trait::async_trait;

/// Transport seam for the browse API.
///
/// Fail-fast contract: implementations return an error on network failure or
/// non-2xx status. No retry behavior is assumed by callers.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST a JSON payload to an API path and return the parsed response body.
    async fn post(&self, path: &str, body: JsonValue) -> Result<JsonValue>;
}

#[cfg(test)]
mod tests;
