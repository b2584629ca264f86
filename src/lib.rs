//! # tubefeed
//!
//! Client-side models for YouTube's internal browse API, centered on its
//! continuation-based pagination protocol.
//!
//! A [`Channel`] owns two independent paginated collections (videos and
//! playlists). Each collection tracks an opaque server-issued continuation
//! cursor and grows append-only as pages are loaded; callers can load one
//! page, a bounded number of pages, or everything remaining.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tubefeed::{BrowseClient, Channel, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Arc::new(BrowseClient::new());
//!     let channel = Channel::new(client, "UC_x5XG1OV2P6uZZ5FSM9Ttw");
//!
//!     // One page at a time...
//!     let first_page = channel.next_videos(1).await?;
//!     println!("loaded {} videos", first_page.len());
//!
//!     // ...or everything remaining
//!     let rest = channel.next_videos(0).await?;
//!     println!("{} total", channel.videos().await.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Channel (model)                      │
//! │  next_videos(n)   next_playlists(n)   snapshots/cursors │
//! └───────────────────────────┬─────────────────────────────┘
//!                             │
//! ┌───────────────────────────┴─────────────────────────────┐
//! │                  Feed driver (pagination)               │
//! │  cursor state machine · page loop · batch accumulation  │
//! └──────────┬──────────────────────────────────┬───────────┘
//!            │                                  │
//! ┌──────────┴───────────┐          ┌───────────┴───────────┐
//! │   browse (wire)      │          │   http (transport)    │
//! │  request payloads    │          │  Transport trait      │
//! │  shape extraction    │          │  BrowseClient/reqwest │
//! └──────────────────────┘          └───────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP transport seam and production client
pub mod http;

/// Browse API wire contract: payloads and shape extraction
pub mod browse;

/// Continuation-based pagination engine
pub mod pagination;

/// Channel model and typed child entities
pub mod model;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use http::{BrowseClient, BrowseClientConfig, Transport};
pub use model::{Channel, Playlist, Thumbnail, Video};
pub use pagination::{Cursor, Feed};
pub use types::TabKind;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
