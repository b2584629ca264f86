//! Channel parent entity
//!
//! A channel owns two independent paginated collections: its videos and its
//! playlists. Each is a [`Feed`] with its own cursor; loading pages of one
//! never touches the other.

use super::items::{Playlist, Video};
use crate::error::Result;
use crate::http::Transport;
use crate::pagination::{Cursor, Feed};
use crate::types::TabKind;
use std::sync::Arc;

/// A channel and its paginated video and playlist collections.
///
/// Both cursors start uninitialized; the collections grow append-only as
/// pages are loaded and are never reset within the entity's lifetime. The
/// feed drivers are the only writers; all read accessors return snapshots.
pub struct Channel {
    transport: Arc<dyn Transport>,
    channel_id: String,
    videos: Feed<Video>,
    playlists: Feed<Playlist>,
}

impl Channel {
    /// Create a channel handle with both feeds not yet loaded
    pub fn new(transport: Arc<dyn Transport>, channel_id: impl Into<String>) -> Self {
        Self {
            transport,
            channel_id: channel_id.into(),
            videos: Feed::new(TabKind::Videos),
            playlists: Feed::new(TabKind::Playlists),
        }
    }

    /// The channel's browse identifier
    pub fn id(&self) -> &str {
        &self.channel_id
    }

    /// Shared session context for this channel and its child entities
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    // ========================================================================
    // Videos
    // ========================================================================

    /// Load up to `pages` further pages of videos, returning only the new
    /// batch. `pages = 0` loads everything remaining.
    pub async fn next_videos(&self, pages: usize) -> Result<Vec<Video>> {
        self.videos
            .load_next(&self.transport, &self.channel_id, pages)
            .await
    }

    /// Load all remaining videos
    pub async fn all_videos(&self) -> Result<Vec<Video>> {
        self.next_videos(0).await
    }

    /// Snapshot of all videos loaded so far, in fetch order
    pub async fn videos(&self) -> Vec<Video> {
        self.videos.items().await
    }

    /// Current cursor state of the videos feed
    pub async fn video_cursor(&self) -> Cursor {
        self.videos.cursor().await
    }

    /// The videos feed itself
    pub fn video_feed(&self) -> &Feed<Video> {
        &self.videos
    }

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Load up to `pages` further pages of playlists, returning only the new
    /// batch. `pages = 0` loads everything remaining.
    pub async fn next_playlists(&self, pages: usize) -> Result<Vec<Playlist>> {
        self.playlists
            .load_next(&self.transport, &self.channel_id, pages)
            .await
    }

    /// Load all remaining playlists
    pub async fn all_playlists(&self) -> Result<Vec<Playlist>> {
        self.next_playlists(0).await
    }

    /// Snapshot of all playlists loaded so far, in fetch order
    pub async fn playlists(&self) -> Vec<Playlist> {
        self.playlists.items().await
    }

    /// Current cursor state of the playlists feed
    pub async fn playlist_cursor(&self) -> Cursor {
        self.playlists.cursor().await
    }

    /// The playlists feed itself
    pub fn playlist_feed(&self) -> &Feed<Playlist> {
        &self.playlists
    }
}

impl std::fmt::Debug for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("channel_id", &self.channel_id)
            .finish_non_exhaustive()
    }
}
