//! Typed child entities
//!
//! Videos and playlists as they appear in a channel's grid tabs, plus the
//! thumbnail model. Construction is lenient by contract: a missing field
//! becomes `None` or empty, never an error, because the driver converts
//! every raw record without validation.

use crate::http::Transport;
use crate::pagination::FromRawItem;
use crate::types::JsonValue;
use std::sync::Arc;

// ============================================================================
// Thumbnail
// ============================================================================

/// One thumbnail variant of an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    /// Image URL
    pub url: String,
    /// Width in pixels, when reported
    pub width: Option<u32>,
    /// Height in pixels, when reported
    pub height: Option<u32>,
}

impl Thumbnail {
    fn from_raw(raw: &JsonValue) -> Option<Self> {
        Some(Self {
            url: raw.get("url")?.as_str()?.to_string(),
            width: raw.get("width").and_then(JsonValue::as_u64).map(|w| w as u32),
            height: raw.get("height").and_then(JsonValue::as_u64).map(|h| h as u32),
        })
    }
}

// ============================================================================
// Video
// ============================================================================

/// A video from a channel's videos tab
#[derive(Clone)]
pub struct Video {
    transport: Arc<dyn Transport>,
    /// Video identifier
    pub video_id: String,
    /// Video title
    pub title: Option<String>,
    /// Relative publish time as displayed ("3 weeks ago")
    pub published_text: Option<String>,
    /// View count as displayed ("1.2M views")
    pub view_count_text: Option<String>,
    /// Duration as displayed ("12:34")
    pub length_text: Option<String>,
    /// Thumbnail variants, smallest first as served
    pub thumbnails: Vec<Thumbnail>,
}

impl Video {
    /// Shared session context this entity was loaded through
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }
}

impl FromRawItem for Video {
    fn from_raw(context: &Arc<dyn Transport>, raw: &JsonValue) -> Self {
        let r = raw.get("gridVideoRenderer").unwrap_or(raw);
        Self {
            transport: Arc::clone(context),
            video_id: r
                .get("videoId")
                .and_then(JsonValue::as_str)
                .unwrap_or_default()
                .to_string(),
            title: text(r.get("title")),
            published_text: text(r.get("publishedTimeText")),
            view_count_text: text(r.get("viewCountText")),
            length_text: length_text(r),
            thumbnails: thumbnails(r.get("thumbnail")),
        }
    }
}

impl std::fmt::Debug for Video {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Video")
            .field("video_id", &self.video_id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Playlist
// ============================================================================

/// A playlist from a channel's playlists tab
#[derive(Clone)]
pub struct Playlist {
    transport: Arc<dyn Transport>,
    /// Playlist identifier
    pub playlist_id: String,
    /// Playlist title
    pub title: Option<String>,
    /// Video count as displayed ("42 videos")
    pub video_count_text: Option<String>,
    /// Thumbnail variants, smallest first as served
    pub thumbnails: Vec<Thumbnail>,
}

impl Playlist {
    /// Shared session context this entity was loaded through
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }
}

impl FromRawItem for Playlist {
    fn from_raw(context: &Arc<dyn Transport>, raw: &JsonValue) -> Self {
        let r = raw.get("gridPlaylistRenderer").unwrap_or(raw);
        Self {
            transport: Arc::clone(context),
            playlist_id: r
                .get("playlistId")
                .and_then(JsonValue::as_str)
                .unwrap_or_default()
                .to_string(),
            title: text(r.get("title")),
            video_count_text: text(r.get("videoCountText"))
                .or_else(|| text(r.get("videoCountShortText"))),
            thumbnails: thumbnails(r.get("thumbnail")),
        }
    }
}

impl std::fmt::Debug for Playlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Playlist")
            .field("playlist_id", &self.playlist_id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Field helpers
// ============================================================================

/// Renderer text: either `{"simpleText": ...}` or `{"runs": [{"text": ...}]}`
fn text(value: Option<&JsonValue>) -> Option<String> {
    let value = value?;
    if let Some(s) = value.get("simpleText").and_then(JsonValue::as_str) {
        return Some(s.to_string());
    }
    let joined: String = value
        .get("runs")?
        .as_array()?
        .iter()
        .filter_map(|run| run.get("text").and_then(JsonValue::as_str))
        .collect();
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Video duration lives in the time-status thumbnail overlay
fn length_text(renderer: &JsonValue) -> Option<String> {
    renderer
        .get("thumbnailOverlays")?
        .as_array()?
        .iter()
        .find_map(|overlay| {
            text(overlay.get("thumbnailOverlayTimeStatusRenderer")?.get("text"))
        })
}

fn thumbnails(value: Option<&JsonValue>) -> Vec<Thumbnail> {
    value
        .and_then(|v| v.get("thumbnails"))
        .and_then(JsonValue::as_array)
        .map(|arr| arr.iter().filter_map(Thumbnail::from_raw).collect())
        .unwrap_or_default()
}
