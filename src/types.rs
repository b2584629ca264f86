//! Common types used throughout tubefeed
//!
//! Shared type definitions and type aliases used across multiple modules.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Tab Kind
// ============================================================================

/// Discriminator between a channel's two paginated collections.
///
/// Each kind maps to a fixed tab ordinal in the initial browse response and
/// to an opaque `params` blob selecting that tab on the wire. Both are
/// protocol constants supplied by the platform, never derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabKind {
    /// The channel's uploaded videos tab
    Videos,
    /// The channel's playlists tab
    Playlists,
}

impl TabKind {
    /// Opaque per-kind filter blob sent as `params` on browse requests.
    /// Wire contract: must be passed through byte-for-byte.
    pub const fn params(self) -> &'static str {
        match self {
            TabKind::Videos => "EgZ2aWRlb3PyBgQKAjoA",
            TabKind::Playlists => "EglwbGF5bGlzdHPyBgQKAkIA",
        }
    }

    /// Ordinal of this kind's tab in the initial-page tab list.
    /// Tab 0 is the channel home tab and never carries a grid.
    pub const fn tab_index(self) -> usize {
        match self {
            TabKind::Videos => 1,
            TabKind::Playlists => 2,
        }
    }

    /// Human-readable kind name, used in log output
    pub const fn as_str(self) -> &'static str {
        match self {
            TabKind::Videos => "videos",
            TabKind::Playlists => "playlists",
        }
    }
}

impl std::fmt::Display for TabKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_kind_constants() {
        assert_eq!(TabKind::Videos.params(), "EgZ2aWRlb3PyBgQKAjoA");
        assert_eq!(TabKind::Playlists.params(), "EglwbGF5bGlzdHPyBgQKAkIA");
        assert_eq!(TabKind::Videos.tab_index(), 1);
        assert_eq!(TabKind::Playlists.tab_index(), 2);
    }

    #[test]
    fn test_tab_kind_display() {
        assert_eq!(TabKind::Videos.to_string(), "videos");
        assert_eq!(TabKind::Playlists.to_string(), "playlists");
    }
}
