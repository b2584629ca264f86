//! Cursor tracking
//!
//! Derives the next continuation cursor from a page's raw item list and
//! models the cursor lifecycle.

use crate::types::JsonValue;

/// Record type that carries a continuation command instead of content
const MARKER_KEY: &str = "continuationItemRenderer";

/// Lifecycle of a feed's continuation cursor.
///
/// `Unset` and `Token` both mean "continue fetching"; the difference is only
/// whether the next request carries a `continuation` field. `Exhausted` is
/// terminal and irreversible for the lifetime of the parent entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    /// No page fetched yet; the first request produces the initial token
    Unset,
    /// Opaque server-issued token for the next page
    Token(String),
    /// The server reported no further pages
    Exhausted,
}

impl Cursor {
    /// Check if this cursor is in the terminal state
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Cursor::Exhausted)
    }

    /// The token to send on the next request, if any
    pub fn token(&self) -> Option<&str> {
        match self {
            Cursor::Token(token) => Some(token),
            Cursor::Unset | Cursor::Exhausted => None,
        }
    }
}

/// Derive the next cursor from a page's raw item list.
///
/// The continuation marker is a reserved record type the server appends to
/// the item list itself, commonly as the last element, so this function is
/// pure over the extracted list and never looks at the full response. A list
/// with zero content items is still checked: a content-free page with a
/// valid marker continues the feed.
///
/// No extractable token means exhausted.
pub fn next_cursor(items: &[JsonValue]) -> Cursor {
    items
        .iter()
        .rev()
        .find_map(marker_token)
        .map_or(Cursor::Exhausted, Cursor::Token)
}

/// Check whether a raw record is a continuation marker rather than content
pub fn is_continuation_marker(item: &JsonValue) -> bool {
    item.get(MARKER_KEY).is_some()
}

/// Token embedded in a continuation marker record, if this is one
fn marker_token(item: &JsonValue) -> Option<String> {
    item.get(MARKER_KEY)?
        .get("continuationEndpoint")?
        .get("continuationCommand")?
        .get("token")?
        .as_str()
        .map(str::to_owned)
}
