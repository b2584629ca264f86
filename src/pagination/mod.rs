//! Continuation-based pagination engine
//!
//! # Overview
//!
//! The engine is a per-kind state machine over an opaque server cursor:
//!
//! ```text
//! READY(cursor) --fetch page--> READY(token)   token marker found
//! READY(cursor) --fetch page--> EXHAUSTED      no marker in item list
//! EXHAUSTED     --load_next---> no-op, empty batch, zero transport calls
//! ```
//!
//! [`Cursor`] and [`next_cursor`] track the token lifecycle, [`fetch_page`]
//! performs one request-and-extract round trip, and [`Feed`] accumulates
//! typed entities across repeated fetches. The engine guarantees no item
//! loss and stable append-only ordering; duplicate suppression is
//! deliberately not provided (the platform is trusted not to re-send items).

mod cursor;
mod feed;

pub use cursor::{is_continuation_marker, next_cursor, Cursor};
pub use feed::{fetch_page, Feed, FromRawItem};
