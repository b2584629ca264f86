//! Page fetcher and pagination driver
//!
//! [`fetch_page`] issues one logical page fetch; [`Feed`] owns one kind's
//! collection and cursor and drives repeated fetches per the caller's count
//! policy.

use super::cursor::{is_continuation_marker, next_cursor, Cursor};
use crate::browse;
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::types::{JsonValue, TabKind};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Conversion from one raw server record into a typed child entity.
///
/// Construction only: implementations must not fail for any well-formed
/// record of their kind, and the driver performs no field validation. The
/// shared transport is passed by reference so entities can keep a session
/// back-reference for their own later calls.
pub trait FromRawItem: Sized {
    /// Build a typed entity from a raw record
    fn from_raw(context: &Arc<dyn Transport>, raw: &JsonValue) -> Self;
}

/// Fetch one page of raw items for a kind.
///
/// Issues exactly one browse request carrying the parent id, the kind's
/// fixed `params` blob, and the current continuation token (absent on the
/// first page). Transport and shape failures propagate unchanged; there is
/// no retry at this layer and no parent state is touched.
pub async fn fetch_page(
    transport: &dyn Transport,
    browse_id: &str,
    kind: TabKind,
    continuation: Option<&str>,
) -> Result<Vec<JsonValue>> {
    let body = browse::browse_body(browse_id, kind, continuation);
    let payload = transport.post(browse::BROWSE_PATH, body).await?;
    browse::raw_items(kind, &payload).map(Vec::clone)
}

/// State owned by one feed: the append-only collection and its cursor
struct FeedState<T> {
    items: Vec<T>,
    cursor: Cursor,
}

/// One kind's paginated collection on a parent entity.
///
/// The driver is the single writer: `load_next` holds the write lock for
/// the whole call, which serializes pagination per (entity, kind) and keeps
/// cursor updates and appends atomic with respect to readers. Read accessors
/// return snapshots.
pub struct Feed<T> {
    kind: TabKind,
    state: RwLock<FeedState<T>>,
}

impl<T> Feed<T> {
    /// Create an empty feed with the cursor not yet initialized
    pub(crate) fn new(kind: TabKind) -> Self {
        Self {
            kind,
            state: RwLock::new(FeedState {
                items: Vec::new(),
                cursor: Cursor::Unset,
            }),
        }
    }

    /// The kind this feed paginates
    pub fn kind(&self) -> TabKind {
        self.kind
    }

    /// Current cursor state
    pub async fn cursor(&self) -> Cursor {
        self.state.read().await.cursor.clone()
    }

    /// Check if the feed has reached its terminal state
    pub async fn is_exhausted(&self) -> bool {
        self.state.read().await.cursor.is_exhausted()
    }

    /// Number of items loaded so far
    pub async fn len(&self) -> usize {
        self.state.read().await.items.len()
    }

    /// Check if no items have been loaded yet
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.items.is_empty()
    }
}

impl<T: FromRawItem + Clone> Feed<T> {
    /// Snapshot of all items loaded so far, in fetch order
    pub async fn items(&self) -> Vec<T> {
        self.state.read().await.items.clone()
    }

    /// Load up to `pages` further pages and return only the new items.
    ///
    /// `pages = 0` means "iterate until exhausted". Reaching exhaustion
    /// mid-loop stops early without error; a feed that is already exhausted
    /// returns an empty batch with zero transport calls. Items within a
    /// page keep server order, pages keep fetch order, and nothing is
    /// deduplicated.
    ///
    /// On failure, items from pages fetched earlier in the same call are
    /// appended to the collection before the error propagates.
    pub(crate) async fn load_next(
        &self,
        transport: &Arc<dyn Transport>,
        browse_id: &str,
        pages: usize,
    ) -> Result<Vec<T>> {
        let mut state = self.state.write().await;

        let mut batch: Vec<T> = Vec::new();
        let mut failure: Option<Error> = None;
        let mut fetched = 0usize;

        loop {
            if state.cursor.is_exhausted() {
                break;
            }
            if pages != 0 && fetched == pages {
                break;
            }

            let token = state.cursor.token().map(str::to_owned);
            let raw = match fetch_page(
                transport.as_ref(),
                browse_id,
                self.kind,
                token.as_deref(),
            )
            .await
            {
                Ok(raw) => raw,
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            };
            fetched += 1;

            state.cursor = next_cursor(&raw);

            let before = batch.len();
            for item in &raw {
                if is_continuation_marker(item) {
                    continue;
                }
                batch.push(T::from_raw(transport, item));
            }

            debug!(
                kind = %self.kind,
                page = fetched,
                items = batch.len() - before,
                "fetched page"
            );

            if state.cursor.is_exhausted() {
                debug!(kind = %self.kind, pages = fetched, "feed exhausted");
            }
        }

        // Append the whole batch in one step. This also runs on failure, so
        // pages fetched before the error are not lost.
        let appended_from = state.items.len();
        state.items.extend(batch);

        match failure {
            Some(e) => Err(e),
            None => Ok(state.items[appended_from..].to_vec()),
        }
    }
}

impl<T> std::fmt::Debug for Feed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Feed")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
