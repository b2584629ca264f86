//! Response shape extraction
//!
//! Locates the raw item list in a browse payload, accounting for the two
//! shapes the endpoint serves.

use crate::error::{Error, Result};
use crate::types::{JsonValue, TabKind};
use tracing::debug;

/// Extract the raw item list from a browse response payload.
///
/// Resolution order is load-bearing: prefer the initial-tab shape when it
/// resolves to a non-empty grid, otherwise fall back to the continuation
/// shape. Continuation responses can carry a stale or absent initial-shape
/// path, so the check is "does the path resolve to a usable list", never
/// "is this the first call".
///
/// The continuation shape is self-describing and ignores `kind`; only the
/// initial shape needs the tab ordinal. This is a protocol quirk the
/// endpoint guarantees, not an oversight.
///
/// Returns [`Error::ProtocolShape`] when neither shape yields a list, which
/// callers must treat as distinct from "no more pages".
pub fn raw_items(kind: TabKind, payload: &JsonValue) -> Result<&Vec<JsonValue>> {
    if let Some(items) = initial_tab_items(kind, payload) {
        if !items.is_empty() {
            return Ok(items);
        }
    }

    if let Some(items) = continuation_items(payload) {
        debug!(kind = %kind, "using continuation shape");
        return Ok(items);
    }

    // An empty initial grid with no continuation action is a valid empty
    // tab, not a shape violation.
    if let Some(items) = initial_tab_items(kind, payload) {
        return Ok(items);
    }

    Err(Error::protocol_shape(format!(
        "neither initial-tab nor continuation shape present for {kind}"
    )))
}

/// Initial-page shape: the grid lives under the kind's tab ordinal.
///
/// `contents.twoColumnBrowseResultsRenderer.tabs[idx].tabRenderer.content
///  .sectionListRenderer.contents[0].itemSectionRenderer.contents[0]
///  .gridRenderer.items`
fn initial_tab_items(kind: TabKind, payload: &JsonValue) -> Option<&Vec<JsonValue>> {
    payload
        .get("contents")?
        .get("twoColumnBrowseResultsRenderer")?
        .get("tabs")?
        .get(kind.tab_index())?
        .get("tabRenderer")?
        .get("content")?
        .get("sectionListRenderer")?
        .get("contents")?
        .get(0)?
        .get("itemSectionRenderer")?
        .get("contents")?
        .get(0)?
        .get("gridRenderer")?
        .get("items")?
        .as_array()
}

/// Continuation shape: kind-independent appended items action.
///
/// `onResponseReceivedActions[0].appendContinuationItemsAction.continuationItems`
fn continuation_items(payload: &JsonValue) -> Option<&Vec<JsonValue>> {
    payload
        .get("onResponseReceivedActions")?
        .get(0)?
        .get("appendContinuationItemsAction")?
        .get("continuationItems")?
        .as_array()
}
