//! Browse request payload construction

use crate::types::{JsonValue, TabKind};
use serde_json::json;

/// API path for all browse requests
pub const BROWSE_PATH: &str = "/youtubei/v1/browse";

/// Build the browse request payload for one page fetch.
///
/// Wire contract: `{ browseId, params, continuation? }`. The `params` blob is
/// the fixed per-kind tab filter; `continuation` is omitted entirely on the
/// first page rather than sent as null.
pub fn browse_body(browse_id: &str, kind: TabKind, continuation: Option<&str>) -> JsonValue {
    let mut body = json!({
        "browseId": browse_id,
        "params": kind.params(),
    });

    if let Some(token) = continuation {
        body["continuation"] = json!(token);
    }

    body
}
