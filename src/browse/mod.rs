//! Browse API wire contract
//!
//! Request payload construction and response shape extraction for the
//! platform's internal browse endpoint.
//!
//! # Overview
//!
//! The browse endpoint serves two structurally different response shapes for
//! the same logical data: the initial tab load nests the item grid inside a
//! kind-indexed tab tree, while continuation responses carry a flat
//! "appended items" action. This module owns both paths so nothing above it
//! has to know which page of a feed a payload came from.

mod extract;
mod request;

pub use extract::raw_items;
pub use request::{browse_body, BROWSE_PATH};
