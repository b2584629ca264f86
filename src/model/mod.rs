//! Channel model
//!
//! The [`Channel`] parent entity and the typed child entities its feeds
//! produce.

mod channel;
mod items;

pub use channel::Channel;
pub use items::{Playlist, Thumbnail, Video};
