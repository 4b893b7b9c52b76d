//! RSS 2.0 feed entities.
//!
//! The three levels of an RSS document, leaves first:
//!
//! - [`Item`] - a single entry, written as `<item>`
//! - [`Channel`] - feed metadata plus its items, written as `<channel>`
//! - [`Feed`] - the `<rss>` document holding one or more channels
//!
//! Each level builds its own [`XmlElement`](crate::xml::XmlElement) subtree;
//! [`Feed::render`] assembles them and writes the document in one pass.

mod channel;
mod document;
mod item;

pub use channel::{
    Channel, Cloud, Image, TextInput, DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, DOCS, GENERATOR,
    MAX_IMAGE_HEIGHT, MAX_IMAGE_WIDTH, MAX_SKIP_HOUR,
};
pub use document::Feed;
pub use item::{Category, Enclosure, Guid, Item, Source, DEFAULT_ENCLOSURE_TYPE};
