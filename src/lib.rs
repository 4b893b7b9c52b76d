//! Fluent builder and serializer for RSS 2.0 feed documents.
//!
//! Configure [`Item`]s, attach them to a [`Channel`], attach channels to a
//! [`Feed`] and render:
//!
//! ```
//! use rssgen::{Channel, Feed, Item};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut feed = Feed::new();
//!
//! let mut channel = Channel::new()
//!     .title("Channel Title")
//!     .link("https://example.com")
//!     .description("Channel Description")
//!     .language("en-US")
//!     .ttl(60)
//!     .image_with("https://example.com/logo.png", "Logo", "https://example.com", 88, 31, None)?;
//!
//! Item::new()
//!     .title("Item Title")
//!     .link("https://example.com/?p=2")
//!     .description("Item body")
//!     .pub_date(1438577522)
//!     .guid_permalink("https://example.com/?p=2", true)
//!     .append_to(&mut channel);
//!
//! channel.append_to(&mut feed);
//!
//! let xml = feed.render()?;
//! assert!(xml.contains("<pubDate>Mon, 03 Aug 2015 04:52:02 +0000</pubDate>"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod feed;
pub mod util;
pub mod xml;

pub use config::{ConfigError, RenderConfig};
pub use error::{RenderError, ValidationError};
pub use feed::{Channel, Feed, Item};
