use std::fmt;

use super::Channel;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::xml::{write_document, XmlElement};

/// The top-level `<rss version="2.0">` document.
///
/// ```
/// use rssgen::{Channel, Feed, Item};
///
/// let mut feed = Feed::new();
/// let mut channel = Channel::new()
///     .title("Example")
///     .link("https://example.com")
///     .description("Example channel");
/// Item::new().title("Hello").append_to(&mut channel);
/// channel.append_to(&mut feed);
///
/// let xml = feed.render().unwrap();
/// assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rss version=\"2.0\">"));
/// assert_eq!(xml, feed.to_string());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    channels: Vec<Channel>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a channel after any existing ones.
    pub fn add_channel(&mut self, channel: Channel) -> &mut Self {
        self.channels.push(channel);
        self
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Mutable access, e.g. to add items to a channel already in the feed.
    pub fn channels_mut(&mut self) -> &mut [Channel] {
        &mut self.channels
    }

    /// Builds the `<rss>` element tree.
    pub fn to_element(&self, config: &RenderConfig) -> Result<XmlElement, RenderError> {
        let offset = config.offset()?;

        let mut rss = XmlElement::new("rss").attr("version", "2.0");
        for channel in &self.channels {
            rss.push(channel.to_element(&offset));
        }
        Ok(rss)
    }

    /// Renders the document with the default [`RenderConfig`].
    pub fn render(&self) -> Result<String, RenderError> {
        self.render_with(&RenderConfig::default())
    }

    /// Renders the document: XML declaration, then the indented `<rss>` tree.
    ///
    /// Output is computed on every call; repeated calls on an unchanged feed
    /// return identical strings.
    pub fn render_with(&self, config: &RenderConfig) -> Result<String, RenderError> {
        let root = self.to_element(config)?;
        let mut xml = write_document(&root, config.indent_size)?;
        if config.trailing_newline {
            xml.push('\n');
        }

        tracing::debug!(
            channels = self.channels.len(),
            items = self.channels.iter().map(|c| c.items().len()).sum::<usize>(),
            bytes = xml.len(),
            "Rendered RSS document"
        );
        Ok(xml)
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let xml = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&xml)
    }
}
