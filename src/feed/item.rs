use chrono::FixedOffset;

use super::Channel;
use crate::util::format_rfc822;
use crate::xml::XmlElement;

/// MIME type used by [`Item::audio_enclosure`].
pub const DEFAULT_ENCLOSURE_TYPE: &str = "audio/mpeg";

/// An item `<category>`, optionally scoped to a taxonomy `domain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category label, or a slash-delimited hierarchy such as `Grateful Dead/Live`.
    pub name: String,
    /// URL identifying the taxonomy, written as the `domain` attribute.
    pub domain: Option<String>,
}

/// A media object attached to an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    /// Where the media object is located. Must be an http URL.
    pub url: String,
    /// Size in bytes. Zero means unknown and is not written.
    pub length: u64,
    /// Written as the `type` attribute, e.g. `audio/mpeg`.
    pub mime_type: String,
}

/// String that uniquely identifies an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guid {
    /// The identifier. An empty value is treated as unset.
    pub value: String,
    /// Written as `isPermaLink` when set.
    pub is_permalink: Option<bool>,
}

/// The channel an item was republished from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Title of the originating channel, written as the element text.
    pub name: String,
    /// URL of the originating channel's feed, written as the `url` attribute.
    pub url: String,
}

/// A single feed entry, serialized as `<item>`.
///
/// Built with chained setters and then moved into a [`Channel`]:
///
/// ```
/// use rssgen::{Channel, Item};
///
/// let mut channel = Channel::new().title("Blog");
/// Item::new()
///     .title("Hello")
///     .link("https://example.com/hello")
///     .description("First post")
///     .guid("https://example.com/hello")
///     .append_to(&mut channel);
///
/// assert_eq!(channel.items().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    title: String,
    link: String,
    description: String,
    author: Option<String>,
    categories: Vec<Category>,
    comments: Option<String>,
    enclosure: Option<Enclosure>,
    guid: Option<Guid>,
    pub_date: Option<i64>,
    source: Option<Source>,
}

impl Item {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Email address of the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Appends a category without a domain.
    pub fn category(self, name: impl Into<String>) -> Self {
        self.push_category(name.into(), None)
    }

    /// Appends a category with a `domain` attribute.
    pub fn category_with_domain(self, name: impl Into<String>, domain: impl Into<String>) -> Self {
        self.push_category(name.into(), Some(domain.into()))
    }

    fn push_category(mut self, name: String, domain: Option<String>) -> Self {
        self.categories.push(Category { name, domain });
        self
    }

    /// URL of the comments page.
    pub fn comments(mut self, url: impl Into<String>) -> Self {
        self.comments = Some(url.into());
        self
    }

    /// Replaces the enclosure.
    ///
    /// # Arguments
    ///
    /// * `url` - Location of the media object
    /// * `length` - Size in bytes; `0` omits the `length` attribute
    /// * `mime_type` - Standard MIME type, written as `type`
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::FixedOffset;
    /// use rssgen::Item;
    ///
    /// let xml = Item::new()
    ///     .enclosure("https://x/ep1.ogg", 0, "audio/ogg")
    ///     .to_element(&FixedOffset::east_opt(0).unwrap());
    ///
    /// let enclosure = xml.find("enclosure").unwrap();
    /// assert_eq!(enclosure.attribute("type"), Some("audio/ogg"));
    /// assert_eq!(enclosure.attribute("length"), None);
    /// ```
    pub fn enclosure(
        mut self,
        url: impl Into<String>,
        length: u64,
        mime_type: impl Into<String>,
    ) -> Self {
        self.enclosure = Some(Enclosure {
            url: url.into(),
            length,
            mime_type: mime_type.into(),
        });
        self
    }

    /// Replaces the enclosure with an `audio/mpeg` one.
    pub fn audio_enclosure(self, url: impl Into<String>, length: u64) -> Self {
        self.enclosure(url, length, DEFAULT_ENCLOSURE_TYPE)
    }

    pub fn guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = Some(Guid {
            value: guid.into(),
            is_permalink: None,
        });
        self
    }

    /// Sets the guid with an explicit `isPermaLink` attribute.
    pub fn guid_permalink(mut self, guid: impl Into<String>, is_permalink: bool) -> Self {
        self.guid = Some(Guid {
            value: guid.into(),
            is_permalink: Some(is_permalink),
        });
        self
    }

    /// Publication date as a Unix timestamp in seconds.
    pub fn pub_date(mut self, timestamp: i64) -> Self {
        self.pub_date = Some(timestamp);
        self
    }

    /// Replaces the source channel reference.
    ///
    /// # Arguments
    ///
    /// * `name` - Title of the channel the item came from
    /// * `url` - URL of that channel's feed
    pub fn source(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.source = Some(Source {
            name: name.into(),
            url: url.into(),
        });
        self
    }

    /// Moves this item into `channel`, after any items already there.
    pub fn append_to(self, channel: &mut Channel) {
        channel.add_item(self);
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Builds the `<item>` element. Dates are written in `offset`.
    pub fn to_element(&self, offset: &FixedOffset) -> XmlElement {
        let mut xml = XmlElement::new("item");
        xml.push_text("title", self.title.as_str());
        xml.push_text("link", self.link.as_str());
        xml.push_text("description", self.description.as_str());
        xml.push_opt("author", self.author.as_deref());

        for category in &self.categories {
            let mut element = XmlElement::with_text("category", category.name.as_str());
            if let Some(ref domain) = category.domain {
                element = element.attr("domain", domain.as_str());
            }
            xml.push(element);
        }

        // Empty comments and guid strings count as unset
        xml.push_opt("comments", self.comments.as_deref().filter(|c| !c.is_empty()));

        if let Some(ref enclosure) = self.enclosure {
            let mut element = XmlElement::new("enclosure")
                .attr("url", enclosure.url.as_str())
                .attr("type", enclosure.mime_type.as_str());
            if enclosure.length > 0 {
                element = element.attr("length", enclosure.length.to_string());
            }
            xml.push(element);
        }

        if let Some(guid) = self.guid.as_ref().filter(|g| !g.value.is_empty()) {
            let mut element = XmlElement::with_text("guid", guid.value.as_str());
            if let Some(is_permalink) = guid.is_permalink {
                element = element.attr("isPermaLink", is_permalink.to_string());
            }
            xml.push(element);
        }

        if let Some(timestamp) = self.pub_date {
            match format_rfc822(timestamp, offset) {
                Some(date) => xml.push_text("pubDate", date),
                None => tracing::warn!(timestamp, "Skipping unrepresentable item pubDate"),
            }
        }

        if let Some(ref source) = self.source {
            xml.push(
                XmlElement::with_text("source", source.name.as_str())
                    .attr("url", source.url.as_str()),
            );
        }

        xml
    }
}
