use chrono::{FixedOffset, Weekday};

use super::{Feed, Item};
use crate::error::ValidationError;
use crate::util::{format_rfc822, parse_weekday, weekday_name};
use crate::xml::XmlElement;

/// Value of every channel's `<generator>`.
pub const GENERATOR: &str = concat!("rssgen/", env!("CARGO_PKG_VERSION"));

/// Value of every channel's `<docs>`.
pub const DOCS: &str = "https://www.rssboard.org/rss-specification";

pub const DEFAULT_IMAGE_WIDTH: u32 = 88;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 31;
pub const MAX_IMAGE_WIDTH: u32 = 144;
pub const MAX_IMAGE_HEIGHT: u32 = 400;
pub const MAX_SKIP_HOUR: u8 = 23;

/// rssCloud registration endpoint, written as the attributes of `<cloud>`.
///
/// Lets aggregators register for change notifications instead of polling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cloud {
    /// Host name of the cloud server, e.g. `rpc.sys.com`.
    pub domain: String,
    /// TCP port the cloud server listens on.
    pub port: u16,
    /// Path of the registration endpoint, e.g. `/RPC2`.
    pub path: String,
    /// Name of the procedure to call, e.g. `pingMe` or `myCloud.rssPleaseNotify`.
    pub register_procedure: String,
    /// Notification protocol: `xml-rpc`, `soap` or `http-post`.
    pub protocol: String,
}

/// Channel logo.
///
/// Fields are private so the size limits checked by [`Image::new`] always
/// hold: width in `1..=144`, height in `1..=400`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    url: String,
    title: String,
    link: String,
    width: u32,
    height: u32,
    description: Option<String>,
}

impl Image {
    /// Creates an image, validating its dimensions.
    ///
    /// # Arguments
    ///
    /// * `url` - URL of a GIF, JPEG or PNG image
    /// * `title` - Alt text when the image is shown in HTML
    /// * `link` - URL of the site the image links to
    /// * `width` - Width in pixels, `1..=144`
    /// * `height` - Height in pixels, `1..=400`
    /// * `description` - Optional `title` attribute of the HTML link
    ///
    /// # Errors
    ///
    /// [`ValidationError::ImageWidthOutOfRange`] or
    /// [`ValidationError::ImageHeightOutOfRange`] naming the violated bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use rssgen::feed::Image;
    /// use rssgen::ValidationError;
    ///
    /// let image = Image::new("https://x/logo.png", "Logo", "https://x", 144, 400, None).unwrap();
    /// assert_eq!((image.width(), image.height()), (144, 400));
    ///
    /// assert_eq!(
    ///     Image::new("u", "t", "l", 145, 31, None),
    ///     Err(ValidationError::ImageWidthOutOfRange(145))
    /// );
    /// ```
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        link: impl Into<String>,
        width: u32,
        height: u32,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        if !(1..=MAX_IMAGE_WIDTH).contains(&width) {
            return Err(ValidationError::ImageWidthOutOfRange(width));
        }
        if !(1..=MAX_IMAGE_HEIGHT).contains(&height) {
            return Err(ValidationError::ImageHeightOutOfRange(height));
        }
        Ok(Self {
            url: url.into(),
            title: title.into(),
            link: link.into(),
            width,
            height,
            description,
        })
    }

    /// The default-sized (88x31) image, which needs no validation.
    fn with_default_size(url: String, title: String, link: String) -> Self {
        Self {
            url,
            title,
            link,
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
            description: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn to_element(&self) -> XmlElement {
        let mut xml = XmlElement::new("image");
        xml.push_text("url", self.url.as_str());
        xml.push_text("title", self.title.as_str());
        xml.push_text("link", self.link.as_str());
        xml.push_text("width", self.width.to_string());
        xml.push_text("height", self.height.to_string());
        xml.push_opt(
            "description",
            self.description.as_deref().filter(|d| !d.is_empty()),
        );
        xml
    }
}

/// A search box the aggregator may display alongside the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    /// Label of the submit button.
    pub title: String,
    /// URL of the CGI script that processes queries.
    pub link: String,
    /// Name of the text object.
    pub name: String,
    /// Explains the text input area.
    pub description: String,
}

/// Feed metadata and its items, serialized as `<channel>`.
///
/// ```
/// use rssgen::Channel;
///
/// # fn main() -> Result<(), rssgen::ValidationError> {
/// let channel = Channel::new()
///     .title("Example")
///     .link("https://example.com")
///     .description("Example channel")
///     .ttl(60)
///     .skip_hours([0, 1, 2])?
///     .skip_days(["Saturday", "Sunday"])?;
///
/// assert_eq!(channel.skipped_hours(), &[0, 1, 2]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channel {
    title: String,
    link: String,
    description: String,
    language: Option<String>,
    copyright: Option<String>,
    managing_editor: Option<String>,
    web_master: Option<String>,
    pub_date: Option<i64>,
    last_build_date: Option<i64>,
    category: Option<String>,
    cloud: Option<Cloud>,
    ttl: Option<u32>,
    image: Option<Image>,
    rating: Option<String>,
    text_input: Option<TextInput>,
    skip_hours: Vec<u8>,
    skip_days: Vec<Weekday>,
    items: Vec<Item>,
}

impl Channel {
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

    /// Language code, e.g. `en-us`.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = Some(copyright.into());
        self
    }

    /// Email address of the person responsible for editorial content.
    pub fn managing_editor(mut self, managing_editor: impl Into<String>) -> Self {
        self.managing_editor = Some(managing_editor.into());
        self
    }

    /// Email address of the person responsible for technical issues.
    pub fn web_master(mut self, web_master: impl Into<String>) -> Self {
        self.web_master = Some(web_master.into());
        self
    }

    /// Publication date as a Unix timestamp in seconds.
    pub fn pub_date(mut self, timestamp: i64) -> Self {
        self.pub_date = Some(timestamp);
        self
    }

    /// Last content change as a Unix timestamp in seconds.
    pub fn last_build_date(mut self, timestamp: i64) -> Self {
        self.last_build_date = Some(timestamp);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Replaces the rssCloud registration settings.
    ///
    /// All five values are required together; there is no partial update.
    ///
    /// # Arguments
    ///
    /// * `domain` - Host name of the cloud server
    /// * `port` - TCP port of the cloud server
    /// * `path` - Path of the registration endpoint
    /// * `register_procedure` - Procedure aggregators call to register
    /// * `protocol` - `xml-rpc`, `soap` or `http-post`
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::FixedOffset;
    /// use rssgen::Channel;
    ///
    /// let xml = Channel::new()
    ///     .cloud("rpc.sys.com", 80, "/RPC2", "pingMe", "soap")
    ///     .to_element(&FixedOffset::east_opt(0).unwrap());
    ///
    /// let cloud = xml.find("cloud").unwrap();
    /// assert_eq!(cloud.attribute("port"), Some("80"));
    /// assert_eq!(cloud.attribute("registerProcedure"), Some("pingMe"));
    /// ```
    pub fn cloud(
        mut self,
        domain: impl Into<String>,
        port: u16,
        path: impl Into<String>,
        register_procedure: impl Into<String>,
        protocol: impl Into<String>,
    ) -> Self {
        self.cloud = Some(Cloud {
            domain: domain.into(),
            port,
            path: path.into(),
            register_procedure: register_procedure.into(),
            protocol: protocol.into(),
        });
        self
    }

    /// Cache lifetime in minutes.
    pub fn ttl(mut self, minutes: u32) -> Self {
        self.ttl = Some(minutes);
        self
    }

    /// Replaces the image with a default-sized (88x31) one.
    pub fn image(
        mut self,
        url: impl Into<String>,
        title: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        self.image = Some(Image::with_default_size(url.into(), title.into(), link.into()));
        self
    }

    /// Replaces the image, validating its dimensions.
    ///
    /// # Arguments
    ///
    /// * `url` - URL of a GIF, JPEG or PNG image
    /// * `title` - Alt text when the image is shown in HTML
    /// * `link` - URL of the site the image links to
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    /// * `description` - Optional `title` attribute of the HTML link
    ///
    /// # Errors
    ///
    /// [`ValidationError::ImageWidthOutOfRange`] if `width` is not in `1..=144`,
    /// [`ValidationError::ImageHeightOutOfRange`] if `height` is not in `1..=400`.
    pub fn image_with(
        mut self,
        url: impl Into<String>,
        title: impl Into<String>,
        link: impl Into<String>,
        width: u32,
        height: u32,
        description: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let image = Image::new(url, title, link, width, height, description.map(str::to_owned))?;
        self.image = Some(image);
        Ok(self)
    }

    /// PICS rating.
    pub fn rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    /// Replaces the text input box.
    ///
    /// # Arguments
    ///
    /// * `title` - Label of the submit button
    /// * `link` - URL of the script that processes queries
    /// * `name` - Name of the text object
    /// * `description` - Explains the text input area
    pub fn text_input(
        mut self,
        title: impl Into<String>,
        link: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.text_input = Some(TextInput {
            title: title.into(),
            link: link.into(),
            name: name.into(),
            description: description.into(),
        });
        self
    }

    /// Replaces the hours (0-23, GMT) aggregators should not poll.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// [`ValidationError::SkipHourOutOfRange`] for the first hour that is
    /// negative or above 23.
    pub fn skip_hours<I>(mut self, hours: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut unique = Vec::new();
        for value in hours {
            let hour = u8::try_from(value)
                .ok()
                .filter(|h| *h <= MAX_SKIP_HOUR)
                .ok_or_else(|| {
                    tracing::debug!(hour = value, "Rejected skipHours entry");
                    ValidationError::SkipHourOutOfRange(value)
                })?;
            if !unique.contains(&hour) {
                unique.push(hour);
            }
        }
        self.skip_hours = unique;
        Ok(self)
    }

    /// Replaces the days aggregators should not poll, given as English
    /// weekday names (`"Sunday"` through `"Saturday"`, case-sensitive).
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidSkipDay`] for the first unrecognized name.
    pub fn skip_days<I, S>(self, days: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = days
            .into_iter()
            .map(|day| {
                let day = day.as_ref();
                parse_weekday(day).ok_or_else(|| {
                    tracing::debug!(day, "Rejected skipDays entry");
                    ValidationError::InvalidSkipDay(day.to_owned())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.skip_weekdays(parsed))
    }

    /// Typed variant of [`Channel::skip_days`].
    pub fn skip_weekdays<I>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        let mut unique = Vec::new();
        for day in days {
            if !unique.contains(&day) {
                unique.push(day);
            }
        }
        self.skip_days = unique;
        self
    }

    /// Appends an item after any existing ones.
    pub fn add_item(&mut self, item: Item) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Moves this channel into `feed`, after any channels already there.
    pub fn append_to(self, feed: &mut Feed) {
        feed.add_channel(self);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn skipped_hours(&self) -> &[u8] {
        &self.skip_hours
    }

    pub fn skipped_days(&self) -> &[Weekday] {
        &self.skip_days
    }

    /// Builds the `<channel>` element, items included. Dates are written in
    /// `offset`.
    pub fn to_element(&self, offset: &FixedOffset) -> XmlElement {
        let mut xml = XmlElement::new("channel");
        xml.push_text("title", self.title.as_str());
        xml.push_text("link", self.link.as_str());
        xml.push_text("description", self.description.as_str());
        xml.push_opt("language", self.language.as_deref());
        xml.push_opt("copyright", self.copyright.as_deref());
        xml.push_opt("managingEditor", self.managing_editor.as_deref());
        xml.push_opt("webMaster", self.web_master.as_deref());
        push_date(&mut xml, "pubDate", self.pub_date, offset);
        push_date(&mut xml, "lastBuildDate", self.last_build_date, offset);
        xml.push_opt("category", self.category.as_deref());
        xml.push_text("generator", GENERATOR);
        xml.push_text("docs", DOCS);

        if let Some(ref cloud) = self.cloud {
            xml.push(
                XmlElement::new("cloud")
                    .attr("domain", cloud.domain.as_str())
                    .attr("port", cloud.port.to_string())
                    .attr("path", cloud.path.as_str())
                    .attr("registerProcedure", cloud.register_procedure.as_str())
                    .attr("protocol", cloud.protocol.as_str()),
            );
        }

        if let Some(ttl) = self.ttl {
            xml.push_text("ttl", ttl.to_string());
        }

        if let Some(ref image) = self.image {
            xml.push(image.to_element());
        }

        xml.push_opt("rating", self.rating.as_deref());

        if let Some(ref input) = self.text_input {
            xml.push(
                XmlElement::new("textInput")
                    .child(XmlElement::with_text("title", input.title.as_str()))
                    .child(XmlElement::with_text("description", input.description.as_str()))
                    .child(XmlElement::with_text("name", input.name.as_str()))
                    .child(XmlElement::with_text("link", input.link.as_str())),
            );
        }

        if !self.skip_hours.is_empty() {
            let mut hours = XmlElement::new("skipHours");
            for hour in &self.skip_hours {
                hours.push_text("hour", hour.to_string());
            }
            xml.push(hours);
        }

        if !self.skip_days.is_empty() {
            let mut days = XmlElement::new("skipDays");
            for day in &self.skip_days {
                days.push_text("day", weekday_name(*day));
            }
            xml.push(days);
        }

        for item in &self.items {
            xml.push(item.to_element(offset));
        }

        xml
    }
}

fn push_date(xml: &mut XmlElement, name: &'static str, timestamp: Option<i64>, offset: &FixedOffset) {
    let Some(timestamp) = timestamp else {
        return;
    };
    match format_rfc822(timestamp, offset) {
        Some(date) => xml.push_text(name, date),
        None => tracing::warn!(element = name, timestamp, "Skipping unrepresentable channel date"),
    }
}
