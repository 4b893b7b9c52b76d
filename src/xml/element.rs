/// An XML element under construction.
///
/// An element holds either text content or child elements. Elements with
/// neither are written self-closing (`<enclosure url="..."/>`). Text is stored
/// unescaped; escaping happens when the tree is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Creates an element with text content. Empty text still produces an
    /// open/close pair (`<title></title>`), never a self-closing tag.
    pub fn with_text(name: &'static str, text: impl Into<String>) -> Self {
        Self::new(name).text(text)
    }

    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Appends a text child `<name>text</name>`.
    pub fn push_text(&mut self, name: &'static str, text: impl Into<String>) {
        self.children.push(Self::with_text(name, text));
    }

    /// Appends a text child only when a value is present.
    pub fn push_opt(&mut self, name: &'static str, text: Option<&str>) {
        if let Some(text) = text {
            self.push_text(name, text);
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn attributes(&self) -> &[(&'static str, String)] {
        &self.attributes
    }

    /// Looks up an attribute value by key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// First direct child with the given name.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Names of the direct children, in document order.
    pub fn child_names(&self) -> Vec<&'static str> {
        self.children.iter().map(|c| c.name).collect()
    }
}
