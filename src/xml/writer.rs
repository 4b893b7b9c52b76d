use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::XmlElement;
use crate::error::RenderError;
use crate::util::strip_control_chars;

/// Serializes `root` as a standalone UTF-8 document with an XML declaration.
///
/// `indent_size` spaces are used per nesting level; `0` writes the document
/// on a single line after the declaration. Characters XML 1.0 forbids are
/// stripped from text and attribute values, so the output is always
/// well-formed.
pub fn write_document(root: &XmlElement, indent_size: usize) -> Result<String, RenderError> {
    let sink = Cursor::new(Vec::new());
    let mut writer = if indent_size == 0 {
        Writer::new(sink)
    } else {
        Writer::new_with_indent(sink, b' ', indent_size)
    };

    emit(
        &mut writer,
        "xml declaration",
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    write_element(&mut writer, root)?;

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes)?)
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    element: &XmlElement,
) -> Result<(), RenderError> {
    let name = element.name();
    let mut start = BytesStart::new(name);
    for (key, value) in element.attributes() {
        start.push_attribute((*key, strip_control_chars(value).as_ref()));
    }

    if !element.children().is_empty() {
        emit(writer, name, Event::Start(start))?;
        for child in element.children() {
            write_element(writer, child)?;
        }
        emit(writer, name, Event::End(BytesEnd::new(name)))
    } else if let Some(text) = element.text_content() {
        // The text event keeps the closing tag on the same line, even when empty
        let text = strip_control_chars(text);
        emit(writer, name, Event::Start(start))?;
        emit(writer, name, Event::Text(BytesText::new(&text)))?;
        emit(writer, name, Event::End(BytesEnd::new(name)))
    } else {
        emit(writer, name, Event::Empty(start))
    }
}

fn emit<W: std::io::Write>(
    writer: &mut Writer<W>,
    element: &'static str,
    event: Event<'_>,
) -> Result<(), RenderError> {
    writer
        .write_event(event)
        .map_err(|e| RenderError::Write {
            element,
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nested_document_is_indented() {
        let root = XmlElement::new("rss").attr("version", "2.0").child(
            XmlElement::new("channel")
                .child(XmlElement::with_text("title", "T"))
                .child(XmlElement::new("cloud").attr("port", "80")),
        );

        let xml = write_document(&root, 2).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <rss version=\"2.0\">\n\
             \x20 <channel>\n\
             \x20   <title>T</title>\n\
             \x20   <cloud port=\"80\"/>\n\
             \x20 </channel>\n\
             </rss>"
        );
    }

    #[test]
    fn test_empty_text_is_not_self_closing() {
        let root = XmlElement::new("item").child(XmlElement::with_text("title", ""));

        let xml = write_document(&root, 2).unwrap();
        assert!(xml.contains("<title></title>"), "got: {}", xml);
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let root = XmlElement::new("item")
            .child(XmlElement::with_text("title", "Fish & Chips <hot>"))
            .child(
                XmlElement::with_text("category", "food")
                    .attr("domain", "https://example.com/?a=1&b=2"),
            );

        let xml = write_document(&root, 2).unwrap();
        assert!(xml.contains("<title>Fish &amp; Chips &lt;hot&gt;</title>"));
        assert!(xml.contains("domain=\"https://example.com/?a=1&amp;b=2\""));
    }

    #[test]
    fn test_control_chars_never_reach_output() {
        let root = XmlElement::new("item")
            .child(XmlElement::with_text("title", "]]> & \u{0}bell\x07\x1b[0m"))
            .child(
                XmlElement::new("enclosure")
                    .attr("url", "http://x/a\u{0}.mp3")
                    .attr("type", "audio/\x1bmpeg"),
            );

        let xml = write_document(&root, 2).unwrap();
        assert!(
            !xml.chars().any(|c| c < ' ' && c != '\n'),
            "control character in output: {:?}",
            xml
        );
        assert!(xml.contains("<title>]]&gt; &amp; bell[0m</title>"));
        assert!(xml.contains("<enclosure url=\"http://x/a.mp3\" type=\"audio/mpeg\"/>"));
    }

    #[test]
    fn test_whitespace_controls_are_kept() {
        let root = XmlElement::new("item").child(XmlElement::with_text("description", "a\tb\r\nc"));

        let xml = write_document(&root, 2).unwrap();
        assert!(xml.contains("<description>a\tb\r\nc</description>"));
    }

    #[test]
    fn test_zero_indent_writes_single_line() {
        let root = XmlElement::new("rss").child(XmlElement::with_text("channel", "x"));

        let xml = write_document(&root, 0).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><rss><channel>x</channel></rss>"
        );
    }
}
