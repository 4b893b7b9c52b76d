//! Minimal XML element tree and its serializer.
//!
//! Feed entities describe themselves as an [`XmlElement`] tree; [`write_document`]
//! turns the finished tree into a string in a single pass. Escaping and
//! indentation are handled by `quick-xml`'s writer.

mod element;
mod writer;

pub use element::XmlElement;
pub use writer::write_document;
