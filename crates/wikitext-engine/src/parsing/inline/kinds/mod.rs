pub mod emphasis;
pub mod link;
pub mod nowiki;
pub mod tag;

pub use link::Link;
pub use nowiki::Nowiki;
pub use tag::{WikiTagMarker, XmlTagMarker, names, options};

use crate::tree::EmphasisKind;

/// The construct opened at the start of an inline remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStart {
    Emphasis(EmphasisKind),
    Nowiki,
    Link,
    WikiTag,
    XmlTag,
    LineEnd,
    Text,
}

impl InlineStart {
    pub fn classify(remainder: &str) -> Self {
        if let Some(kind) = EmphasisKind::opened_by(remainder) {
            InlineStart::Emphasis(kind)
        } else if remainder.starts_with(Nowiki::DELIMITER) {
            InlineStart::Nowiki
        } else if remainder.starts_with(Link::OPEN) {
            InlineStart::Link
        } else if remainder.starts_with(WikiTagMarker::OPEN) {
            InlineStart::WikiTag
        } else if XmlTagMarker::opens(remainder) {
            InlineStart::XmlTag
        } else if remainder.is_empty() {
            InlineStart::LineEnd
        } else {
            InlineStart::Text
        }
    }
}

/// True where a text run has to stop because markup begins.
///
/// Unlike [`InlineStart::classify`], a lone `<` at the end of the line does
/// not count.
pub fn starts_inline_markup(tail: &str) -> bool {
    const PAIRS: [&str; 9] = ["''", "##", "__", "~~", "°°", "@@", "%%", "{{", "[["];
    PAIRS.iter().any(|pair| tail.starts_with(pair))
        || tail
            .strip_prefix(XmlTagMarker::OPEN)
            .and_then(|after| after.chars().next())
            .is_some_and(|next| next != ' ')
}
