use std::io::BufRead;

use super::kinds::XmlTagMarker;
use super::{Terminator, nested};
use crate::parsing::{ParseError, Parser};
use crate::tree::{Node, NodeKind, NodeList, Options};

impl<R: BufRead> Parser<R> {
    /// Parses `<[prefix:]name attrs>content</[prefix:]name>` or the
    /// self-closing `<name attrs/>`.
    ///
    /// An opening tag without `>` runs to the line end and is treated as
    /// paired, so its content is whatever follows up to the closing tag.
    pub(super) fn parse_xml_tag(&mut self, enclosing: &[Terminator]) -> Result<Node, ParseError> {
        let start = self.total();
        let (prefix, name, consumed) = {
            let body = &self.rest()[1..];
            let end = [
                body.find(XmlTagMarker::END),
                body.find(XmlTagMarker::SELF_CLOSE),
                body.find(' '),
            ]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(body.len());
            let raw = &body[..end];
            let (prefix, name) = match raw.split_once(XmlTagMarker::PREFIX_SEPARATOR) {
                Some((prefix, name)) => (Some(prefix.trim().to_string()), name.trim()),
                None => (None, raw.trim()),
            };
            (prefix, name.to_string(), 1 + end)
        };
        self.skip(consumed);

        let mut options = Options::new();
        while self.parse_tag_option(&mut options, false) {}

        let tag_end = {
            let line = self.cursor.line().unwrap_or_default();
            let pos = self.pos();
            line[pos..].find(XmlTagMarker::END).map(|offset| {
                let end = pos + offset;
                (end, end > 0 && line.as_bytes()[end - 1] == b'/')
            })
        };
        let self_closing = match tag_end {
            Some((end, self_closing)) => {
                self.seek(end + 1);
                self_closing
            }
            None => {
                self.finish_line();
                false
            }
        };

        let content = if self_closing {
            NodeList::empty(self.total())
        } else {
            let close = XmlTagMarker::closing(prefix.as_deref(), &name);
            let content =
                self.parse_inline_list(&nested(Terminator::literal(close.as_str()), enclosing))?;
            if self.at(&close) {
                self.skip(close.len());
            }
            content
        };
        Ok(Node::new(
            NodeKind::XmlTag {
                prefix,
                name,
                options,
                content,
            },
            self.span_from(start),
        ))
    }
}
