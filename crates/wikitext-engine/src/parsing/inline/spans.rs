use std::io::BufRead;

use super::kinds::{Link, Nowiki};
use super::{Terminator, nested};
use crate::parsing::{ParseError, Parser};
use crate::tree::{EmphasisKind, LinkTarget, Node, NodeKind};

impl<R: BufRead> Parser<R> {
    /// `''…''` and friends. A missing closing delimiter leaves the span
    /// open up to whatever ended its content.
    pub(super) fn parse_emphasis(
        &mut self,
        kind: EmphasisKind,
        enclosing: &[Terminator],
    ) -> Result<Node, ParseError> {
        let start = self.total();
        let delimiter = kind.delimiter();
        self.skip(delimiter.len());
        let content = self.parse_inline_list(&nested(Terminator::literal(delimiter), enclosing))?;
        if self.at(delimiter) {
            self.skip(delimiter.len());
        }
        Ok(Node::new(
            NodeKind::Emphasis { kind, content },
            self.span_from(start),
        ))
    }

    /// Raw text up to the next `%%`, across lines. Unterminated spans run to
    /// end of input with a newline after every line.
    pub(super) fn parse_nowiki(&mut self) -> Result<Node, ParseError> {
        let start = self.total();
        self.skip(Nowiki::DELIMITER.len());
        let mut text = String::new();
        while let Some(remainder) = self.cursor.remainder() {
            if let Some(end) = remainder.find(Nowiki::DELIMITER) {
                text.push_str(&remainder[..end]);
                self.skip(end + Nowiki::DELIMITER.len());
                break;
            }
            text.push_str(remainder);
            text.push('\n');
            self.next_line()?;
        }
        Ok(Node::new(NodeKind::Nowiki { text }, self.span_from(start)))
    }

    /// `[[target]]`, `[[target | alt text]]`, or an unterminated `[[target`
    /// running to the line end.
    pub(super) fn parse_link(&mut self, enclosing: &[Terminator]) -> Result<Node, ParseError> {
        let start = self.total();
        let (target, has_alt, consumed) = {
            let body = &self.rest()[Link::OPEN.len()..];
            let close = body.find(Link::CLOSE);
            let pipe = body.find(Link::ALT_SEPARATOR);
            match (pipe, close) {
                (Some(pipe), close) if close.is_none_or(|close| pipe < close) => {
                    let mut consumed = pipe + 1;
                    if body[consumed..].starts_with(' ') {
                        consumed += 1;
                    }
                    (&body[..pipe], true, consumed)
                }
                (_, Some(close)) => (&body[..close], false, close + Link::CLOSE.len()),
                (_, None) => (body, false, body.len()),
            }
        };
        let target = LinkTarget::parse(target);
        self.skip(Link::OPEN.len() + consumed);

        let alt_text = if has_alt {
            let alt = self.parse_inline_list(&nested(Terminator::literal(Link::CLOSE), enclosing))?;
            if self.at(Link::CLOSE) {
                self.skip(Link::CLOSE.len());
            }
            Some(alt)
        } else {
            None
        };
        Ok(Node::new(
            NodeKind::Link { target, alt_text },
            self.span_from(start),
        ))
    }
}
