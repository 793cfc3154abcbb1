//! # Inline Parsing
//!
//! Inline content runs from the current position across line breaks until a
//! [`Terminator`] fires, a new block starts at the beginning of a line, a
//! table cell boundary is reached, or input ends. Terminators are never
//! consumed here; the construct that asked for one consumes it.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiters and the [`kinds::InlineStart`] dispatch
//! - **`spans`**: emphasis, nowiki and link spans
//! - **`wiki_tag`**: `{{name:value | options}}` and its dedicated nodes
//! - **`xml_tag`**: `<prefix:name attr=value>` tags
//! - **`attributes`**: option words shared by both tag forms

mod attributes;
pub mod kinds;
mod spans;
mod wiki_tag;
mod xml_tag;

use std::io::BufRead;

use super::blocks::{BlockSig, starts_block};
use super::{ParseError, Parser};
use crate::tree::{Node, NodeKind, NodeList};
use kinds::{InlineStart, starts_inline_markup};

/// A stop condition for an inline list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Terminator {
    /// Stops where the remainder starts with the string.
    Literal(String),
    /// Stops at the end of the current line.
    LineEnd,
    /// Stops at an empty line.
    BlankLine,
}

impl Terminator {
    pub fn literal(s: impl Into<String>) -> Self {
        Terminator::Literal(s.into())
    }

    fn fires(&self, line: &str, pos: usize) -> bool {
        match self {
            Terminator::Literal(s) => line[pos..].starts_with(s.as_str()),
            Terminator::LineEnd => line.len() <= pos,
            Terminator::BlankLine => line.is_empty() && pos == 0,
        }
    }
}

/// `own` followed by the enclosing terminators, which stay in force inside
/// nested spans.
fn nested(own: Terminator, enclosing: &[Terminator]) -> Vec<Terminator> {
    let mut terminators = Vec::with_capacity(enclosing.len() + 1);
    terminators.push(own);
    terminators.extend_from_slice(enclosing);
    terminators
}

impl<R: BufRead> Parser<R> {
    pub(crate) fn parse_inline_list(
        &mut self,
        terminators: &[Terminator],
    ) -> Result<NodeList, ParseError> {
        let start = self.total();
        let mut nodes = vec![];
        while let Some(node) = self.parse_inline(terminators)? {
            nodes.push(node);
        }
        Ok(NodeList::new(nodes, self.span_from(start)))
    }

    fn parse_inline(&mut self, terminators: &[Terminator]) -> Result<Option<Node>, ParseError> {
        let Some(line) = self.cursor.line() else {
            return Ok(None);
        };
        let pos = self.pos();
        let remainder = &line[pos..];
        if self.in_table() && remainder.starts_with('|') {
            return Ok(None);
        }
        if terminators.iter().any(|t| t.fires(line, pos)) {
            return Ok(None);
        }
        // Paragraph prefixes such as `{{title}}` are content where a paragraph opens
        if pos == 0 && BlockSig::classify(remainder, false) != BlockSig::Paragraph {
            return Ok(None);
        }

        let node = match InlineStart::classify(remainder) {
            InlineStart::Emphasis(kind) => self.parse_emphasis(kind, terminators)?,
            InlineStart::Nowiki => self.parse_nowiki()?,
            InlineStart::Link => self.parse_link(terminators)?,
            InlineStart::WikiTag => self.parse_wiki_tag(terminators)?,
            InlineStart::XmlTag => self.parse_xml_tag(terminators)?,
            InlineStart::LineEnd => return self.parse_line_break(),
            InlineStart::Text => self.parse_text(terminators),
        };
        Ok(Some(node))
    }

    /// Moves to the next line; yields a line break only if the inline list
    /// carries on there.
    fn parse_line_break(&mut self) -> Result<Option<Node>, ParseError> {
        let start = self.total();
        self.next_line()?;
        let Some(remainder) = self.cursor.remainder() else {
            return Ok(None);
        };
        if starts_block(remainder) || (self.in_table() && remainder.starts_with('|')) {
            return Ok(None);
        }
        Ok(Some(Node::new(NodeKind::LineBreak, self.span_from(start))))
    }

    /// Plain text up to the next markup, terminator, cell boundary or line end.
    ///
    /// The first character is always taken, so the run is never empty.
    fn parse_text(&mut self, terminators: &[Terminator]) -> Node {
        let start = self.total();
        let text = {
            let remainder = self.rest();
            let end = remainder
                .char_indices()
                .skip(1)
                .map(|(i, _)| i)
                .find(|&i| {
                    let tail = &remainder[i..];
                    (self.in_table() && tail.starts_with('|'))
                        || terminators.iter().any(|t| match t {
                            Terminator::Literal(s) => tail.starts_with(s.as_str()),
                            _ => false,
                        })
                        || starts_inline_markup(tail)
                })
                .unwrap_or(remainder.len());
            remainder[..end].to_string()
        };
        self.skip(text.len());
        Node::new(NodeKind::Text { text }, self.span_from(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminators_fire_on_their_condition() {
        assert!(Terminator::literal("]]").fires("a]]", 1));
        assert!(!Terminator::literal("]]").fires("a]]", 0));
        assert!(Terminator::LineEnd.fires("abc", 3));
        assert!(!Terminator::LineEnd.fires("abc", 2));
        assert!(Terminator::BlankLine.fires("", 0));
        assert!(!Terminator::BlankLine.fires("abc", 3));
    }

    #[test]
    fn nested_puts_own_terminator_first() {
        let enclosing = [Terminator::LineEnd];
        assert_eq!(
            nested(Terminator::literal("''"), &enclosing),
            vec![Terminator::literal("''"), Terminator::LineEnd]
        );
    }
}
