//! # Wiki Markup Parsing
//!
//! A hand-written recursive-descent parser over a [`LineCursor`].
//!
//! ## Parsing Layers
//!
//! 1. **Lines** (`line_cursor`): the source is read one logical line at a
//!    time with a running byte total used to stamp spans
//! 2. **Blocks** (`blocks`): constructs recognised from the unconsumed part
//!    of a line (headings, lists, tables, code, block tags, paragraphs)
//! 3. **Inline** (`inline`): emphasis, links, raw spans and tags inside any
//!    block's content, bounded by caller-supplied [`inline::Terminator`]s
//!
//! Table cells re-enter the block layer, so tables nest to any depth. The
//! open-table depth is the only state shared across the whole parse besides
//! the cursor.
//!
//! ## Failure Model
//!
//! Malformed markup never fails: every construct falls back to consuming up
//! to the line or input end. The only error is a failed read of the source.

pub mod blocks;
pub mod inline;
pub mod line_cursor;
pub mod span;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead};

use log::debug;

use crate::tree::{Node, NodeKind, NodeList};

pub use line_cursor::LineCursor;
pub use span::Span;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read wiki source: {0}")]
    Read(#[from] io::Error),
}

/// Recursive-descent parser state: the line cursor and open-table depth.
pub struct Parser<R> {
    cursor: LineCursor<R>,
    open_tables: usize,
}

impl<R: BufRead> Parser<R> {
    pub fn new(reader: R) -> Result<Self, ParseError> {
        Ok(Self {
            cursor: LineCursor::new(reader)?,
            open_tables: 0,
        })
    }

    /// Parses the whole input into a block list.
    pub fn parse(mut self) -> Result<NodeList, ParseError> {
        let list = self.parse_block_list()?;
        debug!(
            "parsed {} top-level nodes from {} bytes",
            list.len(),
            self.cursor.consumed_total()
        );
        Ok(list)
    }

    /// Unconsumed part of the current line, empty at end of input.
    fn rest(&self) -> &str {
        self.cursor.remainder().unwrap_or_default()
    }

    fn at(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    fn pos(&self) -> usize {
        self.cursor.consumed_in_line()
    }

    fn total(&self) -> usize {
        self.cursor.consumed_total()
    }

    /// Moves to an absolute position within the current line.
    fn seek(&mut self, pos: usize) {
        self.cursor.set_consumed_in_line(pos);
    }

    fn skip(&mut self, n: usize) {
        self.seek(self.pos() + n);
    }

    fn finish_line(&mut self) {
        if let Some(len) = self.cursor.line().map(str::len) {
            self.seek(len);
        }
    }

    fn next_line(&mut self) -> Result<(), ParseError> {
        self.cursor.advance_line()?;
        Ok(())
    }

    fn in_table(&self) -> bool {
        self.open_tables > 0
    }

    /// Total at `pos` in the current line, which may lie ahead of the cursor.
    fn total_at(&self, pos: usize) -> usize {
        self.total() - self.pos() + pos
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.total())
    }
}

/// Parses wiki source held in memory.
pub fn parse_str(source: &str) -> Result<NodeList, ParseError> {
    Parser::new(source.as_bytes())?.parse()
}

/// Parses wiki source from a buffered stream.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<NodeList, ParseError> {
    Parser::new(reader)?.parse()
}

/// Parses a page and wraps it in a [`NodeKind::WikiPage`] spanning the whole source.
pub fn parse_page(page_path: impl Into<String>, source: &str) -> Result<Node, ParseError> {
    let page_path = page_path.into();
    let content = parse_str(source)?;
    debug!("parsed page {page_path}");
    Ok(Node::new(
        NodeKind::WikiPage {
            page_path: Some(page_path),
            content,
        },
        Span::new(0, source.len()),
    ))
}
