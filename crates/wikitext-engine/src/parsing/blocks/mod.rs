//! # Block Parsing
//!
//! Block constructs are recognised from the unconsumed remainder of the
//! current line. Classification lives in `signature`; `leaf` and `table`
//! hold the per-construct parsers.
//!
//! ## Modules
//!
//! - **`kinds`**: zero-sized types owning each construct's delimiters
//! - **`signature`**: `BlockSig::classify` dispatch and `starts_block`
//! - **`leaf`**: headings, tasks, list items, code, block tags, paragraphs
//! - **`table`**: tables, whose cells re-enter [`Parser::parse_block_list`]
//!
//! ## Key Invariants
//!
//! - Comments and blank lines are consumed without producing a node
//! - A block list inside a table cell ends at a line-leading `|`
//! - `starts_block` agrees with dispatch, so inline content never stops at a
//!   line that the block layer would treat as a paragraph continuation

pub mod kinds;
mod leaf;
pub mod signature;
mod table;

use std::io::BufRead;

use super::{ParseError, Parser};
use crate::tree::{Node, NodeList};

pub use signature::{BlockSig, starts_block};

impl<R: BufRead> Parser<R> {
    /// Parses blocks until end of input or the end of the enclosing cell.
    pub(crate) fn parse_block_list(&mut self) -> Result<NodeList, ParseError> {
        let start = self.total();
        let mut nodes = vec![];
        while let Some(node) = self.parse_block()? {
            nodes.push(node);
        }
        Ok(NodeList::new(nodes, self.span_from(start)))
    }

    fn parse_block(&mut self) -> Result<Option<Node>, ParseError> {
        loop {
            let Some(remainder) = self.cursor.remainder() else {
                return Ok(None);
            };
            let node = match BlockSig::classify(remainder, self.in_table()) {
                BlockSig::LineComment | BlockSig::Blank => {
                    self.next_line()?;
                    continue;
                }
                BlockSig::BlockComment => {
                    self.skip_block_comment()?;
                    continue;
                }
                BlockSig::CellBoundary => return Ok(None),
                BlockSig::Heading => self.parse_heading()?,
                BlockSig::Separator => self.parse_separator(),
                BlockSig::Task => self.parse_task(),
                BlockSig::UnorderedItem => self.parse_list_item(false)?,
                BlockSig::OrderedItem => self.parse_list_item(true)?,
                BlockSig::Code => self.parse_code()?,
                BlockSig::Table => self.parse_table()?,
                BlockSig::Anchor => self.parse_anchor(),
                BlockSig::TableOfContents => self.parse_table_of_contents(),
                BlockSig::Parent => self.parse_parent(),
                BlockSig::IncludePage => self.parse_include_page(),
                BlockSig::VerticalSpace => self.parse_vertical_space(),
                BlockSig::Paragraph => self.parse_paragraph()?,
            };
            return Ok(Some(node));
        }
    }
}
