//! # Section Editing
//!
//! Pages are edited by splicing replacement text over the span of a parsed
//! construct, typically a heading's section. The text lives in an
//! `xi_rope::Rope`; splices are applied as deltas and the page is reparsed
//! afterwards, so spans never go stale.

use std::ops::Range;

use log::debug;
use xi_rope::{Rope, delta::Builder};

use crate::parsing::{ParseError, parse_str};
use crate::tree::{NodeKind, NodeList};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditError {
    #[error("Invalid range {start}..{end} for page of {len} bytes")]
    InvalidRange { start: usize, end: usize, len: usize },
}

/// Byte range of the section opened by the heading at `heading_index`.
///
/// The section runs from the heading to the next heading of the same or a
/// higher level (a lower or equal level number), or to the end of the list.
/// `None` if the node at that index is not a heading.
pub fn section_range(list: &NodeList, heading_index: usize) -> Option<Range<usize>> {
    let heading = list.nodes.get(heading_index)?;
    let NodeKind::Heading { level, .. } = heading.kind else {
        return None;
    };
    let end = list.nodes[heading_index + 1..]
        .iter()
        .find(|node| matches!(node.kind, NodeKind::Heading { level: next, .. } if next <= level))
        .map_or(list.span.end, |node| node.span.start);
    Some(heading.span.start..end)
}

/// Page text held in a rope for span-based splicing.
#[derive(Clone)]
pub struct PageBuffer {
    rope: Rope,
}

impl PageBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from(text),
        }
    }

    pub fn len(&self) -> usize {
        self.rope.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len() == 0
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn read_section(&self, range: Range<usize>) -> Result<String, EditError> {
        self.check(&range)?;
        Ok(self.rope.slice_to_cow(range).into_owned())
    }

    /// Replaces `range` with `new_text`.
    pub fn replace_section(&mut self, range: Range<usize>, new_text: &str) -> Result<(), EditError> {
        self.check(&range)?;
        debug!(
            "replacing {}..{} ({} bytes) with {} bytes",
            range.start,
            range.end,
            range.len(),
            new_text.len()
        );
        let mut builder = Builder::new(self.rope.len());
        builder.replace(range, Rope::from(new_text));
        self.rope = builder.build().apply(&self.rope);
        Ok(())
    }

    pub fn reparse(&self) -> Result<NodeList, ParseError> {
        parse_str(&self.text())
    }

    /// Both ends must lie within the text, in order, on char boundaries.
    fn check(&self, range: &Range<usize>) -> Result<(), EditError> {
        let len = self.rope.len();
        let invalid = EditError::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        };
        if range.start > range.end || range.end > len {
            return Err(invalid);
        }
        if !self.rope.is_codepoint_boundary(range.start)
            || !self.rope.is_codepoint_boundary(range.end)
        {
            return Err(invalid);
        }
        Ok(())
    }
}
