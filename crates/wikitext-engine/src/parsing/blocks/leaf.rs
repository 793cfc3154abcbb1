use std::io::BufRead;

use super::kinds::{
    Anchor, Center, CodeBlock, Comment, Heading, IncludePage, ListMarker, Parent, TableOfContents,
    TaskMarker, VerticalSpace, markers::TAG_CLOSE,
};
use crate::parsing::{ParseError, Parser, inline::Terminator};
use crate::tree::{Node, NodeKind, TaskState};

impl<R: BufRead> Parser<R> {
    /// Skips a `/* … */` comment; the line holding `*/` is consumed whole.
    pub(super) fn skip_block_comment(&mut self) -> Result<(), ParseError> {
        let mut from = self.pos() + Comment::BLOCK_OPEN.len();
        while let Some(line) = self.cursor.line() {
            if line
                .get(from..)
                .is_some_and(|tail| tail.contains(Comment::BLOCK_CLOSE))
            {
                break;
            }
            self.next_line()?;
            from = 0;
        }
        self.next_line()
    }

    pub(super) fn parse_heading(&mut self) -> Result<Node, ParseError> {
        let start = self.total();
        let level = Heading::level(self.rest());
        self.skip(level);
        if self.at(" ") {
            self.skip(1);
        }
        let content = self.parse_inline_list(&[
            Terminator::literal(Heading::MARKER),
            Terminator::LineEnd,
        ])?;
        // trailing `=`s and anything after them
        self.finish_line();
        Ok(Node::new(
            NodeKind::Heading { level, content },
            self.span_from(start),
        ))
    }

    pub(super) fn parse_separator(&mut self) -> Node {
        let start = self.total();
        self.finish_line();
        Node::new(NodeKind::Separator, self.span_from(start))
    }

    pub(super) fn parse_task(&mut self) -> Node {
        let start = self.total();
        let (state, schedule, description) = {
            let remainder = self.rest();
            let state = TaskMarker::state(remainder).unwrap_or(TaskState::Open);
            let mut body = &remainder[TaskMarker::LEN..];
            let schedule = match body.split_once(TaskMarker::SCHEDULE_SEPARATOR) {
                Some((schedule, tail)) => {
                    body = tail;
                    Some(schedule.trim().to_string())
                }
                None => None,
            };
            let description = body.strip_prefix(' ').unwrap_or(body).to_string();
            (state, schedule, description)
        };
        self.finish_line();
        Node::new(
            NodeKind::Task {
                state,
                schedule,
                description,
            },
            self.span_from(start),
        )
    }

    pub(super) fn parse_list_item(&mut self, ordered: bool) -> Result<Node, ParseError> {
        let start = self.total();
        let marker = if ordered {
            ListMarker::ORDERED
        } else {
            ListMarker::UNORDERED
        };
        let level = ListMarker::level(self.rest(), marker).unwrap_or(1);
        self.skip(level);
        if self.at(" ") {
            self.skip(1);
        }
        let content = self.parse_inline_list(&[])?;
        Ok(Node::new(
            NodeKind::ListItem {
                level,
                ordered,
                content,
            },
            self.span_from(start),
        ))
    }

    /// Reads a fenced block verbatim up to a bare `@@` line or end of input.
    pub(super) fn parse_code(&mut self) -> Result<Node, ParseError> {
        let start = self.total();
        let language = CodeBlock::language(self.rest());
        self.next_line()?;

        let mut lines: Vec<String> = vec![];
        while let Some(remainder) = self.cursor.remainder() {
            if CodeBlock::is_fence(remainder) {
                self.next_line()?;
                break;
            }
            lines.push(remainder.to_string());
            self.next_line()?;
        }
        Ok(Node::new(
            NodeKind::Code {
                language,
                text: lines.join("\n"),
            },
            self.span_from(start),
        ))
    }

    pub(super) fn parse_anchor(&mut self) -> Node {
        let start = self.total();
        let name = self.parse_block_tag_value(Anchor::OPEN.len());
        Node::new(NodeKind::Anchor { name }, self.span_from(start))
    }

    pub(super) fn parse_table_of_contents(&mut self) -> Node {
        let start = self.total();
        self.skip(TableOfContents::TAG.len());
        Node::new(NodeKind::TableOfContents, self.span_from(start))
    }

    pub(super) fn parse_parent(&mut self) -> Node {
        let start = self.total();
        let page_path = self.parse_block_tag_value(Parent::OPEN.len());
        Node::new(NodeKind::Parent { page_path }, self.span_from(start))
    }

    pub(super) fn parse_include_page(&mut self) -> Node {
        let start = self.total();
        let page_path = self.parse_block_tag_value(IncludePage::OPEN.len());
        Node::new(NodeKind::IncludePage { page_path }, self.span_from(start))
    }

    pub(super) fn parse_vertical_space(&mut self) -> Node {
        let start = self.total();
        self.skip(VerticalSpace::TAG.len());
        Node::new(NodeKind::VerticalSpace, self.span_from(start))
    }

    /// Trimmed text between a `prefix_len`-byte opener and `}}`, or up to the
    /// line end when the brackets are missing. The rest of the line is left.
    fn parse_block_tag_value(&mut self, prefix_len: usize) -> String {
        let (value, consumed) = {
            let remainder = self.rest();
            let body = &remainder[prefix_len..];
            match body.find(TAG_CLOSE) {
                Some(end) => (
                    body[..end].trim().to_string(),
                    prefix_len + end + TAG_CLOSE.len(),
                ),
                None => (body.trim().to_string(), remainder.len()),
            }
        };
        self.skip(consumed);
        value
    }

    pub(super) fn parse_paragraph(&mut self) -> Result<Node, ParseError> {
        let start = self.total();
        let centered = self.at(Center::TAG);
        let indentation = if centered {
            self.skip(Center::TAG.len());
            0
        } else {
            let spaces = self.rest().bytes().take_while(|&b| b == b' ').count();
            self.skip(spaces);
            spaces
        };
        let content = self.parse_inline_list(&[Terminator::BlankLine])?;
        Ok(Node::new(
            NodeKind::Paragraph {
                centered,
                indentation,
                content,
            },
            self.span_from(start),
        ))
    }
}
