use super::kinds::{
    Anchor, Center, CodeBlock, Comment, Heading, IncludePage, ListMarker, Parent, Separator,
    TableMarker, TableOfContents, TaskMarker, Title, VerticalSpace,
};

/// What the unconsumed remainder of a line opens, in dispatch precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSig {
    LineComment,
    BlockComment,
    Blank,
    Heading,
    Separator,
    Task,
    UnorderedItem,
    OrderedItem,
    Code,
    Table,
    Anchor,
    TableOfContents,
    Parent,
    IncludePage,
    VerticalSpace,
    /// A `|` inside an open table ends the enclosing cell content.
    CellBoundary,
    Paragraph,
}

impl BlockSig {
    /// Classifies `remainder`; first match wins.
    pub fn classify(remainder: &str, in_table: bool) -> Self {
        let r = remainder;
        if r.starts_with(Comment::LINE) {
            BlockSig::LineComment
        } else if r.starts_with(Comment::BLOCK_OPEN) {
            BlockSig::BlockComment
        } else if r.is_empty() {
            BlockSig::Blank
        } else if r.starts_with(Heading::MARKER) {
            BlockSig::Heading
        } else if r.starts_with(Separator::MARKER) {
            BlockSig::Separator
        } else if TaskMarker::state(r).is_some() {
            BlockSig::Task
        } else if ListMarker::level(r, ListMarker::UNORDERED).is_some() {
            BlockSig::UnorderedItem
        } else if ListMarker::level(r, ListMarker::ORDERED).is_some() {
            BlockSig::OrderedItem
        } else if CodeBlock::opens(r) {
            BlockSig::Code
        } else if r.starts_with(TableMarker::OPEN) {
            BlockSig::Table
        } else if r.starts_with(Anchor::OPEN) {
            BlockSig::Anchor
        } else if r.starts_with(TableOfContents::TAG) {
            BlockSig::TableOfContents
        } else if r.starts_with(Parent::OPEN) {
            BlockSig::Parent
        } else if r.starts_with(IncludePage::OPEN) {
            BlockSig::IncludePage
        } else if r.starts_with(VerticalSpace::TAG) {
            BlockSig::VerticalSpace
        } else if in_table && r.starts_with(TableMarker::CELL) {
            BlockSig::CellBoundary
        } else {
            BlockSig::Paragraph
        }
    }
}

/// True if a line starting with `remainder` begins a new block.
///
/// Inline content stops at such a line instead of continuing across the
/// line break. `{{center}}` counts because it opens a paragraph, and
/// `{{title}}` because a page title always starts its own paragraph.
pub fn starts_block(remainder: &str) -> bool {
    match BlockSig::classify(remainder, false) {
        BlockSig::Paragraph => {
            remainder.starts_with(Center::TAG) || remainder.starts_with(Title::TAG)
        }
        _ => true,
    }
}
