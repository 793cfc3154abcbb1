//! Single-line block tags and markers.

pub struct Separator;

impl Separator {
    pub const MARKER: &'static str = "----";
}

pub struct Anchor;

impl Anchor {
    pub const OPEN: &'static str = "{{#";
}

pub struct TableOfContents;

impl TableOfContents {
    pub const TAG: &'static str = "{{toc}}";
}

pub struct Parent;

impl Parent {
    pub const OPEN: &'static str = "{{parent:";
}

pub struct IncludePage;

impl IncludePage {
    pub const OPEN: &'static str = "{{includepage:";
}

pub struct VerticalSpace;

impl VerticalSpace {
    pub const TAG: &'static str = "{{vspace}}";
}

/// Paragraph prefix; consumed by the paragraph rather than forming a block.
pub struct Center;

impl Center {
    pub const TAG: &'static str = "{{center}}";
}

/// Page title tag; inline, but a paragraph ends before it.
pub struct Title;

impl Title {
    pub const TAG: &'static str = "{{title}}";
}

/// Closing brackets shared by the block tags.
pub const TAG_CLOSE: &str = "}}";
