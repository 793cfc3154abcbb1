use std::collections::BTreeMap;

use crate::parsing::Span;

/// Options of a wiki tag or attributes of an XML tag, in key order.
pub type Options = BTreeMap<String, String>;

/// A parsed document node and the span of source text that produced it.
///
/// The span covers the node's own markup (`''`, `[[`, `{{…}}`) but never a
/// terminator owned by an enclosing construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

/// An ordered sequence of nodes sharing one enclosing span.
///
/// Used for page content, block content, inline content and table cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeList {
    pub nodes: Vec<Node>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    /// From the first cell marker to the end of the last cell or the `|-`.
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub header: bool,
    /// Parsed as a nested document, so cells may hold whole tables.
    pub content: NodeList,
    /// Starts at the `|` or `||` marker.
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Open,
    OpenImportant,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisKind {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Monospace,
    Small,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// A wiki page; without a page path the anchor refers to the current page.
    Page {
        page_path: Option<String>,
        anchor: Option<String>,
    },
    External {
        url: String,
    },
    LocalFile {
        path: String,
    },
    /// A built-in command such as `newpage`.
    Wiki {
        command: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeFormat {
    Date,
    Time,
    DateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNameFormat {
    PagePath,
    PageFolder,
    PageTitle,
}

/// Presentation shared by every list-generator tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFormat {
    pub name_format: PageNameFormat,
    pub show_inline: bool,
    pub separator: Option<String>,
    pub output_on_empty: Option<String>,
}

/// What a list-generator tag enumerates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSource {
    ViewHistory {
        max_length: Option<usize>,
    },
    EditHistory {
        max_length: Option<usize>,
    },
    Parents {
        page_path: Option<String>,
        global_context: bool,
    },
    Children {
        page_path: Option<String>,
        global_context: bool,
    },
    Pages {
        folder: Option<String>,
        global_context: bool,
    },
    WantedPages,
    UnlinkedPages {
        hide_parents: bool,
        hide_children: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A whole document; the context for relative page references.
    WikiPage {
        page_path: Option<String>,
        content: NodeList,
    },

    // Blocks
    Heading {
        level: usize,
        content: NodeList,
    },
    Separator,
    Task {
        state: TaskState,
        schedule: Option<String>,
        description: String,
    },
    ListItem {
        level: usize,
        ordered: bool,
        content: NodeList,
    },
    Code {
        language: Option<String>,
        text: String,
    },
    Table {
        params: Option<String>,
        rows: Vec<TableRow>,
    },
    Anchor {
        name: String,
    },
    TableOfContents,
    Parent {
        page_path: String,
    },
    IncludePage {
        page_path: String,
    },
    VerticalSpace,
    Paragraph {
        centered: bool,
        indentation: usize,
        content: NodeList,
    },

    // Inline
    Text {
        text: String,
    },
    Emphasis {
        kind: EmphasisKind,
        content: NodeList,
    },
    Nowiki {
        text: String,
    },
    LineBreak,
    Link {
        target: LinkTarget,
        alt_text: Option<NodeList>,
    },

    // Tags
    Image {
        url: String,
        options: Options,
    },
    Html {
        text: String,
    },
    Color {
        color: String,
        content: NodeList,
    },
    CssStyle {
        classes: Vec<String>,
        content: NodeList,
    },
    WikiVersion,
    DateTime {
        format: DateTimeFormat,
    },
    PageName {
        format: PageNameFormat,
        linked: bool,
        global_context: bool,
    },
    PageTimestamp {
        global_context: bool,
    },
    Listing {
        source: ListingSource,
        format: ListingFormat,
    },
    SearchInput,
    /// Fallback for unrecognised `{{name:value | options}}` tags.
    WikiTag {
        name: String,
        value: Option<String>,
        options: Options,
    },
    XmlTag {
        prefix: Option<String>,
        name: String,
        options: Options,
        content: NodeList,
    },
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Child lists in document order; table cells contribute one list each.
    pub fn child_lists(&self) -> Vec<&NodeList> {
        match &self.kind {
            NodeKind::WikiPage { content, .. }
            | NodeKind::Heading { content, .. }
            | NodeKind::ListItem { content, .. }
            | NodeKind::Paragraph { content, .. }
            | NodeKind::Emphasis { content, .. }
            | NodeKind::Color { content, .. }
            | NodeKind::CssStyle { content, .. }
            | NodeKind::XmlTag { content, .. } => vec![content],
            NodeKind::Link {
                alt_text: Some(alt),
                ..
            } => vec![alt],
            NodeKind::Table { rows, .. } => rows
                .iter()
                .flat_map(|row| row.cells.iter().map(|cell| &cell.content))
                .collect(),
            _ => vec![],
        }
    }

    /// Rebuilds this node with every child list replaced by `f(list)`.
    pub fn map_child_lists<F>(self, f: &mut F) -> Node
    where
        F: FnMut(NodeList) -> NodeList,
    {
        let Node { kind, span } = self;
        let kind = match kind {
            NodeKind::WikiPage { page_path, content } => NodeKind::WikiPage {
                page_path,
                content: f(content),
            },
            NodeKind::Heading { level, content } => NodeKind::Heading {
                level,
                content: f(content),
            },
            NodeKind::ListItem {
                level,
                ordered,
                content,
            } => NodeKind::ListItem {
                level,
                ordered,
                content: f(content),
            },
            NodeKind::Paragraph {
                centered,
                indentation,
                content,
            } => NodeKind::Paragraph {
                centered,
                indentation,
                content: f(content),
            },
            NodeKind::Emphasis { kind, content } => NodeKind::Emphasis {
                kind,
                content: f(content),
            },
            NodeKind::Color { color, content } => NodeKind::Color {
                color,
                content: f(content),
            },
            NodeKind::CssStyle { classes, content } => NodeKind::CssStyle {
                classes,
                content: f(content),
            },
            NodeKind::XmlTag {
                prefix,
                name,
                options,
                content,
            } => NodeKind::XmlTag {
                prefix,
                name,
                options,
                content: f(content),
            },
            NodeKind::Link { target, alt_text } => NodeKind::Link {
                target,
                alt_text: alt_text.map(&mut *f),
            },
            NodeKind::Table { params, rows } => {
                let mut mapped = Vec::with_capacity(rows.len());
                for row in rows {
                    let mut cells = Vec::with_capacity(row.cells.len());
                    for cell in row.cells {
                        let TableCell {
                            header,
                            content,
                            span,
                        } = cell;
                        cells.push(TableCell {
                            header,
                            content: f(content),
                            span,
                        });
                    }
                    mapped.push(TableRow {
                        cells,
                        span: row.span,
                    });
                }
                NodeKind::Table {
                    params,
                    rows: mapped,
                }
            }
            other => other,
        };
        Node { kind, span }
    }

    /// Short variant name, used by outlines and log records.
    pub fn name(&self) -> &'static str {
        match &self.kind {
            NodeKind::WikiPage { .. } => "WikiPage",
            NodeKind::Heading { .. } => "Heading",
            NodeKind::Separator => "Separator",
            NodeKind::Task { .. } => "Task",
            NodeKind::ListItem { .. } => "ListItem",
            NodeKind::Code { .. } => "Code",
            NodeKind::Table { .. } => "Table",
            NodeKind::Anchor { .. } => "Anchor",
            NodeKind::TableOfContents => "TableOfContents",
            NodeKind::Parent { .. } => "Parent",
            NodeKind::IncludePage { .. } => "IncludePage",
            NodeKind::VerticalSpace => "VerticalSpace",
            NodeKind::Paragraph { .. } => "Paragraph",
            NodeKind::Text { .. } => "Text",
            NodeKind::Emphasis { .. } => "Emphasis",
            NodeKind::Nowiki { .. } => "Nowiki",
            NodeKind::LineBreak => "LineBreak",
            NodeKind::Link { .. } => "Link",
            NodeKind::Image { .. } => "Image",
            NodeKind::Html { .. } => "Html",
            NodeKind::Color { .. } => "Color",
            NodeKind::CssStyle { .. } => "CssStyle",
            NodeKind::WikiVersion => "WikiVersion",
            NodeKind::DateTime { .. } => "DateTime",
            NodeKind::PageName { .. } => "PageName",
            NodeKind::PageTimestamp { .. } => "PageTimestamp",
            NodeKind::Listing { .. } => "Listing",
            NodeKind::SearchInput => "SearchInput",
            NodeKind::WikiTag { .. } => "WikiTag",
            NodeKind::XmlTag { .. } => "XmlTag",
        }
    }
}

impl NodeList {
    pub fn new(nodes: Vec<Node>, span: Span) -> Self {
        Self { nodes, span }
    }

    /// An empty list positioned at `at`.
    pub fn empty(at: usize) -> Self {
        Self::new(vec![], Span::new(at, at))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl TableRow {
    /// A row opened by a cell marker at byte `start`.
    pub fn new(start: usize) -> Self {
        Self {
            cells: vec![],
            span: Span::new(start, start),
        }
    }

    /// Appends a cell and stretches the row over it.
    pub fn push(&mut self, cell: TableCell) {
        self.span.end = self.span.end.max(cell.span.end);
        self.cells.push(cell);
    }
}
