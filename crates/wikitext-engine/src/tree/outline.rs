use std::fmt::Write;

use super::{LinkTarget, Node, NodeKind, NodeList};

/// Renders a tree as one line per node, indented by depth, with spans and
/// the few fields that identify each node.
pub fn outline(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let _ = write!(
        out,
        "{:indent$}{} {}..{}",
        "",
        node.name(),
        node.span.start,
        node.span.end,
        indent = depth * 2
    );
    if let Some(detail) = detail(&node.kind) {
        let _ = write!(out, " {detail}");
    }
    out.push('\n');

    match &node.kind {
        NodeKind::Table { rows, .. } => {
            for row in rows {
                let _ = writeln!(
                    out,
                    "{:indent$}Row {}..{}",
                    "",
                    row.span.start,
                    row.span.end,
                    indent = (depth + 1) * 2
                );
                for cell in &row.cells {
                    let _ = writeln!(
                        out,
                        "{:indent$}{} {}..{}",
                        "",
                        if cell.header { "HeaderCell" } else { "Cell" },
                        cell.span.start,
                        cell.span.end,
                        indent = (depth + 2) * 2
                    );
                    write_list(out, &cell.content, depth + 3);
                }
            }
        }
        _ => {
            for list in node.child_lists() {
                write_list(out, list, depth + 1);
            }
        }
    }
}

fn write_list(out: &mut String, list: &NodeList, depth: usize) {
    for node in list {
        write_node(out, node, depth);
    }
}

fn detail(kind: &NodeKind) -> Option<String> {
    Some(match kind {
        NodeKind::WikiPage {
            page_path: Some(path),
            ..
        } => format!("{path:?}"),
        NodeKind::Heading { level, .. } => format!("level={level}"),
        NodeKind::ListItem { level, ordered, .. } => {
            format!("level={level}{}", if *ordered { " ordered" } else { "" })
        }
        NodeKind::Task {
            state, description, ..
        } => format!("{state:?} {description:?}"),
        NodeKind::Code { language, text } => match language {
            Some(language) => format!("{language} {text:?}"),
            None => format!("{text:?}"),
        },
        NodeKind::Table {
            params: Some(params),
            ..
        } => format!("{params:?}"),
        NodeKind::Anchor { name } => format!("{name:?}"),
        NodeKind::Parent { page_path } | NodeKind::IncludePage { page_path } => {
            format!("{page_path:?}")
        }
        NodeKind::Paragraph {
            centered: true, ..
        } => "centered".to_string(),
        NodeKind::Paragraph { indentation, .. } if *indentation > 0 => {
            format!("indent={indentation}")
        }
        NodeKind::Text { text } | NodeKind::Nowiki { text } | NodeKind::Html { text } => {
            format!("{text:?}")
        }
        NodeKind::Emphasis { kind, .. } => format!("{kind:?}"),
        NodeKind::Link { target, .. } => match target {
            LinkTarget::Page { page_path, anchor } => format!(
                "page={:?}{}",
                page_path.as_deref().unwrap_or(""),
                anchor
                    .as_deref()
                    .map(|a| format!(" #{a}"))
                    .unwrap_or_default()
            ),
            LinkTarget::External { url } => format!("url={url:?}"),
            LinkTarget::LocalFile { path } => format!("file={path:?}"),
            LinkTarget::Wiki { command } => format!("wiki={command:?}"),
        },
        NodeKind::Image { url, .. } => format!("{url:?}"),
        NodeKind::Color { color, .. } => format!("{color:?}"),
        NodeKind::CssStyle { classes, .. } => format!("{classes:?}"),
        NodeKind::WikiTag { name, value, .. } => match value {
            Some(value) => format!("{name}:{value}"),
            None => name.clone(),
        },
        NodeKind::XmlTag { prefix, name, .. } => match prefix {
            Some(prefix) => format!("<{prefix}:{name}>"),
            None => format!("<{name}>"),
        },
        _ => return None,
    })
}
