use crate::parsing::Span;
use crate::tree::{Node, NodeKind, NodeList};

/// Validates span invariants of a parsed block list against its source.
///
/// Asserts that:
/// - Every span lies within the source, in order, on char boundaries
/// - Nodes lie within their enclosing list, row or cell
/// - Siblings never overlap and appear in source order
/// - Text leaves are found verbatim in the text their span covers
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, list: &NodeList) {
    check_span(source, list.span, "page list");
    check_list(source, list);
}

fn check_span(source: &str, span: Span, what: &str) {
    assert!(
        span.start <= span.end && span.end <= source.len(),
        "{what} span out of bounds: {span:?} (source len: {})",
        source.len()
    );
    assert!(
        source.is_char_boundary(span.start) && source.is_char_boundary(span.end),
        "{what} span splits a character: {span:?}"
    );
}

fn check_list(source: &str, list: &NodeList) {
    let mut previous_end = list.span.start;
    for node in &list.nodes {
        check_span(source, node.span, node.name());
        assert!(
            list.span.contains(node.span),
            "{} {:?} not contained in list {:?}",
            node.name(),
            node.span,
            list.span
        );
        assert!(
            node.span.start >= previous_end,
            "{} {:?} overlaps previous sibling ending at {previous_end}",
            node.name(),
            node.span
        );
        previous_end = node.span.end;
        check_node(source, node);
    }
}

fn check_node(source: &str, node: &Node) {
    match &node.kind {
        NodeKind::Text { text } => {
            let covered = &source[node.span.range()];
            assert!(
                covered.contains(text.as_str()),
                "text {text:?} not found in its span {:?} ({covered:?})",
                node.span
            );
        }
        NodeKind::Table { rows, .. } => {
            let mut previous_end = node.span.start;
            for row in rows {
                check_span(source, row.span, "row");
                assert!(
                    node.span.contains(row.span),
                    "row {:?} not contained in table {:?}",
                    row.span,
                    node.span
                );
                assert!(row.span.start >= previous_end, "rows overlap at {:?}", row.span);
                previous_end = row.span.end;
                for cell in &row.cells {
                    check_span(source, cell.span, "cell");
                    assert!(
                        row.span.contains(cell.span),
                        "cell {:?} not contained in row {:?}",
                        cell.span,
                        row.span
                    );
                    assert!(
                        cell.span.contains(cell.content.span),
                        "cell content {:?} not contained in cell {:?}",
                        cell.content.span,
                        cell.span
                    );
                }
            }
        }
        _ => {}
    }
    for list in node.child_lists() {
        check_span(source, list.span, "child list");
        assert!(
            node.span.contains(list.span),
            "child list {:?} of {} not contained in {:?}",
            list.span,
            node.name(),
            node.span
        );
        check_list(source, list);
    }
}
