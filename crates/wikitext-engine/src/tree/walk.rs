use super::{Node, NodeKind, NodeList};

/// Calls `f` for every node in `node`'s subtree whose kind satisfies
/// `matches`, in document order, starting with `node` itself.
///
/// With `recurse == false` the children of a matching node are skipped.
/// Table cells are visited row by row.
pub fn visit<'a, P, F>(node: &'a Node, matches: P, recurse: bool, f: &mut F)
where
    P: Fn(&NodeKind) -> bool + Copy,
    F: FnMut(&'a Node),
{
    if matches(&node.kind) {
        f(node);
        if !recurse {
            return;
        }
    }
    for list in node.child_lists() {
        for child in list {
            visit(child, matches, recurse, f);
        }
    }
}

/// Rebuilds a tree top-down.
///
/// `f` sees every node in pre-order and may replace it; returning `None`
/// drops the node with its subtree. The children of whatever `f` returns
/// are transformed next, so a replacement's own children are visited too.
pub fn transform<F>(node: Node, f: &mut F) -> Option<Node>
where
    F: FnMut(Node) -> Option<Node>,
{
    let node = f(node)?;
    Some(node.map_child_lists(&mut |list| transform_list(list, f)))
}

/// Like [`transform`], but only nodes whose kind satisfies `matches` are
/// handed to `f`; the rest are kept and descended into.
pub fn transform_matching<P, F>(node: Node, matches: P, f: &mut F) -> Option<Node>
where
    P: Fn(&NodeKind) -> bool,
    F: FnMut(Node) -> Option<Node>,
{
    transform(node, &mut |node: Node| {
        if matches(&node.kind) {
            f(node)
        } else {
            Some(node)
        }
    })
}

fn transform_list<F>(list: NodeList, f: &mut F) -> NodeList
where
    F: FnMut(Node) -> Option<Node>,
{
    let NodeList { nodes, span } = list;
    let nodes = nodes
        .into_iter()
        .filter_map(|node| transform(node, f))
        .collect();
    NodeList { nodes, span }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_page;
    use pretty_assertions::assert_eq;

    fn is_text(kind: &NodeKind) -> bool {
        matches!(kind, NodeKind::Text { .. })
    }

    fn texts(node: &Node) -> Vec<String> {
        let mut out = vec![];
        visit(node, is_text, true, &mut |n| {
            if let NodeKind::Text { text } = &n.kind {
                out.push(text.clone());
            }
        });
        out
    }

    #[test]
    fn visit_reaches_table_cells_in_order() {
        let page = parse_page("/p", "{|\n| a | b\n|-\n| c\n|}\n").unwrap();
        assert_eq!(texts(&page), vec!["a ", "b", "c"]);
    }

    #[test]
    fn visit_without_recursion_stops_at_matches() {
        let page = parse_page("/p", "''outer ##inner## rest''").unwrap();
        let mut seen = vec![];
        visit(
            &page,
            |k| matches!(k, NodeKind::Emphasis { .. }),
            false,
            &mut |n| seen.push(n.span),
        );
        assert_eq!(seen.len(), 1);

        let mut all = 0;
        visit(
            &page,
            |k| matches!(k, NodeKind::Emphasis { .. }),
            true,
            &mut |_| all += 1,
        );
        assert_eq!(all, 2);
    }

    #[test]
    fn transform_deletes_and_replaces() {
        let page = parse_page("/p", "keep ''drop'' [[Link]]").unwrap();
        let out = transform(page, &mut |node| match node.kind {
            NodeKind::Emphasis { .. } => None,
            NodeKind::Link { .. } => Some(Node::new(
                NodeKind::Text {
                    text: "link".into(),
                },
                node.span,
            )),
            _ => Some(node),
        })
        .unwrap();
        assert_eq!(texts(&out), vec!["keep ", " ", "link"]);
    }

    #[test]
    fn transform_visits_children_of_replacements() {
        let page = parse_page("/p", "''a''").unwrap();
        let mut calls = vec![];
        transform(page, &mut |node| {
            calls.push(node.name());
            Some(node)
        });
        assert_eq!(calls, vec!["WikiPage", "Paragraph", "Emphasis", "Text"]);
    }

    #[test]
    fn transform_matching_leaves_other_kinds_alone() {
        let page = parse_page("/p", "a ''b''").unwrap();
        let out = transform_matching(page, is_text, &mut |node| {
            let NodeKind::Text { text } = node.kind else {
                return Some(node);
            };
            Some(Node::new(
                NodeKind::Text {
                    text: text.to_uppercase(),
                },
                node.span,
            ))
        })
        .unwrap();
        assert_eq!(texts(&out), vec!["A ", "B"]);
    }
}
