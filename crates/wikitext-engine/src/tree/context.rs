use std::collections::HashMap;

use super::{Node, NodeKind};

/// Parent backlinks for an immutable tree, keyed by node address.
///
/// Built once from a root; every node reachable through child lists and
/// table cells gets exactly one entry. Lookups for nodes outside that tree
/// find no parent.
pub struct ParentIndex<'a> {
    parents: HashMap<*const Node, &'a Node>,
}

impl<'a> ParentIndex<'a> {
    pub fn build(root: &'a Node) -> Self {
        let mut parents = HashMap::new();
        let mut stack = vec![root];
        while let Some(parent) = stack.pop() {
            for list in parent.child_lists() {
                for child in list {
                    parents.insert(child as *const Node, parent);
                    stack.push(child);
                }
            }
        }
        Self { parents }
    }

    pub fn parent(&self, node: &Node) -> Option<&'a Node> {
        self.parents.get(&(node as *const Node)).copied()
    }

    /// `node` followed by its ancestors up to the root.
    pub fn ancestors(&self, node: &'a Node) -> impl Iterator<Item = &'a Node> + '_ {
        std::iter::successors(Some(node), |n| self.parent(n))
    }

    /// The page `node` belongs to: the nearest `WikiPage` at or above it, or
    /// with `global` the outermost one, which is the page that included the
    /// others.
    pub fn context_page(&self, node: &'a Node, global: bool) -> Option<&'a Node> {
        let mut pages = self
            .ancestors(node)
            .filter(|n| matches!(n.kind, NodeKind::WikiPage { .. }));
        if global { pages.last() } else { pages.next() }
    }

    /// Resolves `page_path` against the page `node` belongs to. `None` when
    /// there is no such page or it has no path.
    pub fn resolve(&self, node: &'a Node, page_path: Option<&str>, global: bool) -> Option<String> {
        match &self.context_page(node, global)?.kind {
            NodeKind::WikiPage {
                page_path: Some(context),
                ..
            } => Some(resolve_page_path(page_path, context)),
            _ => None,
        }
    }
}

/// Makes a page reference absolute relative to the folder of `context_path`.
///
/// Without a reference the context page itself is meant. Absolute paths are
/// kept as they are; relative ones are joined to the folder (everything up
/// to and including the last `/`) and `..` segments are collapsed.
pub fn resolve_page_path(page_path: Option<&str>, context_path: &str) -> String {
    let Some(page_path) = page_path else {
        return context_path.to_string();
    };
    if page_path.starts_with('/') {
        return page_path.to_string();
    }
    let folder = match context_path.rfind('/') {
        Some(i) => &context_path[..=i],
        None => "/",
    };
    let joined = if folder.starts_with('/') {
        format!("{folder}{page_path}")
    } else {
        format!("/{folder}{page_path}")
    };
    collapse_parent_segments(&joined)
}

/// Removes each `..` segment together with the segment before it.
fn collapse_parent_segments(path: &str) -> String {
    let (root, body) = match path.strip_prefix('/') {
        Some(body) => ("/", body),
        None => ("", path),
    };
    let mut segments: Vec<&str> = vec![];
    let mut ends_in_parent = false;
    for segment in body.split('/') {
        ends_in_parent = segment == "..";
        if ends_in_parent {
            segments.pop();
        } else {
            segments.push(segment);
        }
    }
    // `a/b/..` names the folder `a/`
    if ends_in_parent && !segments.is_empty() {
        segments.push("");
    }
    format!("{root}{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{Span, parse_page};
    use crate::tree::NodeList;
    use rstest::rstest;

    fn page(path: &str, nodes: Vec<Node>) -> Node {
        Node::new(
            NodeKind::WikiPage {
                page_path: Some(path.to_string()),
                content: NodeList::new(nodes, Span::default()),
            },
            Span::default(),
        )
    }

    fn page_path(node: Option<&Node>) -> Option<&str> {
        match &node?.kind {
            NodeKind::WikiPage { page_path, .. } => page_path.as_deref(),
            _ => None,
        }
    }

    fn first_text(root: &Node) -> &Node {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if matches!(node.kind, NodeKind::Text { .. }) {
                return node;
            }
            for list in node.child_lists() {
                stack.extend(list.iter());
            }
        }
        panic!("no text node");
    }

    #[test]
    fn parent_chain_reaches_root() {
        let root = parse_page("/a/page", "''bold''").unwrap();
        let index = ParentIndex::build(&root);
        let text = first_text(&root);
        let names: Vec<_> = index.ancestors(text).map(Node::name).collect();
        assert_eq!(names, vec!["Text", "Emphasis", "Paragraph", "WikiPage"]);
        assert!(index.parent(&root).is_none());
    }

    #[test]
    fn local_and_global_context() {
        let text = Node::new(
            NodeKind::Text {
                text: "content".into(),
            },
            Span::default(),
        );
        let root = page("/global", vec![page("/local", vec![text])]);
        let index = ParentIndex::build(&root);
        let text = first_text(&root);

        assert_eq!(page_path(index.context_page(text, false)), Some("/local"));
        assert_eq!(page_path(index.context_page(text, true)), Some("/global"));
        assert_eq!(page_path(index.context_page(&root, false)), Some("/global"));
        assert_eq!(
            index.resolve(text, Some("sibling"), false),
            Some("/sibling".to_string())
        );
    }

    #[test]
    fn node_without_page_has_no_context() {
        let text = Node::new(NodeKind::Text { text: "a".into() }, Span::default());
        let index = ParentIndex::build(&text);
        assert!(index.context_page(&text, false).is_none());
    }

    #[rstest]
    #[case(None, "/path/wikipage", "/path/wikipage")]
    #[case(Some("/a"), "/path/wikipage", "/a")]
    #[case(Some("a/b"), "/path/wikipage", "/path/a/b")]
    #[case(Some("../up"), "/path/sub/page", "/path/up")]
    #[case(Some("../../x"), "/a/b/c", "/x")]
    #[case(Some("x"), "noslash", "/x")]
    #[case(Some(""), "/base/page", "/base/")]
    #[case(Some(".."), "/a/b/page", "/a/")]
    fn page_paths(#[case] path: Option<&str>, #[case] context: &str, #[case] expected: &str) {
        assert_eq!(resolve_page_path(path, context), expected);
    }

    #[rstest]
    #[case("a/b/../c/d", "a/c/d")]
    #[case("a/b/../../c/d", "c/d")]
    #[case("a/b/../c/../d", "a/d")]
    #[case("../a/b", "a/b")]
    #[case("/../abc", "/abc")]
    #[case("a/../../b/c", "b/c")]
    #[case("a/..", "")]
    #[case("..", "")]
    #[case("a..b/c", "a..b/c")]
    fn parent_segments(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(collapse_parent_segments(path), expected);
    }
}
