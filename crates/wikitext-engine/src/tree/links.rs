use std::collections::BTreeSet;

use super::{LinkTarget, Node, NodeKind, ParentIndex, visit};

/// Absolute paths of every page `root` refers to: page links, included
/// pages and declared parents, each resolved against its own page context.
///
/// Anchor links within the current page are not outgoing and are skipped,
/// as are references outside any page with a path.
pub fn outgoing_links(root: &Node) -> BTreeSet<String> {
    let index = ParentIndex::build(root);
    let mut links = BTreeSet::new();
    visit(
        root,
        |kind| {
            matches!(
                kind,
                NodeKind::Link {
                    target: LinkTarget::Page {
                        page_path: Some(_),
                        ..
                    },
                    ..
                } | NodeKind::IncludePage { .. }
                    | NodeKind::Parent { .. }
            )
        },
        true,
        &mut |node| {
            let page_path = match &node.kind {
                NodeKind::Link {
                    target: LinkTarget::Page { page_path, .. },
                    ..
                } => page_path.as_deref(),
                NodeKind::IncludePage { page_path } | NodeKind::Parent { page_path } => {
                    Some(page_path.as_str())
                }
                _ => None,
            };
            if let Some(resolved) = index.resolve(node, page_path, false) {
                links.insert(resolved);
            }
        },
    );
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_page;
    use pretty_assertions::assert_eq;

    #[test]
    fn collects_resolved_page_references() {
        let source = "{{parent:Index}}\n\
                      See [[Other]] and [[../Up#sec|up]], [[#local]].\n\
                      {{includepage:/Shared/Footer}}\n\
                      [[http://example.org]] [[wiki:newpage]]\n\
                      {|\n| [[Cell]]\n|}\n";
        let page = parse_page("/Docs/Guide", source).unwrap();
        let links: Vec<_> = outgoing_links(&page).into_iter().collect();
        assert_eq!(
            links,
            vec!["/Docs/Cell", "/Docs/Index", "/Docs/Other", "/Shared/Footer", "/Up"]
        );
    }

    #[test]
    fn page_without_path_has_no_links() {
        let list = crate::parsing::parse_str("[[Other]]").unwrap();
        let root = Node::new(
            NodeKind::WikiPage {
                page_path: None,
                content: list,
            },
            crate::parsing::Span::default(),
        );
        assert!(outgoing_links(&root).is_empty());
    }
}
