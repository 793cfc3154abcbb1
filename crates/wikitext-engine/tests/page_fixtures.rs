use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use wikitext_engine::{
    Node, NodeKind, PageBuffer, TaskState, load_page, outgoing_links, parse_page, parse_str,
    section_range, text_content, visit,
};

const PAGE_PATH: &str = "/Docs/Home";

fn fixture(name: &str) -> String {
    fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.txt",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn top_level(page: &Node) -> &[Node] {
    match &page.kind {
        NodeKind::WikiPage { content, .. } => &content.nodes,
        _ => panic!("expected a page, got {}", page.name()),
    }
}

#[test]
fn fixture_block_sequence() {
    let page = parse_page(PAGE_PATH, &fixture("project_notes")).unwrap();
    let names: Vec<&str> = top_level(&page).iter().map(Node::name).collect();
    assert_eq!(
        names,
        vec![
            "Parent",
            "Heading",
            "TableOfContents",
            "Paragraph",
            "Heading",
            "Task",
            "Task",
            "Heading",
            "ListItem",
            "ListItem",
            "ListItem",
            "Table",
            "Code",
            "Separator",
            "Paragraph",
        ]
    );
}

/// Each top-level span, cut out and parsed alone, yields the same construct.
#[test]
fn fixture_block_spans_reparse_in_isolation() {
    let source = fixture("project_notes");
    let page = parse_page(PAGE_PATH, &source).unwrap();
    for node in top_level(&page) {
        let slice = &source[node.span.range()];
        let reparsed = parse_str(slice).unwrap();
        assert_eq!(reparsed.len(), 1, "{slice:?} did not reparse to one block");
        assert_eq!(reparsed.nodes[0].name(), node.name(), "for {slice:?}");
    }
}

#[test]
fn fixture_text_leaves_come_from_their_spans() {
    let source = fixture("project_notes");
    let page = parse_page(PAGE_PATH, &source).unwrap();
    let mut count = 0;
    visit(
        &page,
        |kind| matches!(kind, NodeKind::Text { .. }),
        true,
        &mut |node| {
            if let NodeKind::Text { text } = &node.kind {
                assert!(source[node.span.range()].contains(text.as_str()));
                count += 1;
            }
        },
    );
    assert!(count > 10);
}

#[test]
fn fixture_outgoing_links_are_absolute() {
    let page = parse_page(PAGE_PATH, &fixture("project_notes")).unwrap();
    let links: Vec<String> = outgoing_links(&page).into_iter().collect();
    assert_eq!(
        links,
        vec!["/Docs/Cell", "/Docs/Index", "/Docs/Other", "/Shared/Footer"]
    );
}

#[test]
fn fixture_section_edit_round_trip() {
    let source = fixture("project_notes");
    let list = parse_str(&source).unwrap();
    let range = section_range(&list, 4).unwrap();
    assert!(source[range.clone()].starts_with("== Tasks\n"));

    let mut buffer = PageBuffer::new(&source);
    buffer
        .replace_section(range, "== Tasks\n[x] 2026-11-01 | write the report\n\n")
        .unwrap();
    let list = buffer.reparse().unwrap();

    let NodeKind::Task {
        state, description, ..
    } = &list.nodes[5].kind
    else {
        panic!("expected a task, got {}", list.nodes[5].name());
    };
    assert_eq!(*state, TaskState::Closed);
    assert_eq!(description, "write the report");
    assert_eq!(text_content(&list.nodes[6]), "Lists");
}

#[test]
fn load_page_matches_parse_page() {
    let source = fixture("project_notes");
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("Docs")).unwrap();
    fs::write(root.path().join("Docs/Home.txt"), &source).unwrap();

    let loaded = load_page(root.path(), PAGE_PATH, 1 << 20).unwrap();
    assert_eq!(loaded, parse_page(PAGE_PATH, &source).unwrap());
}
