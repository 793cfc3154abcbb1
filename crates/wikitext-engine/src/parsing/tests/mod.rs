//! Parser tests over whole sources.
//!
//! Every parse goes through [`invariants::check`], so each case also proves
//! that spans stay in bounds, nested and ordered.

mod invariants;

use std::io::{self, BufReader, Read};

use pretty_assertions::assert_eq;

use crate::parsing::{ParseError, Span, parse_reader, parse_str};
use crate::tree::{Node, NodeKind, NodeList, text_content};

/// Parses `source` and checks span invariants.
fn parse(source: &str) -> NodeList {
    let list = parse_str(source).unwrap();
    invariants::check(source, &list);
    list
}

/// The single top-level node of `source`.
fn parse_one(source: &str) -> Node {
    let mut list = parse(source);
    assert_eq!(list.len(), 1, "expected one node in {:?}", list.nodes);
    list.nodes.remove(0)
}

/// Inline content of a source holding one paragraph.
fn parse_inline(source: &str) -> NodeList {
    match parse_one(source).kind {
        NodeKind::Paragraph { content, .. } => content,
        other => panic!("expected a paragraph, got {other:?}"),
    }
}

fn list_text(list: &NodeList) -> String {
    list.iter().map(text_content).collect()
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk on fire"))
    }
}

#[test]
fn empty_source_has_no_nodes() {
    let list = parse("");
    assert!(list.is_empty());
    assert_eq!(list.span, Span::new(0, 0));
}

#[test]
fn blank_lines_and_comments_produce_nothing() {
    assert!(parse("\n\n\n").is_empty());
    assert!(parse("// only a comment\n").is_empty());
    assert!(parse("/* spans\nseveral\nlines */\n").is_empty());
}

#[test]
fn page_list_covers_whole_source() {
    let source = "= Title\n\ntext\n";
    let list = parse(source);
    assert_eq!(list.span, Span::new(0, source.len()));
}

/// Block spans of a mixed page slice back to the text that produced them.
#[test]
fn block_spans_reproduce_source() {
    let source = "= Title\n* one\n* two\n----\n@@\ncode\n@@\n{{toc}}\n";
    let list = parse(source);
    let slices: Vec<&str> = list.iter().map(|n| &source[n.span.range()]).collect();
    assert_eq!(
        slices,
        vec!["= Title", "* one\n", "* two\n", "----", "@@\ncode\n@@\n", "{{toc}}"]
    );
}

#[test]
fn crlf_line_endings_count_both_bytes() {
    let source = "= a\r\nb\r\n";
    let list = parse(source);
    assert_eq!(list.nodes[0].span, Span::new(0, 3));
    assert_eq!(list.nodes[1].span.start, 5);
    assert_eq!(text_content(&list.nodes[1]), "b");
}

#[test]
fn multibyte_text_keeps_byte_offsets() {
    let source = "Grüße [[Zürich]]";
    let content = parse_inline(source);
    assert_eq!(content.nodes[0].span, Span::new(0, 8));
    assert_eq!(&source[content.nodes[1].span.range()], "[[Zürich]]");
}

#[test]
fn parse_reader_matches_parse_str() {
    let source = "= a\nsome ''bold'' text\n";
    let from_reader = parse_reader(BufReader::new(source.as_bytes())).unwrap();
    assert_eq!(from_reader, parse(source));
}

#[test]
fn read_failure_is_reported() {
    let result = parse_reader(BufReader::new(FailingReader));
    assert!(matches!(result, Err(ParseError::Read(_))));
}

#[test]
fn read_failure_after_some_lines_is_reported() {
    let reader = BufReader::new("= a\nb\n".as_bytes().chain(FailingReader));
    assert!(parse_reader(reader).is_err());
}

#[test]
fn byte_slices_are_readers_too() {
    let list = parse_reader(&b"plain text"[..]).unwrap();
    assert_eq!(list_text(&list), "plain text");
}
