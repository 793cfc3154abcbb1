use super::{Node, NodeKind, visit};

/// Concatenates the `Text` leaves of a subtree.
///
/// Raw spans (`Nowiki`, `Code`, `Html`) are not part of the flattened text.
pub fn text_content(node: &Node) -> String {
    let mut text = String::new();
    visit(
        node,
        |kind| matches!(kind, NodeKind::Text { .. }),
        true,
        &mut |n| {
            if let NodeKind::Text { text: t } = &n.kind {
                text.push_str(t);
            }
        },
    );
    text
}

/// Reduces `text` to a string usable as an HTML id.
///
/// ASCII letters and `_` are always kept. Digits, `-`, `.` and `:` are kept
/// once a letter or `_` has been seen. Everything else is dropped.
pub fn anchor_id(text: &str) -> String {
    let mut seen_letter = false;
    text.chars()
        .filter(|&c| {
            if c.is_ascii_alphabetic() || c == '_' {
                seen_letter = true;
                true
            } else {
                seen_letter && (c.is_ascii_digit() || matches!(c, '-' | '.' | ':'))
            }
        })
        .collect()
}
