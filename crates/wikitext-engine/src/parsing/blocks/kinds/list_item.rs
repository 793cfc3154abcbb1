/// List item markers: a run of `*` (unordered) or `#` (ordered) followed by a space.
pub struct ListMarker;

impl ListMarker {
    pub const UNORDERED: u8 = b'*';
    pub const ORDERED: u8 = b'#';

    /// Nesting level if `remainder` opens a list item with `marker`.
    pub fn level(remainder: &str, marker: u8) -> Option<usize> {
        let run = remainder.bytes().take_while(|&b| b == marker).count();
        (run > 0 && remainder.as_bytes().get(run) == Some(&b' ')).then_some(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("* item", Some(1))]
    #[case("*** deep", Some(3))]
    #[case("*", None)]
    #[case("**bold", None)]
    #[case("*#* mixed", None)]
    #[case(" * indented", None)]
    fn unordered_levels(#[case] remainder: &str, #[case] expected: Option<usize>) {
        assert_eq!(ListMarker::level(remainder, ListMarker::UNORDERED), expected);
    }

    #[test]
    fn ordered_marker_needs_space() {
        assert_eq!(ListMarker::level("## two", ListMarker::ORDERED), Some(2));
        assert_eq!(ListMarker::level("##italic##", ListMarker::ORDERED), None);
    }
}
