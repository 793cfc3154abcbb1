pub struct Heading;

impl Heading {
    pub const MARKER: &'static str = "=";

    /// Heading level: the length of the leading `=` run.
    pub fn level(remainder: &str) -> usize {
        remainder.bytes().take_while(|&b| b == b'=').count()
    }
}
