//! Option words of `{{tag | key=value}}` and `<tag key="value">`.

use std::io::BufRead;

use super::kinds::WikiTagMarker;
use crate::parsing::Parser;
use crate::tree::Options;

/// Characters that end an unquoted word.
const WORD_END: &[char] = &[' ', '=', '|', '/', '>', ']', '}'];

const QUOTE: char = '"';

/// Splits a word off the start of `s`, returning it with the number of bytes
/// consumed, surrounding spaces included.
///
/// A quoted word keeps its inner spaces and reads `""` as one quote; if the
/// closing quote is missing it runs to the end of `s`.
fn split_word(s: &str) -> (String, usize) {
    let leading = s.len() - s.trim_start_matches(' ').len();
    let body = &s[leading..];

    let (word, mut consumed) = if let Some(quoted) = body.strip_prefix(QUOTE) {
        let mut word = String::new();
        let mut chars = quoted.char_indices().peekable();
        let mut end = quoted.len();
        while let Some((i, c)) = chars.next() {
            if c == QUOTE && chars.next_if(|&(_, next)| next == QUOTE).is_none() {
                end = i + QUOTE.len_utf8();
                break;
            }
            word.push(c);
        }
        (word, leading + QUOTE.len_utf8() + end)
    } else {
        let end = body.find(WORD_END).unwrap_or(body.len());
        (body[..end].trim().to_string(), leading + end)
    };

    consumed += s[consumed..].len() - s[consumed..].trim_start_matches(' ').len();
    (word, consumed)
}

impl<R: BufRead> Parser<R> {
    fn parse_word(&mut self) -> String {
        let (word, consumed) = split_word(self.rest());
        self.skip(consumed);
        word
    }

    /// Reads one `name[=value]` pair into `options`; returns false once no
    /// further name follows. A bare name maps to `""`.
    ///
    /// Wiki tag options must each be introduced by `|` with nothing but
    /// blanks before it.
    pub(super) fn parse_tag_option(&mut self, options: &mut Options, wiki_tag: bool) -> bool {
        if self.cursor.line().is_none() {
            return false;
        }
        if wiki_tag {
            let Some(pipe) = self.rest().find(WikiTagMarker::OPTION_SEPARATOR) else {
                return false;
            };
            if !self.rest()[..pipe].trim().is_empty() {
                return false;
            }
            self.skip(pipe + 1);
        }

        let name = self.parse_word();
        let value = if self.at("=") {
            self.skip(1);
            self.parse_word()
        } else {
            String::new()
        };
        if name.is_empty() {
            return false;
        }
        options.insert(name, value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("name=x", "name", 4)]
    #[case("  spaced  =x", "spaced", 10)]
    #[case("\"two words\" rest", "two words", 12)]
    #[case("\"say \"\"hi\"\"\"}}", "say \"hi\"", 12)]
    #[case("\"open ended", "open ended", 11)]
    #[case("path/to", "path", 4)]
    #[case("", "", 0)]
    fn words(#[case] input: &str, #[case] word: &str, #[case] consumed: usize) {
        assert_eq!(split_word(input), (word.to_string(), consumed));
    }
}
