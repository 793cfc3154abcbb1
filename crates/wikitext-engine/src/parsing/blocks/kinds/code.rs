/// Fenced code blocks: `@@` or `@@|language` alone on a line, closed by `@@`.
pub struct CodeBlock;

impl CodeBlock {
    pub const FENCE: &'static str = "@@";
    pub const LANGUAGE_FENCE: &'static str = "@@|";

    /// True for a bare fence line, which both opens and closes a block.
    pub fn is_fence(remainder: &str) -> bool {
        remainder
            .strip_prefix(Self::FENCE)
            .is_some_and(|tail| tail.trim().is_empty())
    }

    /// `@@|lang` opens only if no further `@@` follows, otherwise the line is
    /// inline monospace.
    pub fn opens(remainder: &str) -> bool {
        Self::is_fence(remainder)
            || remainder
                .strip_prefix(Self::LANGUAGE_FENCE)
                .is_some_and(|tail| !tail.contains(Self::FENCE))
    }

    pub fn language(remainder: &str) -> Option<String> {
        let language = remainder.strip_prefix(Self::LANGUAGE_FENCE)?.trim();
        (!language.is_empty()).then(|| language.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_fence_tolerates_trailing_whitespace() {
        assert!(CodeBlock::is_fence("@@"));
        assert!(CodeBlock::is_fence("@@  \t"));
        assert!(!CodeBlock::is_fence("@@x@@"));
    }

    #[test]
    fn language_fence_opens_unless_closed_on_same_line() {
        assert!(CodeBlock::opens("@@|rust"));
        assert!(CodeBlock::opens("@@|"));
        assert!(!CodeBlock::opens("@@|x@@ more"));
        assert!(!CodeBlock::opens("@@mono@@"));
    }

    #[test]
    fn language_is_trimmed_and_optional() {
        assert_eq!(CodeBlock::language("@@| java "), Some("java".to_string()));
        assert_eq!(CodeBlock::language("@@|   "), None);
        assert_eq!(CodeBlock::language("@@"), None);
    }
}
