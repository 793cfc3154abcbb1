pub struct WikiTagMarker;

impl WikiTagMarker {
    pub const OPEN: &'static str = "{{";
    pub const CLOSE: &'static str = "}}";
    pub const VALUE_SEPARATOR: char = ':';
    pub const OPTION_SEPARATOR: char = '|';
}

pub struct XmlTagMarker;

impl XmlTagMarker {
    pub const OPEN: char = '<';
    pub const END: char = '>';
    pub const SELF_CLOSE: &'static str = "/>";
    pub const PREFIX_SEPARATOR: char = ':';

    /// `<` opens a tag unless a space follows it.
    pub fn opens(remainder: &str) -> bool {
        remainder.starts_with(Self::OPEN) && !remainder[1..].starts_with(' ')
    }

    pub fn closing(prefix: Option<&str>, name: &str) -> String {
        match prefix {
            Some(prefix) => format!("</{prefix}:{name}>"),
            None => format!("</{name}>"),
        }
    }
}

/// Names dispatched to dedicated nodes; anything else stays a generic tag.
pub mod names {
    pub const LINE_BREAK: &str = "br";
    pub const PERCENT: &str = "%%";
    pub const IMAGE: &str = "image";
    pub const HTML: &str = "html";
    pub const COLOR: &str = "color";
    pub const STYLE: &str = "style";
    pub const VERSION: &str = "version";
    pub const DATETIME: &str = "datetime";
    pub const PAGE_NAME: &str = "pagename";
    pub const PAGE_TIMESTAMP: &str = "pagetimestamp";
    pub const LIST_VIEW_HISTORY: &str = "listviewhistory";
    pub const LIST_EDIT_HISTORY: &str = "listedithistory";
    pub const LIST_PARENTS: &str = "listparents";
    pub const LIST_CHILDREN: &str = "listchildren";
    pub const LIST_PAGES: &str = "listpages";
    pub const LIST_WANTED_PAGES: &str = "listwantedpages";
    pub const LIST_UNLINKED_PAGES: &str = "listunlinkedpages";
    pub const SEARCH: &str = "search";

    pub const HTML_CLOSE: &str = "{{/html}}";
    pub const COLOR_CLOSE: &str = "{{/color}}";
    pub const STYLE_CLOSE: &str = "{{/style}}";
}

/// Option keys read by the dedicated tag nodes.
pub mod options {
    pub const DATE: &str = "date";
    pub const TIME: &str = "time";
    pub const SHOW_PATH: &str = "showPath";
    pub const SHOW_FOLDER: &str = "showFolder";
    pub const LINK: &str = "link";
    pub const GLOBAL_CONTEXT: &str = "globalContext";
    pub const SHOW_INLINE: &str = "showinline";
    pub const SEPARATOR: &str = "separator";
    pub const OUTPUT_ON_EMPTY: &str = "outputOnEmpty";
    pub const LENGTH: &str = "length";
    pub const HIDE_PARENTS: &str = "hideParents";
    pub const HIDE_CHILDREN: &str = "hideChildren";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xml_tag_needs_non_space_after_angle() {
        assert!(XmlTagMarker::opens("<b>"));
        assert!(XmlTagMarker::opens("<"));
        assert!(!XmlTagMarker::opens("< 3"));
        assert!(!XmlTagMarker::opens("a<b"));
    }

    #[test]
    fn closing_tag_keeps_prefix() {
        assert_eq!(XmlTagMarker::closing(Some("ns"), "t"), "</ns:t>");
        assert_eq!(XmlTagMarker::closing(None, "t"), "</t>");
    }
}
