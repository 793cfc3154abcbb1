use crate::tree::LinkTarget;

pub struct Link;

impl Link {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";
    pub const ALT_SEPARATOR: char = '|';
    pub const SCHEME_SEPARATOR: char = ':';
    pub const ANCHOR_SEPARATOR: char = '#';
    pub const WIKI_SCHEME: &'static str = "wiki";
    pub const FILE_SCHEME: &'static str = "file";
}

impl LinkTarget {
    /// Classifies the text between `[[` and `]]` or `|`.
    ///
    /// A scheme is whatever precedes the first `:`, so `http://x` and
    /// `ftp:x` both become external links. Without a scheme, an `@` makes a
    /// mail link and a `#` selects an anchor.
    pub fn parse(target: &str) -> LinkTarget {
        let target = target.trim();
        if let Some((scheme, path)) = target.split_once(Link::SCHEME_SEPARATOR) {
            let (scheme, path) = (scheme.trim(), path.trim());
            return match scheme {
                Link::WIKI_SCHEME => LinkTarget::Wiki {
                    command: path.to_string(),
                },
                Link::FILE_SCHEME => LinkTarget::LocalFile {
                    path: path.to_string(),
                },
                _ => LinkTarget::External {
                    url: format!("{scheme}:{path}"),
                },
            };
        }
        if target.contains('@') {
            return LinkTarget::External {
                url: format!("mailto:{target}"),
            };
        }
        match target.split_once(Link::ANCHOR_SEPARATOR) {
            Some((page, anchor)) => LinkTarget::Page {
                page_path: (!page.is_empty()).then(|| page.to_string()),
                anchor: Some(anchor.to_string()),
            },
            None => LinkTarget::Page {
                page_path: Some(target.to_string()),
                anchor: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(path: Option<&str>, anchor: Option<&str>) -> LinkTarget {
        LinkTarget::Page {
            page_path: path.map(String::from),
            anchor: anchor.map(String::from),
        }
    }

    #[test]
    fn schemes_pick_link_kind() {
        assert_eq!(
            LinkTarget::parse("wiki:startpage"),
            LinkTarget::Wiki {
                command: "startpage".into()
            }
        );
        assert_eq!(
            LinkTarget::parse("file: /tmp/a.txt"),
            LinkTarget::LocalFile {
                path: "/tmp/a.txt".into()
            }
        );
        assert_eq!(
            LinkTarget::parse("http://example.org/x"),
            LinkTarget::External {
                url: "http://example.org/x".into()
            }
        );
    }

    #[test]
    fn at_sign_without_scheme_is_mail() {
        assert_eq!(
            LinkTarget::parse("someone@example.org"),
            LinkTarget::External {
                url: "mailto:someone@example.org".into()
            }
        );
    }

    #[test]
    fn anchors_split_on_hash() {
        assert_eq!(LinkTarget::parse("Page#top"), page(Some("Page"), Some("top")));
        assert_eq!(LinkTarget::parse("#top"), page(None, Some("top")));
        assert_eq!(LinkTarget::parse(" /Folder/Page "), page(Some("/Folder/Page"), None));
    }
}
