use std::io::BufRead;

use log::trace;

use super::kinds::{WikiTagMarker, names, options as opt};
use super::{Terminator, nested};
use crate::parsing::{ParseError, Parser};
use crate::tree::{
    DateTimeFormat, ListingFormat, ListingSource, Node, NodeKind, NodeList, Options,
    PageNameFormat,
};

/// Name, optional `:value` and options of an opening `{{…}}` tag.
#[derive(Debug)]
struct OpeningTag {
    name: String,
    value: Option<String>,
    options: Options,
}

impl OpeningTag {
    fn flag(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    fn option(&self, key: &str) -> Option<String> {
        self.options.get(key).cloned()
    }

    fn page_name_format(&self) -> PageNameFormat {
        if self.flag(opt::SHOW_PATH) {
            PageNameFormat::PagePath
        } else if self.flag(opt::SHOW_FOLDER) {
            PageNameFormat::PageFolder
        } else {
            PageNameFormat::PageTitle
        }
    }

    fn listing_format(&self) -> ListingFormat {
        ListingFormat {
            name_format: self.page_name_format(),
            show_inline: self.flag(opt::SHOW_INLINE),
            separator: self.option(opt::SEPARATOR),
            output_on_empty: self.option(opt::OUTPUT_ON_EMPTY),
        }
    }

    /// An unparsable `length` means no limit.
    fn max_length(&self) -> Option<usize> {
        self.options
            .get(opt::LENGTH)
            .and_then(|length| length.trim().parse().ok())
    }

    fn listing(&self, source: ListingSource) -> NodeKind {
        NodeKind::Listing {
            source,
            format: self.listing_format(),
        }
    }
}

impl<R: BufRead> Parser<R> {
    /// Parses `{{name[:value] [| key[=value]]*}}`, dispatching on the name.
    pub(super) fn parse_wiki_tag(&mut self, enclosing: &[Terminator]) -> Result<Node, ParseError> {
        let start = self.total();
        let tag = self.parse_opening_wiki_tag();
        trace!("wiki tag {:?}", tag.name);

        let kind = match tag.name.as_str() {
            names::LINE_BREAK => NodeKind::LineBreak,
            names::PERCENT => NodeKind::Text {
                text: names::PERCENT.to_string(),
            },
            names::IMAGE => match tag.value {
                Some(url) => NodeKind::Image {
                    url,
                    options: tag.options,
                },
                None => NodeKind::WikiTag {
                    name: tag.name,
                    value: None,
                    options: tag.options,
                },
            },
            names::HTML => NodeKind::Html {
                text: self.parse_html_body()?,
            },
            names::COLOR => {
                let content = self.parse_tag_body(names::COLOR_CLOSE, enclosing)?;
                NodeKind::Color {
                    color: tag.value.unwrap_or_default(),
                    content,
                }
            }
            names::STYLE => {
                let content = self.parse_tag_body(names::STYLE_CLOSE, enclosing)?;
                NodeKind::CssStyle {
                    classes: tag
                        .value
                        .as_deref()
                        .unwrap_or_default()
                        .split_whitespace()
                        .map(String::from)
                        .collect(),
                    content,
                }
            }
            names::VERSION => NodeKind::WikiVersion,
            names::DATETIME => NodeKind::DateTime {
                format: if tag.flag(opt::DATE) {
                    DateTimeFormat::Date
                } else if tag.flag(opt::TIME) {
                    DateTimeFormat::Time
                } else {
                    DateTimeFormat::DateTime
                },
            },
            names::PAGE_NAME => NodeKind::PageName {
                format: tag.page_name_format(),
                linked: tag.flag(opt::LINK),
                global_context: tag.flag(opt::GLOBAL_CONTEXT),
            },
            names::PAGE_TIMESTAMP => NodeKind::PageTimestamp {
                global_context: tag.flag(opt::GLOBAL_CONTEXT),
            },
            names::LIST_VIEW_HISTORY => tag.listing(ListingSource::ViewHistory {
                max_length: tag.max_length(),
            }),
            names::LIST_EDIT_HISTORY => tag.listing(ListingSource::EditHistory {
                max_length: tag.max_length(),
            }),
            names::LIST_PARENTS => tag.listing(ListingSource::Parents {
                page_path: tag.value.clone(),
                global_context: tag.flag(opt::GLOBAL_CONTEXT),
            }),
            names::LIST_CHILDREN => tag.listing(ListingSource::Children {
                page_path: tag.value.clone(),
                global_context: tag.flag(opt::GLOBAL_CONTEXT),
            }),
            names::LIST_PAGES => tag.listing(ListingSource::Pages {
                folder: tag.value.clone(),
                global_context: tag.flag(opt::GLOBAL_CONTEXT),
            }),
            names::LIST_WANTED_PAGES => tag.listing(ListingSource::WantedPages),
            names::LIST_UNLINKED_PAGES => tag.listing(ListingSource::UnlinkedPages {
                hide_parents: tag.flag(opt::HIDE_PARENTS),
                hide_children: tag.flag(opt::HIDE_CHILDREN),
            }),
            names::SEARCH => NodeKind::SearchInput,
            _ => NodeKind::WikiTag {
                name: tag.name,
                value: tag.value,
                options: tag.options,
            },
        };
        Ok(Node::new(kind, self.span_from(start)))
    }

    /// Consumes the opening tag through its `}}`, or to the line end if the
    /// brackets are missing.
    fn parse_opening_wiki_tag(&mut self) -> OpeningTag {
        let (name, value, consumed) = {
            let body = &self.rest()[WikiTagMarker::OPEN.len()..];
            let end = [
                body.find(WikiTagMarker::CLOSE),
                body.find(WikiTagMarker::OPTION_SEPARATOR),
            ]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(body.len());
            let head = body[..end].trim();
            let (name, value) = match head.split_once(WikiTagMarker::VALUE_SEPARATOR) {
                Some((name, value)) => (name.to_string(), Some(value.to_string())),
                None => (head.to_string(), None),
            };
            (name, value, WikiTagMarker::OPEN.len() + end)
        };
        self.skip(consumed);

        let mut options = Options::new();
        while self.parse_tag_option(&mut options, true) {}

        let close = {
            let remainder = self.rest();
            remainder
                .find(WikiTagMarker::CLOSE)
                .map_or(remainder.len(), |i| i + WikiTagMarker::CLOSE.len())
        };
        self.skip(close);

        OpeningTag {
            name,
            value,
            options,
        }
    }

    /// Raw text up to `{{/html}}`, across lines, or to end of input.
    fn parse_html_body(&mut self) -> Result<String, ParseError> {
        let mut text = String::new();
        while let Some(remainder) = self.cursor.remainder() {
            if !text.is_empty() {
                text.push('\n');
            }
            if let Some(end) = remainder.find(names::HTML_CLOSE) {
                text.push_str(&remainder[..end]);
                self.skip(end + names::HTML_CLOSE.len());
                break;
            }
            text.push_str(remainder);
            self.next_line()?;
        }
        Ok(text)
    }

    /// Inline content up to `close`, which is consumed if present.
    fn parse_tag_body(
        &mut self,
        close: &str,
        enclosing: &[Terminator],
    ) -> Result<NodeList, ParseError> {
        let content = self.parse_inline_list(&nested(Terminator::literal(close), enclosing))?;
        if self.at(close) {
            self.skip(close.len());
        }
        Ok(content)
    }
}
