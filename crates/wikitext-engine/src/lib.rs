//! # wikitext-engine
//!
//! Parses wiki markup into a position-annotated document tree.
//!
//! ## Modules
//!
//! - **`parsing`**: the line cursor and the recursive-descent parser
//! - **`tree`**: node kinds, traversal, page context and link extraction
//! - **`editing`**: span-based section splicing over a rope
//! - **`io`**: reading size-capped page files from a wiki root
//!
//! ```
//! use wikitext_engine::{parse_page, text_content};
//!
//! let page = parse_page("/Home", "= Welcome\nSee [[Other]].").unwrap();
//! assert_eq!(text_content(&page), "WelcomeSee .");
//! ```

pub mod editing;
pub mod io;
pub mod parsing;
pub mod tree;

pub use editing::{EditError, PageBuffer, section_range};
pub use io::{IoError, load_page, read_page};
pub use parsing::{LineCursor, ParseError, Parser, Span, parse_page, parse_reader, parse_str};
pub use tree::*;
