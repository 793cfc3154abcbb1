//! # Document Tree
//!
//! The parser's output: [`Node`]s pairing a [`NodeKind`] with the span of
//! source that produced them, grouped into [`NodeList`]s.
//!
//! ## Modules
//!
//! - **`node`**: node kinds and their child lists
//! - **`walk`**: visiting and transforming trees
//! - **`text`**: flattened text and heading anchor ids
//! - **`context`**: parent backlinks, page context and page path resolution
//! - **`links`**: resolved outgoing page references
//! - **`outline`**: an indented, span-annotated dump of a tree
//!
//! Trees are immutable once parsed. Parent backlinks live in a separate
//! [`ParentIndex`] built from a root, so nodes never point upwards.

pub mod context;
pub mod links;
pub mod node;
pub mod outline;
pub mod text;
pub mod walk;

pub use context::{ParentIndex, resolve_page_path};
pub use links::outgoing_links;
pub use node::*;
pub use outline::outline;
pub use text::{anchor_id, text_content};
pub use walk::{transform, transform_matching, visit};
