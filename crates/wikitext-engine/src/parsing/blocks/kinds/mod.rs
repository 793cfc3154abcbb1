pub mod code;
pub mod comment;
pub mod heading;
pub mod list_item;
pub mod markers;
pub mod table;
pub mod task;

pub use code::CodeBlock;
pub use comment::Comment;
pub use heading::Heading;
pub use list_item::ListMarker;
pub use markers::{
    Anchor, Center, IncludePage, Parent, Separator, TableOfContents, Title, VerticalSpace,
};
pub use table::TableMarker;
pub use task::TaskMarker;
