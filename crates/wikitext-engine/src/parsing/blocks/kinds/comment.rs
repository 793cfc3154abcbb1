pub struct Comment;

impl Comment {
    pub const LINE: &'static str = "//";
    pub const BLOCK_OPEN: &'static str = "/*";
    pub const BLOCK_CLOSE: &'static str = "*/";
}
