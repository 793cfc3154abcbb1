pub struct TableMarker;

impl TableMarker {
    pub const OPEN: &'static str = "{|";
    pub const CLOSE: &'static str = "|}";
    pub const ROW_END: &'static str = "|-";
    pub const HEADER_CELL: &'static str = "||";
    pub const CELL: char = '|';
}
