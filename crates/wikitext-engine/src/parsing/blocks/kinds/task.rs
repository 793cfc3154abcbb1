use crate::tree::TaskState;

pub struct TaskMarker;

impl TaskMarker {
    pub const OPEN: &'static str = "[ ]";
    pub const IMPORTANT: &'static str = "[!]";
    pub const CLOSED: &'static str = "[x]";
    pub const CLOSED_UPPER: &'static str = "[X]";
    /// All markers share this length.
    pub const LEN: usize = 3;
    pub const SCHEDULE_SEPARATOR: char = '|';

    pub fn state(remainder: &str) -> Option<TaskState> {
        if remainder.starts_with(Self::OPEN) {
            Some(TaskState::Open)
        } else if remainder.starts_with(Self::IMPORTANT) {
            Some(TaskState::OpenImportant)
        } else if remainder.starts_with(Self::CLOSED) || remainder.starts_with(Self::CLOSED_UPPER) {
            Some(TaskState::Closed)
        } else {
            None
        }
    }
}
