pub mod chat;

/// Single stop sequence sent with every completion request.
pub const STOP_SEQUENCE: &str = "---";
