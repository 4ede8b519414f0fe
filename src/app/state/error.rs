use chrono::{DateTime, Local};
use std::time::Duration;

pub const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusState {
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub severity: StatusSeverity,
}

impl StatusState {
    pub fn new(message: impl Into<String>, severity: StatusSeverity) -> Self {
        Self {
            message: message.into(),
            timestamp: Local::now(),
            severity,
        }
    }
}
