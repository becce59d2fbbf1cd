// User-facing notices.
// Short messages shown in the status bar, with a bounded history.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

const MAX_HISTORY: usize = 20;

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
    Error,
}

/// A single notice.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Error, message)
    }

    fn with_level(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Recent notices, newest last.
#[derive(Debug, Default)]
pub struct Notices {
    history: VecDeque<Notice>,
}

impl Notices {
    pub fn push(&mut self, notice: Notice) {
        if self.history.len() == MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(notice);
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.history.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notice> {
        self.history.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_bounded() {
        let mut notices = Notices::default();
        for i in 0..MAX_HISTORY + 5 {
            notices.push(Notice::info(format!("n{}", i)));
        }
        assert_eq!(notices.iter().count(), MAX_HISTORY);
        assert_eq!(notices.iter().next().unwrap().message, "n5");
        assert_eq!(notices.latest().unwrap().message, format!("n{}", MAX_HISTORY + 4));
    }

    #[test]
    fn test_iter_newest_first() {
        let mut notices = Notices::default();
        notices.push(Notice::info("first"));
        notices.push(Notice::error("second"));

        let newest: Vec<_> = notices.iter().rev().map(|n| n.message.as_str()).collect();
        assert_eq!(newest, vec!["second", "first"]);
    }
}
