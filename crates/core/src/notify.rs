//! User-visible notifications
//!
//! Store logic reports messages through an injected [`Notifier`] instead of
//! reaching for a global toast/message singleton. The browser crate forwards
//! notices to a UI callback; [`TracingNotifier`] and [`NoticeLog`] cover
//! headless use.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single message to show the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}

/// Capability for surfacing messages to the user
pub trait Notifier {
    fn notify(&self, notice: Notice);

    fn error(&self, message: &str) {
        self.notify(Notice::error(message));
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

/// Writes notices to the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => tracing::error!(message = %notice.message, "notice"),
            NoticeLevel::Warning => tracing::warn!(message = %notice.message, "notice"),
            NoticeLevel::Info | NoticeLevel::Success => {
                tracing::info!(message = %notice.message, "notice");
            }
        }
    }
}

/// Keeps every notice in memory, in the order received
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_helper_records_error_level() {
        let log = Arc::new(NoticeLog::new());
        log.error("boom");

        assert_eq!(log.notices(), vec![Notice::error("boom")]);
        assert_eq!(log.notices()[0].level, NoticeLevel::Error);
    }

    #[test]
    fn tracing_notifier_accepts_all_levels() {
        let notifier = TracingNotifier;
        notifier.notify(Notice::new(NoticeLevel::Info, "hello"));
        notifier.notify(Notice::new(NoticeLevel::Warning, "careful"));
        notifier.error("failed");
    }
}
