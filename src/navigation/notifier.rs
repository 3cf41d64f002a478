//! Transient notifications (toasts) and inline form messages

use std::sync::Mutex;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Short-lived message detached from any form.
    Toast,
    /// Message shown next to the form that caused it.
    Inline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub severity: Severity,
    pub message: String,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);

    fn toast_error(&self, message: &str) {
        self.notify(Notice {
            kind: NoticeKind::Toast,
            severity: Severity::Error,
            message: message.to_string(),
        });
    }

    fn toast_success(&self, message: &str) {
        self.notify(Notice {
            kind: NoticeKind::Toast,
            severity: Severity::Success,
            message: message.to_string(),
        });
    }

    fn inline_error(&self, message: &str) {
        self.notify(Notice {
            kind: NoticeKind::Inline,
            severity: Severity::Error,
            message: message.to_string(),
        });
    }
}

/// Writes notices to stderr and the log.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Error => {
                debug!(kind = ?notice.kind, "{}", notice.message);
                eprintln!("✗ {}", notice.message);
            }
            Severity::Success => {
                debug!(kind = ?notice.kind, "{}", notice.message);
                eprintln!("✓ {}", notice.message);
            }
        }
    }
}

/// Keeps every notice; used where output is inspected afterwards.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }

    /// Messages of the given kind, oldest first.
    pub fn messages(&self, kind: NoticeKind) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message)
            .collect()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}
