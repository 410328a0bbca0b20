//! Ephemeral user-facing notifications
//!
//! The state machine and waiter flow emit toasts through a [`NoticeSink`];
//! how they are rendered (and auto-dismissed) is the UI's business.

/// A transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Acknowledgement or status update
    Info(String),
    /// Recoverable failure the user may retry
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Self::Info(text) | Self::Error(text) => text,
        }
    }
}

/// Consumer of transient notifications
pub trait NoticeSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Sink that drops every notice; for headless use
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NoticeSink for NullSink {
    fn notify(&self, _notice: Notice) {}
}

/// Sink that records notices; for tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    notices: std::sync::Mutex<Vec<Notice>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("lock poisoned").clone()
    }
}

impl NoticeSink for RecordingSink {
    fn notify(&self, notice: Notice) {
        self.notices.lock().expect("lock poisoned").push(notice);
    }
}
