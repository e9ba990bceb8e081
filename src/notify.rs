//! Structured outcome notices.
//!
//! Coordinators never render toasts themselves: they emit a [`Notice`] through
//! a [`Notifier`] observer and the presentation layer decides how to show it.
//! Exactly one notice is emitted per failed or user-visible operation.

/// Whether a notice reports a success or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A user-facing outcome notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// HTTP status for failures; `None` for successes.
    pub status: Option<u16>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            status: None,
        }
    }

    pub fn error(message: impl Into<String>, status: impl Into<Option<u16>>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            status: status.into(),
        }
    }
}

/// Sink for coordinator outcome notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Default notifier: forwards notices to `tracing`.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => tracing::info!(message = %notice.message, "notice"),
            NoticeKind::Error => tracing::warn!(
                message = %notice.message,
                status = notice.status,
                "notice"
            ),
        }
    }
}
