//! User-visible notifications (toasts).

/// Tone of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    /// Something has started
    Info,
    /// Something finished well
    Success,
    /// Something failed and can be retried
    Error,
}

impl NoticeLevel {
    /// CSS-friendly label.
    pub fn as_label(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        }
    }
}

/// A single notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Tone
    pub level: NoticeLevel,
    /// Text shown to the user
    pub message: String,
}

impl Notice {
    /// Informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Info, message)
    }

    /// Success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Success, message)
    }

    /// Failure notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Error, message)
    }

    fn with_level(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Shows notices to the user.
pub trait Notifier {
    /// Display `notice`. Must not block.
    fn notify(&self, notice: Notice);
}
