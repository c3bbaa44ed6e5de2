//! Transient top-right notice shown after a form submission.

use crate::form::{FormError, SUCCESS_MESSAGE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NoticeKind::Success => "#00875A",
            NoticeKind::Error => "#FF5630",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Notice for the outcome of validating a submission.
    pub fn for_submission(result: &Result<(), FormError>) -> Self {
        match result {
            Ok(()) => Self::success(SUCCESS_MESSAGE),
            Err(e) => Self::error(e.to_string()),
        }
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.kind.as_str())
    }

    pub fn inline_style(&self) -> String {
        format!(
            "position: fixed; top: 90px; right: 20px; padding: 1rem 1.5rem; \
             background: {}; color: white; border-radius: 8px; \
             box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); z-index: 10000; \
             animation: slideInRight 0.3s ease-out; font-weight: 600; max-width: 300px;",
            self.kind.background()
        )
    }
}

pub const NOTICE_EXIT_ANIMATION: &str = "slideOutRight 0.3s ease-out";

pub const NOTICE_KEYFRAMES: &str = "\
@keyframes slideInRight {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOutRight {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
}
";
