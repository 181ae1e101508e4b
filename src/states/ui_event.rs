//! UI Events
//!
//! Events emitted from the state layer to whatever front end paints the pages:
//! toasts, loading indicators, errors, progress and forwarded table intents.

use crate::components::composite::data_table::TableIntent;
use crate::states::Page;
use std::sync::Arc;

/// UI events for user feedback
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// Display a toast notification
    Toast {
        message: Arc<str>,
        severity: NotificationSeverity,
    },

    /// Loading state of a page changed
    LoadingChanged {
        page: Page,
        loading: bool,
        /// Optional loading message
        message: Option<Arc<str>>,
    },

    /// Error occurred (for logging/display)
    ErrorOccurred {
        /// Error source/task name
        source: Arc<str>,
        message: Arc<str>,
    },

    /// Simulated progress of a long operation
    Progress { task: Arc<str>, percent: u8 },

    /// A table interaction on `page`
    Intent { page: Page, intent: TableIntent },
}

impl UiEvent {
    pub fn success(message: impl Into<Arc<str>>) -> Self {
        UiEvent::Toast {
            message: message.into(),
            severity: NotificationSeverity::Success,
        }
    }

    pub fn error_toast(message: impl Into<Arc<str>>) -> Self {
        UiEvent::Toast {
            message: message.into(),
            severity: NotificationSeverity::Error,
        }
    }
}

/// Severity level for UI notifications
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationSeverity {
    /// Informational message (auto-dismiss)
    Info,
    /// Success message (auto-dismiss)
    Success,
    /// Warning message (persist until dismissed)
    Warning,
    /// Error message (persist until dismissed)
    Error,
}

impl NotificationSeverity {
    pub fn is_sticky(self) -> bool {
        matches!(self, NotificationSeverity::Warning | NotificationSeverity::Error)
    }
}
