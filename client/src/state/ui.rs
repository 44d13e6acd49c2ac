//! Local UI chrome state (dark mode, toast notifications).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so rendering
//! controls can evolve independently of wire data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use uuid::Uuid;

/// Severity of a transient toast notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier suffix for the toast element.
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// One transient notification in the shelf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// UI state for global chrome.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub toasts: Vec<Toast>,
}

impl UiState {
    /// Queue a toast, returning its id for timed dismissal.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Drop a toast by id; unknown ids are ignored (it may have been
    /// dismissed by hand before its timer fired).
    pub fn dismiss_toast(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
