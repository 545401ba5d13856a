//! Toast notification queue.
//!
//! Toasts are kept in insertion order and addressed by a monotonically
//! increasing id. Rendering and auto-hide timers live in the UI crate.

use std::fmt;

/// Visual flavor of a toast
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Danger,
    Warning,
    Info,
}

impl ToastKind {
    pub fn name(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Danger => "danger",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    /// Background class for the toast body
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-success",
            ToastKind::Danger => "bg-danger",
            ToastKind::Warning => "bg-warning",
            ToastKind::Info => "bg-info",
        }
    }
}

/// Identifier of a queued toast
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
}

/// Ordered set of visible toasts
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast and return its id
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        tracing::debug!(%id, kind = kind.name(), "Toast shown");
        id
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        before != self.toasts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
