//! Toast Notifications
//!
//! A queue of short messages pinned to the top-right corner. The container
//! is only rendered once there is something to show; each toast hides
//! itself after the configured delay or when its close button is pressed.

use std::time::Duration;

use cardshop_core::{ToastId, ToastKind, ToastQueue};
use dioxus::prelude::*;

use crate::context::use_shop_config;

/// Handle for showing and dismissing toasts, shared through context
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
    autohide: Duration,
}

impl Toasts {
    /// Show a toast; it is removed again after the autohide delay
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let mut queue = self.queue;
        let id = queue.write().push(message, kind);
        let autohide = self.autohide;
        spawn(async move {
            tokio::time::sleep(autohide).await;
            queue.write().dismiss(id);
        });
        id
    }

    /// Remove a toast early; no-op if it is already gone
    pub fn dismiss(&self, id: ToastId) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    pub fn queue(&self) -> Signal<ToastQueue> {
        self.queue
    }
}

/// Create the toast queue and provide it to descendants.
pub fn use_toast_provider() -> Toasts {
    let config = use_shop_config();
    let queue = use_signal(ToastQueue::new);
    use_context_provider(|| Toasts {
        queue,
        autohide: config.effects.toast_autohide(),
    })
}

/// Access the toast handle from context.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Renders the visible toasts
#[component]
pub fn ToastContainer() -> Element {
    let toasts = use_toasts();
    let queue = toasts.queue();
    let queue = queue.read();

    if queue.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "toast-container position-fixed top-0 end-0 p-3",
            for toast in queue.iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: "toast show align-items-center text-white {toast.kind.class()} border-0",
                    role: "alert",
                    div { class: "d-flex",
                        div { class: "toast-body", "{toast.message}" }
                        button {
                            r#type: "button",
                            class: "btn-close btn-close-white me-2 m-auto",
                            "aria-label": "Close",
                            onclick: move |_| toasts.dismiss(toast.id),
                        }
                    }
                }
            }
        }
    }
}
