//! Lazy Image
//!
//! Renders a placeholder until the image first scrolls into view, then
//! swaps in the real source.

use cardshop_core::effects::LazySource;
use dioxus::prelude::*;

use crate::hooks::{next_dom_id, wait_until_visible, VisibilityOptions};

/// Transparent 1x1 GIF
const PLACEHOLDER_SRC: &str = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

#[component]
pub fn LazyImage(src: String, alt: String, #[props(default)] class: Option<String>) -> Element {
    let dom_id = use_hook(|| next_dom_id("lazy-img"));
    let mut source = use_signal(|| LazySource::new(src.clone()));

    let current_src = source.read().src().unwrap_or(PLACEHOLDER_SRC).to_string();
    let full_class = format!("{} {}", source.read().class(), class.unwrap_or_default());
    let selector = format!("#{}", dom_id);

    rsx! {
        img {
            id: "{dom_id}",
            class: "{full_class}",
            alt: "{alt}",
            src: "{current_src}",
            "data-src": "{src}",
            onmounted: move |_| {
                let selector = selector.clone();
                async move {
                    if wait_until_visible(selector, VisibilityOptions::IMAGES).await
                        && source.write().reveal().is_some()
                    {
                        tracing::trace!("Lazy image revealed");
                    }
                }
            },
        }
    }
}
