//! Scroll To Top Button
//!
//! Floating button in the bottom-right corner, shown once the page has
//! scrolled past the configured offset.

use cardshop_core::effects::scroll_to_top_visible;
use dioxus::prelude::*;

use crate::context::use_shop_config;
use crate::hooks::use_scroll_y;

const SCROLL_TOP_JS: &str = "window.scrollTo({ top: 0, behavior: 'smooth' });";

#[component]
pub fn ScrollToTop() -> Element {
    let config = use_shop_config();
    let scroll_y = use_scroll_y();
    let visible = scroll_to_top_visible(scroll_y(), config.effects.scroll_top_threshold);

    rsx! {
        button {
            class: if visible { "scroll-to-top visible" } else { "scroll-to-top" },
            r#type: "button",
            "aria-label": "Scroll to top",
            "aria-hidden": "{!visible}",
            onclick: move |_| {
                let _ = document::eval(SCROLL_TOP_JS);
            },
            "↑"
        }
    }
}
