//! Bridges from window-level browser events into Rust.

use std::sync::atomic::{AtomicU64, Ordering};

use cardshop_core::effects::Bounds;
use dioxus::prelude::*;

static NEXT_DOM_ID: AtomicU64 = AtomicU64::new(1);

/// Unique DOM id with the given prefix, for elements JS needs to find
pub fn next_dom_id(prefix: &str) -> String {
    format!("{}-{}", prefix, NEXT_DOM_ID.fetch_add(1, Ordering::Relaxed))
}

/// Intersection observer settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl VisibilityOptions {
    /// Stats section: half visible, ignoring the bottom 50px
    pub const COUNTERS: Self = Self {
        threshold: 0.5,
        root_margin: "0px 0px -50px 0px",
    };

    /// Images: any pixel visible
    pub const IMAGES: Self = Self {
        threshold: 0.0,
        root_margin: "0px",
    };
}

const VISIBLE_ONCE_JS: &str = r#"
const [selector, threshold, rootMargin] = await dioxus.recv();
const element = document.querySelector(selector);
if (element) {
    const observer = new IntersectionObserver((entries) => {
        entries.forEach((entry) => {
            if (entry.isIntersecting) {
                observer.unobserve(entry.target);
                dioxus.send(true);
            }
        });
    }, { threshold, rootMargin });
    observer.observe(element);
}
"#;

/// Resolve once the element matching `selector` first scrolls into view.
///
/// Returns false if the bridge fails. If nothing matches the selector this
/// never resolves, which leaves the caller's effect unapplied.
pub async fn wait_until_visible(selector: String, options: VisibilityOptions) -> bool {
    let mut eval = document::eval(VISIBLE_ONCE_JS);
    if let Err(e) = eval.send((selector, options.threshold, options.root_margin)) {
        tracing::debug!(error = ?e, "Visibility observer unavailable");
        return false;
    }
    eval.recv::<bool>().await.unwrap_or(false)
}

/// Where a forwarded listener is attached
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerTarget {
    Window,
    Document,
}

impl ListenerTarget {
    fn js(&self) -> &'static str {
        match self {
            ListenerTarget::Window => "window",
            ListenerTarget::Document => "document",
        }
    }
}

/// JS that attaches `handler` for `event` on `target`, remembered under
/// `key` so [`remove_listener`] can detach it. Re-installing a key replaces
/// the previous handler.
pub fn install_listener_js(
    key: &str,
    target: ListenerTarget,
    event: &str,
    handler: &str,
) -> String {
    let target = target.js();
    format!(
        r#"
const registry = (window.__cardshopListeners = window.__cardshopListeners || {{}});
const previous = registry["{key}"];
if (previous) {{
    previous.target.removeEventListener(previous.event, previous.handler);
}}
const handler = {handler};
{target}.addEventListener("{event}", handler, {{ passive: true }});
registry["{key}"] = {{ target: {target}, event: "{event}", handler }};
"#
    )
}

/// JS that detaches the listener installed under `key`, if any
pub fn remove_listener_js(key: &str) -> String {
    format!(
        r#"
const registry = window.__cardshopListeners || {{}};
const entry = registry["{key}"];
if (entry) {{
    entry.target.removeEventListener(entry.event, entry.handler);
    delete registry["{key}"];
}}
"#
    )
}

/// Detach a listener installed with [`install_listener_js`]
pub fn remove_listener(key: &str) {
    let _ = document::eval(&remove_listener_js(key));
}

/// Viewport box of a mounted element
pub async fn client_bounds(element: &MountedData) -> Option<Bounds> {
    let rect = element.get_client_rect().await.ok()?;
    Some(Bounds::new(
        rect.origin.x,
        rect.origin.y,
        rect.size.width,
        rect.size.height,
    ))
}

/// Shared window scroll offset
#[derive(Clone, Copy)]
struct ScrollY(Signal<f64>);

/// Track the window scroll offset once for every descendant.
///
/// A single listener feeds the signal; [`use_scroll_y`] reads it.
pub fn provide_scroll_y() -> Signal<f64> {
    let key = use_hook(|| next_dom_id("scroll"));
    let ScrollY(mut scroll_y) = use_context_provider(|| ScrollY(Signal::new(0.0)));

    let listen_key = key.clone();
    use_future(move || {
        let js = install_listener_js(
            &listen_key,
            ListenerTarget::Window,
            "scroll",
            "() => dioxus.send(window.scrollY)",
        );
        async move {
            let mut eval = document::eval(&format!("{js}\ndioxus.send(window.scrollY);"));
            while let Ok(y) = eval.recv::<f64>().await {
                scroll_y.set(y);
            }
        }
    });

    use_drop(move || remove_listener(&key));

    scroll_y
}

/// Current vertical scroll offset of the window.
pub fn use_scroll_y() -> Signal<f64> {
    use_context::<ScrollY>().0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_are_unique() {
        let a = next_dom_id("lazy-img");
        let b = next_dom_id("lazy-img");
        assert_ne!(a, b);
        assert!(a.starts_with("lazy-img-"));
    }

    #[test]
    fn counter_visibility_matches_stats_section() {
        assert_eq!(VisibilityOptions::COUNTERS.threshold, 0.5);
        assert_eq!(VisibilityOptions::COUNTERS.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn listeners_are_keyed_for_removal() {
        let js = install_listener_js(
            "scroll-7",
            ListenerTarget::Window,
            "scroll",
            "() => dioxus.send(window.scrollY)",
        );
        assert!(js.contains(r#"window.addEventListener("scroll", handler"#));
        assert!(js.contains(r#"registry["scroll-7"] = { target: window, event: "scroll", handler }"#));
        assert!(js.contains("previous.target.removeEventListener"));

        let remove = remove_listener_js("scroll-7");
        assert!(remove.contains(r#"registry["scroll-7"]"#));
        assert!(remove.contains("entry.target.removeEventListener(entry.event, entry.handler)"));
        assert!(remove.contains(r#"delete registry["scroll-7"]"#));
    }

    #[test]
    fn document_listeners_attach_to_document() {
        let js = install_listener_js("navbar-3-click", ListenerTarget::Document, "click", "(e) => {}");
        assert!(js.contains(r#"document.addEventListener("click", handler"#));
        assert!(js.contains("target: document"));
    }
}
