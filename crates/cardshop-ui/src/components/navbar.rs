//! Storefront Navbar Component
//!
//! Brand, collapsible link panel and dropdown submenus. Below the
//! breakpoint the panel is driven by a [`NavController`]; at or above it
//! submenus open on hover through CSS.

use cardshop_core::effects::navbar_shadow;
use cardshop_core::nav::{
    resolve_anchor, AnchorAction, ClickTarget, DropdownId, LinkKind, NavController, NavMarkup,
    NavSurface, Viewport,
};
use dioxus::prelude::*;

use crate::context::use_shop_config;
use crate::hooks::{
    install_listener_js, next_dom_id, remove_listener, use_scroll_y, ListenerTarget,
};

/// One entry of the navbar; entries with children render as submenus
#[derive(Clone, PartialEq, Debug)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            children: Vec::new(),
        }
    }

    pub fn dropdown(label: impl Into<String>, children: Vec<NavItem>) -> Self {
        Self {
            label: label.into(),
            href: "#".to_string(),
            children,
        }
    }

    pub fn is_dropdown(&self) -> bool {
        !self.children.is_empty()
    }

    /// Submenu id from the label and the entry's position in the navbar
    /// (`"Sealed Product"` at index 2 -> `sealed-product-2`), so entries
    /// sharing a label stay distinct
    pub fn dropdown_id(&self, index: usize) -> DropdownId {
        let slug: String = self
            .label
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");
        DropdownId::new(format!("{}-{}", slug, index))
    }
}

/// Markup the controller binds to for a given set of items
pub fn navbar_markup(items: &[NavItem]) -> NavMarkup {
    NavMarkup {
        has_toggle: true,
        has_panel: !items.is_empty(),
        dropdowns: items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_dropdown())
            .map(|(index, item)| item.dropdown_id(index))
            .collect(),
    }
}

/// Reflects controller notifications onto the document body.
///
/// `aria-expanded` and the `show` class are rendered from controller
/// state, so only the scroll lock needs a side effect here.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentSurface;

impl NavSurface for DocumentSurface {
    fn scroll_lock(&mut self, locked: bool) {
        let js = if locked {
            "document.body.style.overflow = 'hidden';"
        } else {
            "document.body.style.overflow = '';"
        };
        let _ = document::eval(js);
    }

    /// Nothing to write here: the navbar renders the `native-disclosure`
    /// class from [`NavController::viewport`], and that class is what lets
    /// CSS open submenus on hover.
    fn native_disclosure(&mut self, enabled: bool) {
        tracing::debug!(enabled, "Native dropdown disclosure");
    }
}

type SharedNav = Signal<Option<NavController<DocumentSurface>>>;

const RESIZE_HANDLER_JS: &str = "() => dioxus.send(window.innerWidth)";

const CLICK_HANDLER_JS: &str = r#"(event) => {
    const toggler = document.querySelector('.navbar-toggler');
    const panel = document.querySelector('.navbar-collapse');
    if (toggler && toggler.contains(event.target)) {
        dioxus.send('toggle');
    } else if (panel && panel.contains(event.target)) {
        dioxus.send('panel');
    } else {
        dioxus.send('outside');
    }
}"#;

const SCROLL_TO_JS: &str = r#"
const id = await dioxus.recv();
const target = document.getElementById(id);
if (target) {
    target.scrollIntoView({ behavior: 'smooth', block: 'start' });
}
"#;

fn click_target(raw: &str) -> ClickTarget {
    match raw {
        "toggle" => ClickTarget::Toggle,
        "panel" => ClickTarget::Panel,
        _ => ClickTarget::Outside,
    }
}

fn scroll_to_anchor(id: String) {
    let eval = document::eval(SCROLL_TO_JS);
    if let Err(e) = eval.send(id) {
        tracing::debug!(error = ?e, "Anchor scroll failed");
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavbarProps {
    /// Shop name shown at the left
    pub brand: String,
    /// Top-level entries
    pub items: Vec<NavItem>,
    /// Window width at launch, used until the first resize report
    #[props(default = 1280)]
    pub initial_width: u32,
}

/// Storefront navbar
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Navbar {
///         brand: "Duelist's Vault".to_string(),
///         items: vec![
///             NavItem::link("Home", "/"),
///             NavItem::dropdown("Singles", vec![NavItem::link("Monsters", "/cards")]),
///         ],
///     }
/// }
/// ```
#[component]
pub fn Navbar(props: NavbarProps) -> Element {
    let config = use_shop_config();
    let scroll_y = use_scroll_y();
    let initial_width = props.initial_width;

    let markup = navbar_markup(&props.items);
    let mut nav: SharedNav = use_signal(move || {
        match NavController::mount(config.nav, markup, initial_width, DocumentSurface) {
            Ok(controller) => Some(controller),
            Err(e) => {
                tracing::warn!(error = %e, "Navbar controller disabled");
                None
            }
        }
    });
    let mut pending_resize: Signal<Option<Task>> = use_signal(|| None);
    let listener_key = use_hook(|| next_dom_id("navbar"));
    let resize_key = format!("{}-resize", listener_key);
    let click_key = format!("{}-click", listener_key);

    // Debounced window resize
    let install = install_listener_js(
        &resize_key,
        ListenerTarget::Window,
        "resize",
        RESIZE_HANDLER_JS,
    );
    use_future(move || {
        let js = format!("{}\ndioxus.send(window.innerWidth);", install);
        async move {
            let mut eval = document::eval(&js);
            while let Ok(width) = eval.recv::<u32>().await {
                let ticket = match nav.write().as_mut() {
                    Some(controller) => controller.resize_event(width),
                    None => break,
                };
                if let Some(task) = pending_resize.write().take() {
                    task.cancel();
                }
                let task = spawn(async move {
                    tokio::time::sleep(ticket.delay).await;
                    if let Some(controller) = nav.write().as_mut() {
                        controller.fire_resize(&ticket);
                    }
                });
                pending_resize.set(Some(task));
            }
        }
    });

    // Clicks anywhere in the document
    let install = install_listener_js(
        &click_key,
        ListenerTarget::Document,
        "click",
        CLICK_HANDLER_JS,
    );
    use_future(move || {
        let js = install.clone();
        async move {
            let mut eval = document::eval(&js);
            while let Ok(raw) = eval.recv::<String>().await {
                let target = click_target(&raw);
                if !target.is_outside() {
                    continue;
                }
                match nav.write().as_mut() {
                    Some(controller) => {
                        controller.handle_outside_click(target);
                    }
                    None => break,
                }
            }
        }
    });

    use_drop(move || {
        remove_listener(&resize_key);
        remove_listener(&click_key);
        if let Ok(mut pending) = pending_resize.try_write() {
            if let Some(task) = pending.take() {
                task.cancel();
            }
        }
        if let Ok(mut guard) = nav.try_write() {
            if let Some(controller) = guard.as_mut() {
                controller.teardown();
            }
        }
    });

    let (enabled, menu_open, viewport, open_dropdown) = match nav.read().as_ref() {
        Some(controller) => (
            true,
            controller.is_menu_open(),
            controller.viewport(),
            controller.open_dropdown().cloned(),
        ),
        None => (
            false,
            false,
            Viewport::classify(initial_width, config.nav.breakpoint_px),
            None,
        ),
    };

    let shadow = navbar_shadow(scroll_y(), config.effects.shadow_scroll_threshold);
    let disclosure = if viewport == Viewport::Desktop {
        "native-disclosure"
    } else {
        ""
    };

    let on_toggle = move |evt: MouseEvent| {
        evt.prevent_default();
        if let Some(controller) = nav.write().as_mut() {
            controller.toggle_menu();
        }
    };

    let on_dropdown = move |id: DropdownId| {
        if let Some(controller) = nav.write().as_mut() {
            if let Err(e) = controller.toggle_dropdown(&id) {
                tracing::warn!(error = %e, "Dropdown toggle failed");
            }
        }
    };

    let on_follow = move |href: String| {
        match resolve_anchor(&href, false) {
            AnchorAction::PassThrough => {
                navigator().push(href);
            }
            AnchorAction::ScrollTo(id) => scroll_to_anchor(id),
            AnchorAction::Suppress => {}
        }
        if let Some(controller) = nav.write().as_mut() {
            controller.handle_nav_link_click(LinkKind::Plain);
        }
    };

    rsx! {
        nav {
            class: "navbar {viewport.class()} {disclosure}",
            style: "box-shadow: {shadow};",
            div { class: "container",
                Link { class: "navbar-brand", to: "/", "{props.brand}" }

                if enabled {
                    button {
                        class: if menu_open { "navbar-toggler active" } else { "navbar-toggler" },
                        r#type: "button",
                        "aria-controls": "shop-nav",
                        "aria-expanded": "{menu_open}",
                        "aria-label": "Toggle navigation",
                        onclick: on_toggle,
                        span { class: "navbar-toggler-icon" }
                    }
                }

                div {
                    id: "shop-nav",
                    class: if menu_open { "navbar-collapse show" } else { "navbar-collapse" },
                    ul { class: "navbar-nav",
                        for (index, item) in props.items.iter().cloned().enumerate() {
                            NavEntry {
                                key: "{index}",
                                open: open_dropdown.as_ref() == Some(&item.dropdown_id(index)),
                                index: index,
                                item: item.clone(),
                                on_dropdown: on_dropdown,
                                on_follow: on_follow,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A single navbar entry: plain link or submenu
#[component]
fn NavEntry(
    item: NavItem,
    index: usize,
    open: bool,
    on_dropdown: EventHandler<DropdownId>,
    on_follow: EventHandler<String>,
) -> Element {
    if !item.is_dropdown() {
        let href = item.href.clone();
        return rsx! {
            li { class: "nav-item",
                a {
                    class: "nav-link",
                    href: "{item.href}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_follow.call(href.clone());
                    },
                    "{item.label}"
                }
            }
        };
    }

    let id = item.dropdown_id(index);
    let children = item.children.iter().map(|child| {
        let href = child.href.clone();
        rsx! {
            li { key: "{child.href}",
                a {
                    class: "dropdown-item",
                    href: "{child.href}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_follow.call(href.clone());
                    },
                    "{child.label}"
                }
            }
        }
    });

    rsx! {
        li { class: if open { "nav-item dropdown show" } else { "nav-item dropdown" },
            a {
                class: "nav-link dropdown-toggle",
                href: "#",
                role: "button",
                "aria-expanded": "{open}",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_dropdown.call(id.clone());
                },
                "{item.label}"
            }
            ul { class: if open { "dropdown-menu show" } else { "dropdown-menu" },
                {children}
            }
        }
    }
}
