use cardshop_ui::hooks::provide_scroll_y;
use cardshop_ui::{
    provide_shop_config, use_toast_provider, NavItem, Navbar, ScrollToTop, ToastContainer,
};
use dioxus::prelude::*;

use crate::launch_settings;
use crate::pages::{Catalog, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Storefront home: hero, stats, featured cards
/// - `/cards` - Full card catalog
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(ShopLayout)]
    #[route("/")]
    Home {},
    #[route("/cards")]
    Catalog {},
}

/// Root application component.
///
/// Provides global styles, configuration, the toast queue, the shared
/// scroll offset and routing.
#[component]
pub fn App() -> Element {
    let settings = launch_settings();
    provide_shop_config(settings.config);
    use_toast_provider();
    provide_scroll_y();

    let mut loaded = use_signal(|| false);
    use_effect(move || loaded.set(true));

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: if loaded() { "shop loaded" } else { "shop" },
            Router::<Route> {}
            ToastContainer {}
            ScrollToTop {}
        }
    }
}

/// Links shown in the navbar
fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::link("Home", "/"),
        NavItem::dropdown(
            "Singles",
            vec![
                NavItem::link("All Cards", "/cards"),
                NavItem::link("Featured", "#featured"),
            ],
        ),
        NavItem::dropdown(
            "Sealed Product",
            vec![
                NavItem::link("Booster Boxes", "/cards"),
                NavItem::link("Structure Decks", "/cards"),
            ],
        ),
        NavItem::link("Stats", "#stats"),
    ]
}

/// Shared chrome around every page
#[component]
fn ShopLayout() -> Element {
    let settings = launch_settings();

    rsx! {
        Navbar {
            brand: "Duelist's Vault".to_string(),
            items: nav_items(),
            initial_width: settings.window_width,
        }
        Outlet::<Route> {}
    }
}
