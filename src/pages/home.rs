//! Storefront home page.
//!
//! Hero with floating cards, headline stats and the featured listings.

use cardshop_core::ToastKind;
use cardshop_ui::{
    use_toasts, CardListing, CardTile, FloatingCard, RippleButton, Stat, StatsSection,
};
use cardshop_ui::hooks::use_scroll_y;
use dioxus::prelude::*;

use crate::app::Route;
use crate::catalog;

/// Headline numbers as the shop advertises them
const SHOP_STATS: [(&str, &str); 3] = [
    ("12500+", "Cards in stock"),
    ("3200+", "Happy duelists"),
    ("150", "Tournaments hosted"),
];

fn shop_stats() -> Vec<Stat> {
    SHOP_STATS
        .iter()
        .filter_map(|(raw, label)| Stat::parse(raw, *label))
        .collect()
}

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();
    let scroll_y = use_scroll_y();
    let featured = catalog::featured();

    rsx! {
        main { class: "home",
            section { class: "hero",
                div { class: "container hero-inner",
                    div { class: "hero-copy",
                        h1 { class: "hero-title", "It's time to duel." }
                        p { class: "hero-tagline",
                            "Singles, sealed product and supplies for every deck."
                        }
                        RippleButton {
                            class: "btn-primary".to_string(),
                            onclick: move |_| {
                                navigator.push(Route::Catalog {});
                            },
                            "Browse the catalog"
                        }
                    }
                    div { class: "hero-cards",
                        for (index, card) in featured.iter().enumerate() {
                            FloatingCard { key: "{card.name}", index: index, scroll_y: scroll_y(),
                                img { src: "{card.image}", alt: "{card.name}" }
                            }
                        }
                    }
                }
            }

            StatsSection { stats: shop_stats() }

            section { id: "featured", class: "featured",
                div { class: "container",
                    h2 { class: "section-title", "Featured cards" }
                    div { class: "card-grid",
                        for listing in featured.iter().cloned() {
                            ListingTile { key: "{listing.name}", listing: listing.clone() }
                        }
                    }
                }
            }
        }
    }
}

/// Card tile with an add-to-cart button that confirms with a toast
#[component]
pub fn ListingTile(listing: CardListing) -> Element {
    let toasts = use_toasts();
    let name = listing.name.clone();

    rsx! {
        CardTile { listing: listing,
            RippleButton {
                class: "btn-add".to_string(),
                onclick: move |_| {
                    toasts.show(format!("{} added to cart", name), ToastKind::Success);
                },
                "Add to cart"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advertised_stats_parse() {
        let stats = shop_stats();
        assert_eq!(stats.len(), SHOP_STATS.len());
        assert_eq!(stats[0], Stat::new(12500, "Cards in stock"));
        assert_eq!(stats[2].target, 150);
    }
}
