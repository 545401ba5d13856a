//! Full card catalog.

use dioxus::prelude::*;

use crate::catalog;
use crate::pages::home::ListingTile;

#[component]
pub fn Catalog() -> Element {
    let cards = catalog::all_cards();

    rsx! {
        main { class: "catalog",
            div { class: "container",
                h2 { class: "section-title", "All cards" }
                p { class: "catalog-count", "{cards.len()} cards in stock" }
                div { class: "card-grid",
                    for listing in cards.iter().cloned() {
                        ListingTile { key: "{listing.name}", listing: listing.clone() }
                    }
                }
            }
        }
    }
}
