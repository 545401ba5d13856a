//! Card Tiles
//!
//! Product card with a pointer-following 3D tilt, and the floating hero
//! cards that drift with scroll.

use std::rc::Rc;

use cardshop_core::effects::{parallax_transform, Tilt};
use dioxus::prelude::*;

use crate::components::LazyImage;
use crate::hooks::client_bounds;

/// A card product in the grid
#[derive(Clone, PartialEq, Debug)]
pub struct CardListing {
    pub name: String,
    pub image: String,
    pub price_cents: u64,
    pub rarity: String,
}

impl CardListing {
    /// Price as shown on the tile (`$12.50`)
    pub fn price_label(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

/// Product tile with hover tilt
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CardTile { listing: listing.clone(),
///         RippleButton { onclick: move |_| add_to_cart(), "Add to cart" }
///     }
/// }
/// ```
#[component]
pub fn CardTile(listing: CardListing, children: Element) -> Element {
    let mut card: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut hovering = use_signal(|| false);
    let mut transform = use_signal(|| Tilt::REST.to_string());
    let current = transform();

    rsx! {
        div {
            class: "yugioh-card",
            style: "transform: {current};",
            onmounted: move |evt: MountedEvent| card.set(Some(evt.data())),
            onmousemove: move |evt: MouseEvent| async move {
                hovering.set(true);
                let Some(element) = card() else {
                    return;
                };
                // Measured per event: the card moves with scroll and layout
                let Some(bounds) = client_bounds(&element).await else {
                    return;
                };
                if hovering() {
                    let pointer = evt.client_coordinates();
                    transform.set(Tilt::in_bounds(bounds, pointer.x, pointer.y).transform());
                }
            },
            onmouseleave: move |_| {
                hovering.set(false);
                transform.set(Tilt::REST.to_string());
            },

            LazyImage { src: listing.image.clone(), alt: listing.name.clone(), class: "card-image".to_string() }
            div { class: "card-body",
                h5 { class: "card-title", "{listing.name}" }
                span { class: "card-rarity", "{listing.rarity}" }
                p { class: "card-price", "{listing.price_label()}" }
                {children}
            }
        }
    }
}

/// Decorative card in the hero that moves with scroll
#[component]
pub fn FloatingCard(index: usize, scroll_y: f64, children: Element) -> Element {
    let transform = parallax_transform(scroll_y, index);

    rsx! {
        div { class: "floating-card", style: "transform: {transform};",
            {children}
        }
    }
}
