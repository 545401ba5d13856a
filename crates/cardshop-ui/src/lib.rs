//! Card Shop UI Components
//!
//! Dioxus components for the storefront page, wired to the pure logic in
//! `cardshop-core`.
//!
//! ## Browser events
//!
//! Window-level events (resize, scroll, document clicks, visibility) have
//! no direct Dioxus handler, so they are forwarded from small JS snippets
//! over `document::eval` channels. See [`hooks`].
//!
//! ## Context
//!
//! Components read their tunables from a [`cardshop_core::ShopConfig`]
//! provided with [`provide_shop_config`], and toasts go through the
//! [`Toasts`] handle provided with [`use_toast_provider`]. The window scroll
//! offset is tracked once by [`hooks::provide_scroll_y`].

pub mod components;
mod context;
pub mod hooks;

pub use components::*;
pub use context::{provide_shop_config, use_shop_config};
