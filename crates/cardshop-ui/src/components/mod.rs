//! Reusable storefront components.

mod card_tile;
mod counter;
mod lazy_image;
mod navbar;
mod ripple_button;
mod scroll_to_top;
mod toast;

pub use card_tile::{CardListing, CardTile, FloatingCard};
pub use counter::{Stat, StatsSection};
pub use lazy_image::LazyImage;
pub use navbar::{navbar_markup, DocumentSurface, NavItem, Navbar};
pub use ripple_button::RippleButton;
pub use scroll_to_top::ScrollToTop;
pub use toast::{use_toast_provider, use_toasts, ToastContainer, Toasts};
