//! Visual effect helpers. All pure: the UI crate feeds in pointer, scroll
//! and timer events and renders what comes back.

mod counter;
mod lazy;
mod motion;

pub use counter::{format_thousands, parse_counter_target, CounterAnimation, CounterFrame};
pub use lazy::LazySource;
pub use motion::{
    navbar_shadow, parallax_offset, parallax_transform, scroll_to_top_visible, Bounds, Ripple, Tilt,
};
