//! Mobile navigation disclosure.
//!
//! - [`NavController`]: menu/submenu state machine bound to the viewport
//! - [`ResizeDebounce`]: last-write-wins resize scheduling
//! - [`NavSurface`]: notifications back to the host page
//! - [`resolve_anchor`]: in-page anchor link policy

mod anchor;
mod controller;
mod debounce;
mod state;
mod surface;

pub use anchor::{resolve_anchor, AnchorAction};
pub use controller::NavController;
pub use debounce::{ResizeDebounce, ResizeTicket};
pub use state::{ClickTarget, DropdownId, DropdownState, LinkKind, MenuState, NavMarkup, Viewport};
pub use surface::{NavSurface, NoopSurface, RecordingSurface, SurfaceEvent};
