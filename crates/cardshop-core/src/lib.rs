//! Card Shop Core Library
//!
//! Runtime-free logic behind the storefront page.
//!
//! ## Overview
//!
//! - [`nav`]: the mobile navigation disclosure controller. The only
//!   stateful piece: menu and submenu open state kept in step with the
//!   viewport class, with debounced resize handling.
//! - [`effects`]: counters, ripples, card tilt, parallax, lazy images.
//! - [`toast`]: toast notification queue.
//! - [`config`]: tunables, loaded from JSON.
//!
//! ## Quick Start
//!
//! ```
//! use cardshop_core::nav::{ClickTarget, NavController, NavMarkup, NoopSurface};
//! use cardshop_core::NavConfig;
//!
//! let mut nav = NavController::mount(
//!     NavConfig::default(),
//!     NavMarkup::standard(["singles", "sealed"]),
//!     480,
//!     NoopSurface,
//! )?;
//!
//! nav.toggle_menu();
//! assert!(nav.is_menu_open());
//!
//! nav.handle_outside_click(ClickTarget::Outside);
//! assert!(!nav.is_menu_open());
//! # Ok::<(), cardshop_core::NavError>(())
//! ```

pub mod config;
pub mod effects;
pub mod error;
pub mod nav;
pub mod toast;

// Re-exports
pub use config::{EffectsConfig, NavConfig, ShopConfig};
pub use error::{ConfigError, NavError, NavResult};
pub use nav::{NavController, Viewport};
pub use toast::{Toast, ToastId, ToastKind, ToastQueue};
