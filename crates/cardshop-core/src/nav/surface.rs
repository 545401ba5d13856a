//! Seam between the controller and the host page.

use super::state::DropdownId;

/// Receives state changes so the host can reflect them
/// (`aria-expanded`, the `show` class, body scroll lock).
///
/// The controller only calls these on actual transitions, but
/// implementations should still tolerate repeats.
pub trait NavSurface {
    /// Menu panel opened or closed
    fn menu_changed(&mut self, _open: bool) {}

    /// A submenu opened or closed
    fn dropdown_changed(&mut self, _id: &DropdownId, _open: bool) {}

    /// Lock or release page scrolling
    fn scroll_lock(&mut self, locked: bool);

    /// Enable or disable hover-driven submenus
    fn native_disclosure(&mut self, _enabled: bool) {}
}

/// Surface that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSurface;

impl NavSurface for NoopSurface {
    fn scroll_lock(&mut self, _locked: bool) {}
}

/// A single notification delivered to a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Menu(bool),
    Dropdown(DropdownId, bool),
    ScrollLock(bool),
    NativeDisclosure(bool),
}

/// Surface that keeps every notification, for headless hosts and tests
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded events
    pub fn take(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current scroll lock as last reported
    pub fn scroll_locked(&self) -> bool {
        self.events
            .iter()
            .rev()
            .find_map(|e| match e {
                SurfaceEvent::ScrollLock(locked) => Some(*locked),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl NavSurface for RecordingSurface {
    fn menu_changed(&mut self, open: bool) {
        self.events.push(SurfaceEvent::Menu(open));
    }

    fn dropdown_changed(&mut self, id: &DropdownId, open: bool) {
        self.events.push(SurfaceEvent::Dropdown(id.clone(), open));
    }

    fn scroll_lock(&mut self, locked: bool) {
        self.events.push(SurfaceEvent::ScrollLock(locked));
    }

    fn native_disclosure(&mut self, enabled: bool) {
        self.events.push(SurfaceEvent::NativeDisclosure(enabled));
    }
}
