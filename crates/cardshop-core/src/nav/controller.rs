//! Navigation disclosure controller.
//!
//! Owns the open/closed state of the collapsible menu and its submenus and
//! keeps it consistent with the viewport class. All transitions go through
//! here; the host only forwards events and reflects [`NavSurface`]
//! notifications.
//!
//! ## Invariants
//!
//! - At most one submenu is open at a time
//! - Submenus are closed whenever the menu opens or closes
//! - On desktop the menu is closed after every debounced resize
//! - Every close operation is idempotent

use tracing::debug;

use super::debounce::{ResizeDebounce, ResizeTicket};
use super::state::{ClickTarget, DropdownId, DropdownState, LinkKind, MenuState, NavMarkup, Viewport};
use super::surface::NavSurface;
use crate::config::NavConfig;
use crate::error::{NavError, NavResult};

/// Controller for one navbar instance
#[derive(Debug)]
pub struct NavController<S: NavSurface> {
    config: NavConfig,
    menu: MenuState,
    dropdowns: Vec<(DropdownId, DropdownState)>,
    viewport: Viewport,
    debounce: ResizeDebounce,
    surface: S,
}

impl<S: NavSurface> NavController<S> {
    /// Bind to the host markup.
    ///
    /// Fails if the toggle or the panel is missing, or if two submenus
    /// share an id. Callers are expected to log and carry on without a
    /// controller in that case.
    pub fn mount(config: NavConfig, markup: NavMarkup, width: u32, mut surface: S) -> NavResult<Self> {
        if !markup.has_toggle {
            return Err(NavError::MissingElement("navbar-toggler"));
        }
        if !markup.has_panel {
            return Err(NavError::MissingElement("navbar-collapse"));
        }

        let mut dropdowns: Vec<(DropdownId, DropdownState)> = Vec::with_capacity(markup.dropdowns.len());
        for id in markup.dropdowns {
            if dropdowns.iter().any(|(existing, _)| *existing == id) {
                return Err(NavError::DuplicateDropdown(id.to_string()));
            }
            dropdowns.push((id, DropdownState::default()));
        }

        let viewport = Viewport::classify(width, config.breakpoint_px);
        surface.native_disclosure(viewport == Viewport::Desktop);

        debug!(?viewport, dropdowns = dropdowns.len(), "Nav controller mounted");

        Ok(Self {
            config,
            menu: MenuState::default(),
            dropdowns,
            viewport,
            debounce: ResizeDebounce::new(config.resize_debounce()),
            surface,
        })
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether the given submenu is open; unknown ids read as closed
    pub fn is_dropdown_open(&self, id: &DropdownId) -> bool {
        self.dropdowns
            .iter()
            .any(|(existing, state)| existing == id && state.is_open)
    }

    /// The currently open submenu, if any
    pub fn open_dropdown(&self) -> Option<&DropdownId> {
        self.dropdowns
            .iter()
            .find(|(_, state)| state.is_open)
            .map(|(id, _)| id)
    }

    pub fn dropdowns(&self) -> impl Iterator<Item = (&DropdownId, DropdownState)> {
        self.dropdowns.iter().map(|(id, state)| (id, *state))
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Whether a resize ticket is waiting to fire
    pub fn resize_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Flip the menu. Returns the new open state.
    pub fn toggle_menu(&mut self) -> bool {
        if self.menu.is_open {
            self.close_menu();
        } else {
            self.open_menu();
        }
        self.menu.is_open
    }

    fn open_menu(&mut self) {
        if self.menu.is_open {
            return;
        }
        self.menu.is_open = true;
        self.surface.menu_changed(true);
        self.surface.scroll_lock(true);
        self.close_all_dropdowns();
        debug!("Menu opened");
    }

    /// Close the menu and every submenu. Returns whether anything changed.
    pub fn close_menu(&mut self) -> bool {
        let mut changed = false;
        if self.menu.is_open {
            self.menu.is_open = false;
            self.surface.menu_changed(false);
            self.surface.scroll_lock(false);
            changed = true;
            debug!("Menu closed");
        }
        self.close_all_dropdowns() > 0 || changed
    }

    /// Flip a submenu, closing any other open one first.
    ///
    /// Only acts on mobile; returns `Ok(false)` on desktop where submenus
    /// are driven natively.
    pub fn toggle_dropdown(&mut self, id: &DropdownId) -> NavResult<bool> {
        let index = self.index_of(id)?;

        if !self.viewport.is_mobile() {
            debug!(%id, "Ignoring dropdown toggle on desktop");
            return Ok(false);
        }

        for (i, (other, state)) in self.dropdowns.iter_mut().enumerate() {
            if i != index && state.is_open {
                state.is_open = false;
                self.surface.dropdown_changed(other, false);
            }
        }

        let (target, state) = &mut self.dropdowns[index];
        state.is_open = !state.is_open;
        self.surface.dropdown_changed(target, state.is_open);
        debug!(%id, open = state.is_open, "Dropdown toggled");
        Ok(true)
    }

    /// Close one submenu. Returns whether it was open.
    pub fn close_dropdown(&mut self, id: &DropdownId) -> NavResult<bool> {
        let index = self.index_of(id)?;
        let (target, state) = &mut self.dropdowns[index];
        if !state.is_open {
            return Ok(false);
        }
        state.is_open = false;
        self.surface.dropdown_changed(target, false);
        Ok(true)
    }

    /// Close every open submenu. Returns how many were open.
    pub fn close_all_dropdowns(&mut self) -> usize {
        let mut closed = 0;
        for (id, state) in self.dropdowns.iter_mut() {
            if state.is_open {
                state.is_open = false;
                self.surface.dropdown_changed(id, false);
                closed += 1;
            }
        }
        closed
    }

    /// Close everything when a click lands outside the toggle and the panel.
    /// Returns whether the menu was closed.
    pub fn handle_outside_click(&mut self, target: ClickTarget) -> bool {
        if !target.is_outside() || !self.menu.is_open {
            return false;
        }
        debug!("Click outside navbar");
        self.close_menu()
    }

    /// Close the menu after a plain link is followed on mobile.
    /// Returns whether the menu was closed.
    pub fn handle_nav_link_click(&mut self, kind: LinkKind) -> bool {
        if kind != LinkKind::Plain || !self.viewport.is_mobile() || !self.menu.is_open {
            return false;
        }
        self.close_menu()
    }

    /// Record a raw resize event. Any earlier ticket is superseded.
    pub fn resize_event(&mut self, width: u32) -> ResizeTicket {
        self.debounce.schedule(width)
    }

    /// Apply a ticket once its delay has elapsed.
    ///
    /// Superseded tickets are ignored and return `None`.
    pub fn fire_resize(&mut self, ticket: &ResizeTicket) -> Option<Viewport> {
        let width = self.debounce.take(ticket)?;
        Some(self.handle_resize(width))
    }

    /// Recompute the viewport class for `width` right away.
    pub fn handle_resize(&mut self, width: u32) -> Viewport {
        let previous = self.viewport;
        let next = Viewport::classify(width, self.config.breakpoint_px);
        self.viewport = next;

        match (previous, next) {
            (Viewport::Mobile, Viewport::Desktop) => {
                debug!(width, "Crossed into desktop");
                self.close_menu();
                self.surface.native_disclosure(true);
            }
            (Viewport::Desktop, Viewport::Mobile) => {
                debug!(width, "Crossed into mobile");
                self.surface.native_disclosure(false);
            }
            (_, Viewport::Desktop) => {
                self.close_menu();
            }
            _ => {}
        }

        next
    }

    /// Release everything held on behalf of the page
    pub fn teardown(&mut self) {
        self.debounce.cancel();
        self.close_menu();
        debug!("Nav controller torn down");
    }

    fn index_of(&self, id: &DropdownId) -> NavResult<usize> {
        self.dropdowns
            .iter()
            .position(|(existing, _)| existing == id)
            .ok_or_else(|| NavError::UnknownDropdown(id.to_string()))
    }
}
