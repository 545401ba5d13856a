//! State types owned by the navigation controller.

use std::fmt;

/// Layout class derived from the viewport width
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Viewport {
    /// Below the breakpoint: collapsible menu, click-driven submenus
    Mobile,
    /// At or above the breakpoint: inline menu, native (hover) submenus
    Desktop,
}

impl Viewport {
    /// Classify a width against a breakpoint
    pub fn classify(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Viewport::Mobile)
    }

    /// CSS class for the navbar root
    pub fn class(&self) -> &'static str {
        match self {
            Viewport::Mobile => "viewport-mobile",
            Viewport::Desktop => "viewport-desktop",
        }
    }
}

/// Open/closed flag for the collapsible menu panel
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MenuState {
    pub is_open: bool,
}

/// Open/closed flag for one submenu
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DropdownState {
    pub is_open: bool,
}

/// Identifier of a submenu, unique within one menu
#[derive(Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct DropdownId(String);

impl DropdownId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for DropdownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DropdownId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DropdownId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Where a document click landed relative to the navbar
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickTarget {
    /// The hamburger toggle button
    Toggle,
    /// Anywhere inside the collapsible panel
    Panel,
    /// Everything else on the page
    Outside,
}

impl ClickTarget {
    pub fn is_outside(&self) -> bool {
        matches!(self, ClickTarget::Outside)
    }
}

/// Kind of link clicked inside the panel
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LinkKind {
    /// Navigates somewhere
    Plain,
    /// Opens a submenu instead of navigating
    DropdownToggle,
}

/// Shape of the host markup the controller binds to
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NavMarkup {
    pub has_toggle: bool,
    pub has_panel: bool,
    pub dropdowns: Vec<DropdownId>,
}

impl NavMarkup {
    /// Standard navbar: toggle + panel with the given submenus
    pub fn standard<I, D>(dropdowns: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<DropdownId>,
    {
        Self {
            has_toggle: true,
            has_panel: true,
            dropdowns: dropdowns.into_iter().map(Into::into).collect(),
        }
    }
}
