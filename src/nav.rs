//! Mobile navigation panel
//!
//! Below the breakpoint the `.nav` element collapses into a panel opened by
//! a synthesized toggle button. The open flag is memory-only.

use crate::consts::NAV_BREAKPOINT_PX;

/// Icon shown on the toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuIcon {
    /// Closed panel ("hamburger")
    #[default]
    Bars,
    /// Open panel
    Times,
}

impl MenuIcon {
    pub fn for_state(open: bool) -> Self {
        if open { MenuIcon::Times } else { MenuIcon::Bars }
    }

    /// Class list of the icon element
    pub fn class_name(&self) -> &'static str {
        match self {
            MenuIcon::Bars => "fas fa-bars",
            MenuIcon::Times => "fas fa-times",
        }
    }

    /// Inner HTML for the toggle button
    pub fn markup(&self) -> String {
        format!("<i class=\"{}\"></i>", self.class_name())
    }
}

/// Whether a viewport width gets the inline (desktop) navigation
pub fn is_wide(width: f64) -> bool {
    width >= NAV_BREAKPOINT_PX
}

/// Open/closed state of the mobile panel
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn icon(&self) -> MenuIcon {
        MenuIcon::for_state(self.open)
    }

    /// Toggle button clicked
    pub fn toggle(&mut self) -> MenuIcon {
        self.open = !self.open;
        log::debug!("Mobile menu {}", if self.open { "opened" } else { "closed" });
        self.icon()
    }

    /// Force the panel closed (nav link or anchor clicked)
    pub fn close(&mut self) -> MenuIcon {
        self.open = false;
        self.icon()
    }

    /// Window resized. Crossing into the wide layout force-closes the panel
    /// regardless of its current state.
    pub fn resized(&mut self, width: f64) -> Option<MenuIcon> {
        if is_wide(width) {
            Some(self.close())
        } else {
            None
        }
    }

    /// Document click landed somewhere. Closes the panel unless the click was
    /// on the toggle button or inside the panel itself.
    pub fn clicked_elsewhere(&mut self, in_button: bool, in_panel: bool) -> Option<MenuIcon> {
        if in_button || in_panel {
            None
        } else {
            Some(self.close())
        }
    }
}

/// Styles injected for the toggle button and the collapsible panel
pub const MOBILE_MENU_CSS: &str = r#"
.mobile-menu-btn {
    display: block;
    width: 2.25rem;
    height: 2.25rem;
    border: none;
    background: none;
    cursor: pointer;
    border-radius: 0.375rem;
    color: var(--text-secondary);
    transition: background-color 0.3s ease;
}

.mobile-menu-btn:hover {
    background-color: var(--bg-tertiary);
}

@media (min-width: 768px) {
    .mobile-menu-btn {
        display: none;
    }
}

.nav.mobile-open {
    display: flex;
    flex-direction: column;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    background-color: var(--bg-secondary);
    border-top: 1px solid var(--border-color);
    padding: 1rem;
    gap: 1rem;
}

@media (min-width: 768px) {
    .nav.mobile-open {
        position: static;
        flex-direction: row;
        background: none;
        border: none;
        padding: 0;
        gap: 1.5rem;
    }
}
"#;
