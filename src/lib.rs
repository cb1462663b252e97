//! Portfolio interactions - client-side behaviour for a static portfolio site
//!
//! Core modules (pure, testable on native targets):
//! - `theme`: Light/dark preference with persistence and OS fallback
//! - `nav`: Mobile navigation panel state
//! - `scroll`: In-page anchor scroll targets
//! - `reveal`: One-shot scroll-triggered fade-in
//! - `header`: Header background switch on scroll
//! - `contact`: Tagged contact/profile action buttons
//! - `forms`: Generic and newsletter form handling
//! - `page`: Page fade-in and footer year
//! - `config`: Site configuration (contact details, messages)
//!
//! Browser glue lives in `web` and is only built for `wasm32`.

pub mod config;
pub mod contact;
pub mod error;
pub mod forms;
pub mod header;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use theme::{Theme, ThemeController, ThemeStore};

/// Shared constants for the page contract
pub mod consts {
    /// Viewport width at and above which the navigation renders inline
    pub const NAV_BREAKPOINT_PX: f64 = 768.0;

    /// Vertical scroll offset past which the header switches style
    pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 100.0;

    /// Delay before the whole-page fade-in starts
    pub const PAGE_FADE_DELAY_MS: u32 = 100;

    /// LocalStorage key holding the theme preference
    pub const THEME_STORAGE_KEY: &str = "theme";
    /// Attribute on `<html>` mirroring the active theme
    pub const THEME_ATTRIBUTE: &str = "data-theme";
    /// Media query reporting the OS dark-mode preference
    pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

    // Page markup contract
    pub const HEADER_SELECTOR: &str = ".header";
    pub const HEADER_RIGHT_SELECTOR: &str = ".header-right";
    pub const NAV_SELECTOR: &str = ".nav";
    pub const NAV_LINK_SELECTOR: &str = ".nav-link";
    pub const THEME_TOGGLE_ID: &str = "themeToggle";
    pub const MENU_BUTTON_CLASS: &str = "mobile-menu-btn";
    pub const NAV_OPEN_CLASS: &str = "mobile-open";
    pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
    pub const YEAR_ID: &str = "currentYear";
    pub const NEWSLETTER_SELECTOR: &str = ".newsletter-form";
    pub const CONTACT_FORM_SELECTOR: &str = "form[data-form=\"contact\"]";
    pub const ACTION_SELECTOR: &str = "[data-action]";
    pub const ACTION_ATTRIBUTE: &str = "data-action";
    pub const SITE_CONFIG_ID: &str = "site-config";
}
