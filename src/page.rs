//! Page-level bootstrap: whole-page fade-in and the footer year

use crate::consts::PAGE_FADE_DELAY_MS;

/// Body style before and after the deferred fade-in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageFade {
    pub initial_opacity: &'static str,
    pub final_opacity: &'static str,
    pub transition: &'static str,
    pub delay_ms: u32,
}

impl Default for PageFade {
    fn default() -> Self {
        Self {
            initial_opacity: "0",
            final_opacity: "1",
            transition: "opacity 0.5s ease",
            delay_ms: PAGE_FADE_DELAY_MS,
        }
    }
}

/// Whether `document.readyState` means the DOM is still being parsed.
///
/// Behaviours wait for `DOMContentLoaded` in that case; otherwise they
/// install immediately.
pub fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Footer text for the current calendar year
pub fn year_text(year: u32) -> String {
    year.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_defaults() {
        let fade = PageFade::default();
        assert_eq!(fade.delay_ms, 100);
        assert_eq!(fade.initial_opacity, "0");
        assert_eq!(fade.final_opacity, "1");
    }

    #[test]
    fn test_is_loading() {
        assert!(is_loading("loading"));
        assert!(!is_loading("interactive"));
        assert!(!is_loading("complete"));
    }

    #[test]
    fn test_year_text() {
        assert_eq!(year_text(2026), "2026");
    }
}
