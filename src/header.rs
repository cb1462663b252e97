//! Header background switch on scroll

use crate::consts::HEADER_SCROLL_THRESHOLD_PX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderStyle {
    /// Near the top of the page
    #[default]
    Resting,
    /// Scrolled past the threshold
    Scrolled,
}

impl HeaderStyle {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > HEADER_SCROLL_THRESHOLD_PX {
            HeaderStyle::Scrolled
        } else {
            HeaderStyle::Resting
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            HeaderStyle::Resting => "rgba(255, 255, 255, 0.95)",
            HeaderStyle::Scrolled => "rgba(255, 255, 255, 0.98)",
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            HeaderStyle::Resting => "none",
            HeaderStyle::Scrolled => "0 2px 10px rgba(0, 0, 0, 0.1)",
        }
    }
}

/// Tracks the applied style so the DOM is only touched on change
#[derive(Debug, Clone, Default)]
pub struct HeaderScroll {
    applied: Option<HeaderStyle>,
}

impl HeaderScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the style to write, or `None` if it is already applied
    pub fn update(&mut self, scroll_y: f64) -> Option<HeaderStyle> {
        let style = HeaderStyle::for_scroll(scroll_y);
        if self.applied == Some(style) {
            return None;
        }
        self.applied = Some(style);
        Some(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(HeaderStyle::for_scroll(0.0), HeaderStyle::Resting);
        assert_eq!(HeaderStyle::for_scroll(100.0), HeaderStyle::Resting);
        assert_eq!(HeaderStyle::for_scroll(100.5), HeaderStyle::Scrolled);
    }

    #[test]
    fn test_style_values() {
        assert_eq!(HeaderStyle::Resting.box_shadow(), "none");
        assert_eq!(HeaderStyle::Scrolled.background(), "rgba(255, 255, 255, 0.98)");
    }

    #[test]
    fn test_update_only_on_change() {
        let mut header = HeaderScroll::new();
        assert_eq!(header.update(0.0), Some(HeaderStyle::Resting));
        assert_eq!(header.update(50.0), None);
        assert_eq!(header.update(250.0), Some(HeaderStyle::Scrolled));
        assert_eq!(header.update(300.0), None);
        assert_eq!(header.update(10.0), Some(HeaderStyle::Resting));
    }
}
