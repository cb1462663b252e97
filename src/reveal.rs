//! Scroll-triggered reveal
//!
//! Every target starts hidden and offset. The first time an element is
//! reported intersecting it is shown and dropped from observation. Shown is
//! terminal.

/// Elements that fade in on first view
pub const TARGET_SELECTOR: &str =
    ".hero-content, .section-header, .project-card, .contact-card, .skill-item";

/// Fraction of the element that must be visible
pub const THRESHOLD: f64 = 0.1;
/// Trigger slightly before the element reaches the viewport bottom
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Attribute mapping an observed element back to its slot
pub const INDEX_ATTRIBUTE: &str = "data-reveal-index";

/// Inline style values for one visual state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

pub const HIDDEN_STYLE: RevealStyle = RevealStyle {
    opacity: "0",
    transform: "translateY(20px)",
};

pub const SHOWN_STYLE: RevealStyle = RevealStyle {
    opacity: "1",
    transform: "translateY(0)",
};

pub const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Shown,
}

impl RevealState {
    pub fn style(&self) -> RevealStyle {
        match self {
            RevealState::Hidden => HIDDEN_STYLE,
            RevealState::Shown => SHOWN_STYLE,
        }
    }
}

/// Reveal state for every target, in document order
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    states: Vec<RevealState>,
}

impl RevealSet {
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![RevealState::Hidden; count],
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    pub fn shown_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Shown)
            .count()
    }

    /// Feed one intersection report.
    ///
    /// Returns true exactly once per element: the caller applies
    /// [`SHOWN_STYLE`] and stops observing it.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        let Some(state) = self.states.get_mut(index) else {
            return false;
        };
        if !intersecting || *state == RevealState::Shown {
            return false;
        }
        *state = RevealState::Shown;
        log::debug!("Revealed element {index}");
        true
    }
}
