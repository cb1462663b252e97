//! Smooth scrolling for in-page anchors

/// Fragment id of a local anchor href (`"#about"` -> `"about"`)
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document-relative top of an element from its viewport rect and the
/// current scroll offset. Independent of positioned ancestors.
#[inline]
pub fn document_top(client_top: f64, scroll_y: f64) -> f64 {
    client_top + scroll_y
}

/// Document offset that places the target just below the fixed header
#[inline]
pub fn scroll_target(element_top: f64, header_height: f64) -> f64 {
    element_top - header_height
}

/// Outcome of an anchor click
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPlan {
    /// Where to scroll, `None` when the fragment has no target
    pub top: Option<f64>,
    /// The mobile panel is closed whether or not a scroll happens
    pub close_menu: bool,
}

/// Resolve an anchor click. `lookup` maps an element id to its
/// document-relative top.
pub fn plan<F>(href: &str, lookup: F, header_height: f64) -> ScrollPlan
where
    F: FnOnce(&str) -> Option<f64>,
{
    let top = fragment_id(href)
        .and_then(lookup)
        .map(|element_top| scroll_target(element_top, header_height));
    if top.is_none() {
        log::debug!("No scroll target for {href}");
    }
    ScrollPlan {
        top,
        close_menu: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#about"), Some("about"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/about"), None);
        assert_eq!(fragment_id("https://example.com/#about"), None);
    }

    #[test]
    fn test_plan_existing_target() {
        let plan = plan("#about", |id| (id == "about").then_some(820.0), 72.0);
        assert_eq!(plan.top, Some(748.0));
        assert!(plan.close_menu);
    }

    #[test]
    fn test_document_top_ignores_offset_parent() {
        // Section 40px below the viewport top after scrolling 1200px
        assert_eq!(document_top(40.0, 1200.0), 1240.0);
        // Section above the viewport
        assert_eq!(document_top(-300.0, 1200.0), 900.0);
        let plan = plan("#about", |_| Some(document_top(40.0, 1200.0)), 72.0);
        assert_eq!(plan.top, Some(1168.0));
    }

    #[test]
    fn test_plan_follows_current_href() {
        let lookup = |id: &str| match id {
            "about" => Some(500.0),
            "projects" => Some(1500.0),
            _ => None,
        };
        // Same anchor, href rewritten between clicks
        assert_eq!(plan("#about", lookup, 0.0).top, Some(500.0));
        assert_eq!(plan("#projects", lookup, 0.0).top, Some(1500.0));
        assert_eq!(plan("", lookup, 0.0).top, None);
    }

    #[test]
    fn test_plan_missing_target_is_noop() {
        let plan = plan("#missing", |_| None, 72.0);
        assert_eq!(plan.top, None);
        assert!(plan.close_menu);
    }

    #[test]
    fn test_plan_bare_hash_never_looks_up() {
        let plan = plan("#", |_| panic!("lookup must not run"), 72.0);
        assert_eq!(plan.top, None);
        assert!(plan.close_menu);
    }

    proptest! {
        #[test]
        fn prop_target_is_top_minus_header(top in 0.0f64..50_000.0, header in 0.0f64..400.0) {
            let plan = plan("#section", |_| Some(top), header);
            prop_assert_eq!(plan.top, Some(top - header));
        }
    }
}
