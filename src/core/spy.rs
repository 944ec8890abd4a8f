//! Scroll-derived page chrome: condensed navbar, back-to-top button and
//! the navbar's active anchor.

use super::geometry::PageLayout;

/// Offset past which the navbar switches to its condensed style.
pub const NAVBAR_CONDENSE_AFTER: f64 = 50.0;
/// Offset past which the back-to-top button appears.
pub const BACK_TO_TOP_AFTER: f64 = 300.0;
/// A section counts as reached this far before its top hits the viewport.
pub const SPY_LEAD: f64 = 150.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChromeState {
    pub navbar_condensed: bool,
    pub back_to_top_visible: bool,
    /// Section whose nav item is highlighted.
    pub active_anchor: Option<String>,
}

pub fn chrome_state(page: &PageLayout, scroll_offset: f64) -> ChromeState {
    let active_anchor = page
        .sections()
        .iter()
        .rev()
        .find(|s| scroll_offset >= s.doc_top - SPY_LEAD)
        .map(|s| s.id.clone());

    ChromeState {
        navbar_condensed: scroll_offset > NAVBAR_CONDENSE_AFTER,
        back_to_top_visible: scroll_offset > BACK_TO_TOP_AFTER,
        active_anchor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageLayout {
        PageLayout::stacked([("hero", 1000.0), ("impression", 800.0), ("culture", 800.0)])
    }

    #[test]
    fn top_of_page() {
        let c = chrome_state(&page(), 0.0);
        assert!(!c.navbar_condensed);
        assert!(!c.back_to_top_visible);
        assert_eq!(c.active_anchor.as_deref(), Some("hero"));
    }

    #[test]
    fn anchor_switches_ahead_of_section_top() {
        let c = chrome_state(&page(), 849.0);
        assert_eq!(c.active_anchor.as_deref(), Some("hero"));
        let c = chrome_state(&page(), 850.0);
        assert_eq!(c.active_anchor.as_deref(), Some("impression"));
        assert!(c.navbar_condensed && c.back_to_top_visible);
    }

    #[test]
    fn thresholds_are_exclusive() {
        let c = chrome_state(&page(), 50.0);
        assert!(!c.navbar_condensed);
        let c = chrome_state(&page(), 300.0);
        assert!(c.navbar_condensed);
        assert!(!c.back_to_top_visible);
    }
}
