//! Section registry and dominance detection.
//!
//! Navigation only knows about a fixed, ordered list of named sections.
//! Whichever of them currently covers the most viewport height is the
//! "dominant" section; gestures are judged against its edges.

use super::geometry::{PageLayout, PlacedSection, Viewport};

/// Named anchor sections in navigation order (hero first).
pub const SECTION_REGISTRY: &[&str] = &["hero", "impression", "culture", "gardens", "cuisine"];

/// Result of a dominance query.
#[derive(Debug, Clone)]
pub struct Dominance<'a> {
    /// Index of the dominant section within `sections`.
    pub index: usize,
    pub section: &'a PlacedSection,
    /// Registry sections present on the page, in registry order.
    pub sections: Vec<&'a PlacedSection>,
}

impl<'a> Dominance<'a> {
    pub fn next(&self) -> Option<&'a PlacedSection> {
        self.sections.get(self.index + 1).copied()
    }

    pub fn prev(&self) -> Option<&'a PlacedSection> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.sections.get(i).copied())
    }
}

/// Registry sections that exist on `page`, keeping registry order.
pub fn present_sections<'a>(registry: &[&str], page: &'a PageLayout) -> Vec<&'a PlacedSection> {
    registry.iter().filter_map(|id| page.get(id)).collect()
}

/// Find the section occupying the most visible height.  Ties go to the
/// first-listed section.  Returns `None` when no registry section exists.
///
/// Reads live geometry on every call; nothing is cached.
pub fn dominant_section<'a>(
    registry: &[&str],
    page: &'a PageLayout,
    viewport: &Viewport,
) -> Option<Dominance<'a>> {
    let sections = present_sections(registry, page);
    if sections.is_empty() {
        return None;
    }

    let mut index = 0;
    let mut best = 0.0;
    for (i, section) in sections.iter().enumerate() {
        let visible = viewport.rect_of(section).visible_height(viewport.height);
        if visible > best {
            best = visible;
            index = i;
        }
    }

    Some(Dominance {
        index,
        section: sections[index],
        sections,
    })
}
