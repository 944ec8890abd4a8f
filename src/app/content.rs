//! The presented page: section texts and how they are laid out in pixels.

use crate::core::geometry::PageLayout;

/// Static copy for one section.
pub struct SectionContent {
    pub id: &'static str,
    /// Label in the navbar.
    pub nav: &'static str,
    pub title: &'static str,
    pub body: &'static [&'static str],
}

/// Page sections in document order.  Ids match the navigation registry.
pub static SECTIONS: &[SectionContent] = &[
    SectionContent {
        id: "hero",
        nav: "Home",
        title: "Suzhou, Jiangnan",
        body: &[
            "A city of canals, stone bridges and whitewashed walls under black tiles.",
        ],
    },
    SectionContent {
        id: "impression",
        nav: "Impression",
        title: "First Impression",
        body: &[
            "Boats drift along Pingjiang Road while lanterns come on one by one.",
            "The old town keeps its grid of water lanes and streets side by side, so every walk crosses the same canal a dozen times from a different bridge.",
            "Morning belongs to tea houses and the clack of mahjong tiles; evening to the slow paddle of a wooden boat and a boatwoman's song echoing off the walls.",
            "Rain is frequent and soft. It darkens the tiles, polishes the flagstones and turns every courtyard into a reflecting pool.",
            "Stay long enough and the rhythm settles in: a bridge, a lane, a doorway, a garden wall, and the water again.",
        ],
    },
    SectionContent {
        id: "culture",
        nav: "Culture",
        title: "Kunqu and Silk",
        body: &[
            "Kunqu opera, six centuries old, is sung in a soft Wu dialect to the flute.",
            "Suzhou embroidery works silk threads split into sixteen strands, fine enough to paint a cat's fur on both faces of one cloth.",
        ],
    },
    SectionContent {
        id: "gardens",
        nav: "Gardens",
        title: "Classical Gardens",
        body: &[
            "The Humble Administrator's Garden, the Lingering Garden and the Master of the Nets compress mountains and lakes into a courtyard.",
            "Every window frames a picture; every path is laid so the view changes at each step.",
        ],
    },
    SectionContent {
        id: "cuisine",
        nav: "Cuisine",
        title: "Su Cuisine",
        body: &[
            "Squirrel-shaped mandarin fish, sweet and sour, arrives at the table still crackling.",
            "Spring brings Biluochun tea from Dongting hill; autumn brings hairy crabs from Yangcheng Lake.",
        ],
    },
];

/// Rows between a section's top and its title (room under the header).
pub const SECTION_PAD_TOP: u16 = 5;
/// Rows below the last body line.
pub const SECTION_PAD_BOTTOM: u16 = 3;

/// Greedy word wrap to `width` columns.  Overlong words are hard-split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let split = word
                .char_indices()
                .nth(width)
                .map_or(word.len(), |(i, _)| i);
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
        if word.is_empty() {
            continue;
        }
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Body of `section` wrapped for a page `text_width` columns wide, with a
/// blank line between paragraphs.
pub fn body_lines(section: &SectionContent, text_width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for (i, para) in section.body.iter().enumerate() {
        if i > 0 {
            out.push(String::new());
        }
        out.extend(wrap(para, text_width));
    }
    out
}

/// Text column width for a terminal `width` columns wide.
pub fn text_width(width: u16) -> usize {
    usize::from(width.saturating_sub(8)).clamp(10, 96)
}

/// Lay the sections out for a terminal `width` columns wide whose page
/// area is `viewport_rows` tall.  The hero fills the viewport; every other
/// section is at least one viewport minus the header tall, more if its
/// text needs it.
pub fn build_page(width: u16, viewport_rows: u16, header_rows: u16, px_per_row: f64) -> PageLayout {
    let text_width = text_width(width);
    let min_rows = viewport_rows.saturating_sub(header_rows).max(1);

    PageLayout::stacked(SECTIONS.iter().map(|section| {
        let rows = if section.id == "hero" {
            viewport_rows.max(1)
        } else {
            let text_rows = 2 + body_lines(section, text_width).len() as u16;
            (SECTION_PAD_TOP + text_rows + SECTION_PAD_BOTTOM).max(min_rows)
        };
        (section.id, f64::from(rows) * px_per_row)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::section::SECTION_REGISTRY;

    #[test]
    fn sections_match_navigation_registry() {
        let ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, SECTION_REGISTRY);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn wrap_splits_overlong_words() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn hero_fills_viewport_and_narrow_terminals_grow_sections() {
        let wide = build_page(120, 40, 4, 20.0);
        let narrow = build_page(30, 40, 4, 20.0);
        assert_eq!(wide.get("hero").map(|s| s.height), Some(800.0));
        let h = |p: &PageLayout| p.get("impression").map_or(0.0, |s| s.height);
        assert!(h(&narrow) > h(&wide));
        assert!(wide.sections().iter().skip(1).all(|s| s.height >= 36.0 * 20.0));
    }
}
