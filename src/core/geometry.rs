//! Page geometry: stacked sections in document space and the viewport
//! looking onto them.
//!
//! All values are in "pixels".  The terminal host converts to rows with a
//! fixed pixels-per-row factor; nothing in here knows about cells.

/// A laid-out section: document-relative top and height.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSection {
    pub id: String,
    pub doc_top: f64,
    pub height: f64,
}

impl PlacedSection {
    pub fn doc_bottom(&self) -> f64 {
        self.doc_top + self.height
    }
}

/// Bounding box relative to the viewport top (like `getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRect {
    pub top: f64,
    pub bottom: f64,
}

impl ViewRect {
    /// Height of the part of this box inside `[0, viewport_height]`.
    pub fn visible_height(&self, viewport_height: f64) -> f64 {
        let visible_top = self.top.max(0.0);
        let visible_bottom = self.bottom.min(viewport_height);
        (visible_bottom - visible_top).max(0.0)
    }
}

/// The document: sections stacked top to bottom, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    sections: Vec<PlacedSection>,
}

impl PageLayout {
    /// Stack sections one after another starting at document offset 0.
    pub fn stacked<I, S>(heights: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut top = 0.0;
        let sections = heights
            .into_iter()
            .map(|(id, height)| {
                let height = height.max(0.0);
                let placed = PlacedSection {
                    id: id.into(),
                    doc_top: top,
                    height,
                };
                top += height;
                placed
            })
            .collect();
        Self { sections }
    }

    pub fn sections(&self) -> &[PlacedSection] {
        &self.sections
    }

    pub fn get(&self, id: &str) -> Option<&PlacedSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn height(&self) -> f64 {
        self.sections.last().map_or(0.0, PlacedSection::doc_bottom)
    }
}

/// The window onto the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Visible height in pixels.
    pub height: f64,
    /// Current scroll offset (document y at the viewport top).
    scroll_offset: f64,
    /// Total document height; bounds the scroll offset.
    document_height: f64,
}

impl Viewport {
    pub fn new(height: f64, document_height: f64) -> Self {
        Self {
            height: height.max(0.0),
            scroll_offset: 0.0,
            document_height: document_height.max(0.0),
        }
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.height).max(0.0)
    }

    /// Set the scroll offset, clamped to the scrollable range like
    /// `window.scrollTo` does.
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = offset.clamp(0.0, self.max_scroll());
    }

    /// Relative scroll (native wheel/drag behaviour).
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.scroll_offset + delta);
    }

    /// Adopt a new size / document height, keeping the offset in range.
    pub fn resize(&mut self, height: f64, document_height: f64) {
        self.height = height.max(0.0);
        self.document_height = document_height.max(0.0);
        self.scroll_to(self.scroll_offset);
    }

    /// Live bounding box of `section` relative to this viewport.
    pub fn rect_of(&self, section: &PlacedSection) -> ViewRect {
        let top = section.doc_top - self.scroll_offset;
        ViewRect {
            top,
            bottom: top + section.height,
        }
    }
}
