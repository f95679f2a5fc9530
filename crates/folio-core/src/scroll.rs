//! Global scroll position and navigation tracking.

use crate::constants::{NAV_SCROLLED_THRESHOLD_PX, NAV_SPY_OFFSET_PX};
use crate::geometry::Viewport;

/// Process-wide scroll snapshot. Only the host writes it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f32,
    pub viewport: Viewport,
}

impl ScrollState {
    pub fn new(scroll_y: f32, viewport: Viewport) -> Self {
        Self { scroll_y, viewport }
    }
}

/// Whether the page has scrolled far enough for the compact nav style.
#[inline]
pub fn is_scrolled(scroll_y: f32) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD_PX
}

/// A navigable section in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f32,
}

/// Picks the section the nav should highlight.
#[derive(Clone, Debug)]
pub struct ScrollSpy {
    sections: Vec<Section>,
    offset: f32,
    active: Option<usize>,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ScrollSpy {
    pub fn new(mut sections: Vec<Section>) -> Self {
        sections.sort_by(|a, b| a.top.total_cmp(&b.top));
        Self {
            sections,
            offset: NAV_SPY_OFFSET_PX,
            active: None,
        }
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Replaces section tops after a layout change, keeping the order
    /// invariant.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        *self = Self::new(sections).with_offset(self.offset);
    }

    /// Updates the active section for `scroll_y`. Returns whether it changed;
    /// read the new value with [`ScrollSpy::active`].
    pub fn update(&mut self, scroll_y: f32) -> bool {
        let line = scroll_y + self.offset;
        let next = self.sections.iter().rposition(|s| s.top <= line);
        if next == self.active {
            return false;
        }
        self.active = next;
        true
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.sections[i].id.as_str())
    }
}
