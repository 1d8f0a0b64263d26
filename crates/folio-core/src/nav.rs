//! Scroll-position driven navigation highlighting.

use crate::constants::NAV_ACTIVATION_OFFSET;

/// Layout of one page section as measured from the DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Scroll offset from which this section counts as current.
    pub fn activation_offset(&self) -> f64 {
        self.top - self.height / 3.0 - NAV_ACTIVATION_OFFSET
    }
}

/// The last section in document order whose activation offset has been
/// reached, or `None` above the first one.
pub fn active_section(scroll_y: f64, sections: &[SectionBox]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.activation_offset())
        .map(|s| s.id.as_str())
}
