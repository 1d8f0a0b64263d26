//! Scrubbed, scroll-linked tweens.
//!
//! A [`ScrollTween`] maps the page scroll offset linearly onto a property
//! range. Trigger points follow the usual "element edge meets viewport
//! edge" convention and are resolved to absolute scroll offsets up front.

use crate::constants::{
    DIM_TARGET_OPACITY, HERO_SHIFT_PERCENT, IMAGE_SHIFT_PERCENT, PARALLAX_SCRUB_LENGTH,
};

/// Document-space vertical extent of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub bottom: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Offset at which this element's top meets the viewport bottom.
    pub fn top_meets_bottom(&self, viewport_height: f64) -> f64 {
        self.top - viewport_height
    }

    /// Offset at which this element's bottom meets the viewport bottom.
    pub fn bottom_meets_bottom(&self, viewport_height: f64) -> f64 {
        self.bottom - viewport_height
    }

    /// Offset at which this element's bottom meets the viewport top.
    pub fn bottom_meets_top(&self) -> f64 {
        self.bottom
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTween {
    pub start: f64,
    pub end: f64,
    pub from: f64,
    pub to: f64,
}

impl ScrollTween {
    /// Normalized progress in `[0, 1]` at `scroll`.
    pub fn progress(&self, scroll: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if scroll >= self.end { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / span).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, scroll: f64) -> f64 {
        self.from + (self.to - self.from) * self.progress(scroll)
    }

    /// Hero block: drifts down to 300 % of its height once its bottom
    /// reaches the viewport bottom.
    pub fn hero_shift(hero: Extent, viewport_height: f64) -> Self {
        let start = hero.bottom_meets_bottom(viewport_height);
        Self {
            start,
            end: start + PARALLAX_SCRUB_LENGTH,
            from: 0.0,
            to: HERO_SHIFT_PERCENT,
        }
    }

    /// Overlay dimming while the hero scrolls out of view.
    pub fn hero_dim(hero: Extent, viewport_height: f64) -> Self {
        Self {
            start: hero.bottom_meets_bottom(viewport_height),
            end: hero.bottom_meets_top(),
            from: 1.0,
            to: DIM_TARGET_OPACITY,
        }
    }

    /// Image inside a `.parallaxy` frame, starting as the frame enters.
    pub fn image_shift(frame: Extent, viewport_height: f64) -> Self {
        let start = frame.top_meets_bottom(viewport_height);
        Self {
            start,
            end: start + PARALLAX_SCRUB_LENGTH,
            from: 0.0,
            to: IMAGE_SHIFT_PERCENT,
        }
    }
}
