//! Drag-to-scroll and keyboard scroll targeting.
//!
//! The page scroller itself is external; this module only decides where it
//! should go next. Each animation frame the host asks [`DragScroll::step`]
//! for the next position and forwards it to its scroll controller.

use crate::constants::{
    DRAG_SENSITIVITY, KEY_SCROLL_STEP, MAP_LINK_OFFSET, SCROLL_EASE_DISTANCE,
    SCROLL_SETTLE_EPSILON,
};

/// Clamp a scroll offset into `[0, max_scroll]`.
#[inline]
pub fn clamp_scroll(y: f64, max_scroll: f64) -> f64 {
    y.min(max_scroll).max(0.0)
}

#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Document offset a map link should scroll to for a target whose
/// bounding box top is `rect_top` (client space).
#[inline]
pub fn anchor_offset(rect_top: f64, scroll_y: f64) -> f64 {
    rect_top + scroll_y - MAP_LINK_OFFSET
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollKey {
    Up,
    Down,
    Page,
}

impl ScrollKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "ArrowLeft" => Some(Self::Up),
            "ArrowDown" | "ArrowRight" => Some(Self::Down),
            " " => Some(Self::Page),
            _ => None,
        }
    }

    /// Signed distance this key scrolls for a viewport `viewport_height` tall.
    pub fn delta(self, viewport_height: f64) -> f64 {
        match self {
            Self::Up => -KEY_SCROLL_STEP,
            Self::Down => KEY_SCROLL_STEP,
            Self::Page => viewport_height,
        }
    }
}

/// Result of one animation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollStep {
    pub position: f64,
    pub settled: bool,
}

#[derive(Clone, Debug, Default)]
pub struct DragScroll {
    dragging: bool,
    start_y: f64,
    start_scroll: f64,
    target: f64,
    animating: bool,
}

impl DragScroll {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Primary button went down at `client_y` while the page sat at `scroll`.
    pub fn begin(&mut self, client_y: f64, scroll: f64) {
        self.dragging = true;
        self.start_y = client_y;
        self.start_scroll = scroll;
    }

    /// Pointer moved to `client_y`. Returns the new target while dragging.
    pub fn drag_to(&mut self, client_y: f64, max_scroll: f64) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        let delta = (client_y - self.start_y) * DRAG_SENSITIVITY;
        self.target = clamp_scroll(self.start_scroll - delta, max_scroll);
        Some(self.target)
    }

    /// Button released or drag cancelled; returns whether a drag was live.
    pub fn end(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    /// Retarget from a key press relative to the current offset.
    pub fn key_target(
        &mut self,
        key: ScrollKey,
        scroll: f64,
        viewport_height: f64,
        max_scroll: f64,
    ) -> f64 {
        self.target = clamp_scroll(scroll + key.delta(viewport_height), max_scroll);
        self.target
    }

    /// Mark the animation as running. Returns `true` if the caller must
    /// start a new frame loop, `false` if one is already in flight.
    pub fn start_animation(&mut self) -> bool {
        !std::mem::replace(&mut self.animating, true)
    }

    /// Move from `current` toward the target. Large gaps are closed in one
    /// step; gaps under the ease distance close along an ease-out curve.
    pub fn step(&mut self, current: f64) -> ScrollStep {
        let distance = self.target - current;
        let t = (distance.abs() / SCROLL_EASE_DISTANCE).min(1.0);
        let position = current + distance * ease_out_cubic(t);
        let settled = (self.target - position).abs() <= SCROLL_SETTLE_EPSILON;
        if settled {
            self.animating = false;
        }
        ScrollStep { position, settled }
    }
}
