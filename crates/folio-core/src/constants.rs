//! Frame-stepped tuning constants for the ripple surfaces and page effects.
//!
//! Rates are expressed per animation frame, not per second, so the effect
//! is paced by the display refresh.

// Pointer easing: fraction of the remaining distance covered each frame
pub const POINTER_SMOOTHING: f32 = 0.08;

// Ripple intensity envelope
pub const INTENSITY_RISE_PER_FRAME: f32 = 0.1;
pub const INTENSITY_DECAY_PER_FRAME: f32 = 0.03;
pub const EXIT_START_THRESHOLD: f32 = 0.1; // exit hand-off begins below this intensity
pub const EXIT_PROGRESS_PER_FRAME: f32 = 0.04;

// Shader clock advance per frame (~1/60 s)
pub const CLOCK_STEP: f32 = 0.016;

// Backing store scale; lower ratios are bumped up for crisper ripples
pub const MIN_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Window resize quiescence before surfaces are re-measured
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

// Shader shape (normalized surface units)
pub const RIPPLE_BASE_RADIUS: f32 = 0.3;
pub const RIPPLE_EDGE_WIDTH: f32 = 0.05;

// Drag / keyboard scrolling
pub const DRAG_SENSITIVITY: f64 = 1.2;
pub const KEY_SCROLL_STEP: f64 = 200.0;
pub const SCROLL_EASE_DISTANCE: f64 = 100.0; // distance at which the ease saturates
pub const SCROLL_SETTLE_EPSILON: f64 = 0.5;
pub const MAP_LINK_OFFSET: f64 = 50.0;

// Navigation highlighting
pub const NAV_ACTIVATION_OFFSET: f64 = 200.0;
pub const NAV_SECTION_NAMES: [&str; 3] = ["summary", "principles", "experience"];

// Parallax extents
pub const PARALLAX_SCRUB_LENGTH: f64 = 10_000.0; // "+=10000" trigger end
pub const HERO_SHIFT_PERCENT: f64 = 300.0;
pub const IMAGE_SHIFT_PERCENT: f64 = 190.0;
pub const DIM_TARGET_OPACITY: f64 = 0.4;
