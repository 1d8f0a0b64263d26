// DOM hooks the page markup exposes. Tuning values live in folio-core.

// Ripple surfaces
pub const RIPPLE_CANVAS_SELECTOR: &str = ".cvs";
pub const IMAGE_SOURCE_ATTR: &str = "data-img";

// Drag scrolling
pub const DRAGGING_BODY_CLASS: &str = "is-actively-dragging";
pub const SCROLL_TO_TOP_SELECTOR: &str = ".scroll-to-top";
pub const MAP_LINK_SELECTOR: &str = ".map-link";
pub const MAP_LINK_TARGET_ATTR: &str = "data-target";

// Navigation highlighting
pub const SECTION_SELECTOR: &str = "[id]";
pub const NAV_STROKE_SELECTOR: &str = ".map-link .stroke";
pub const NAV_SECTION_ATTR: &str = "data-section";
pub const ACTIVE_STROKE_CLASS: &str = "active-stroke";

// Parallax
pub const HERO_SELECTOR: &str = ".first";
pub const DIM_OVERLAY_SELECTOR: &str = ".turn-dark";
pub const PARALLAX_FRAME_SELECTOR: &str = ".parallaxy";

// "Up next" hover card
pub const UP_NEXT_TOPIC_SELECTOR: &str = ".u-n-topic";
pub const UP_NEXT_FRAMER_SELECTOR: &str = ".up-next-framer";
pub const UP_NEXT_INNER_SELECTOR: &str = ".up-next-inner";

// Browser quirks
pub const SAFARI_ROOT_CLASS: &str = "is-safari";
