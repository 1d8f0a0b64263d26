// Host-side checks on the DOM hooks the page markup relies on.
// The main crate is wasm-only, so the constants file is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::NAV_SECTION_NAMES;

const CLASS_SELECTORS: &[&str] = &[
    RIPPLE_CANVAS_SELECTOR,
    SCROLL_TO_TOP_SELECTOR,
    MAP_LINK_SELECTOR,
    HERO_SELECTOR,
    DIM_OVERLAY_SELECTOR,
    PARALLAX_FRAME_SELECTOR,
    UP_NEXT_TOPIC_SELECTOR,
    UP_NEXT_FRAMER_SELECTOR,
    UP_NEXT_INNER_SELECTOR,
];

const BARE_NAMES: &[&str] = &[
    IMAGE_SOURCE_ATTR,
    DRAGGING_BODY_CLASS,
    MAP_LINK_TARGET_ATTR,
    NAV_SECTION_ATTR,
    ACTIVE_STROKE_CLASS,
    SAFARI_ROOT_CLASS,
];

#[test]
fn class_selectors_are_single_classes() {
    for sel in CLASS_SELECTORS {
        assert!(sel.starts_with('.'), "{sel} should be a class selector");
        assert!(!sel[1..].contains(&['.', ' ', '#'][..]), "{sel} should be a single class");
    }
}

#[test]
fn attribute_and_class_names_are_bare() {
    for name in BARE_NAMES {
        assert!(!name.is_empty());
        assert!(
            name.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
            "{name} should be a bare lowercase name"
        );
    }
}

#[test]
fn image_source_is_a_data_attribute() {
    assert!(IMAGE_SOURCE_ATTR.starts_with("data-"));
    assert!(MAP_LINK_TARGET_ATTR.starts_with("data-"));
    assert!(NAV_SECTION_ATTR.starts_with("data-"));
}

#[test]
fn nav_strokes_live_inside_map_links() {
    assert!(NAV_STROKE_SELECTOR.starts_with(MAP_LINK_SELECTOR));
    assert!(NAV_STROKE_SELECTOR.ends_with(".stroke"));
}

#[test]
fn active_stroke_selector_is_well_formed() {
    // Same shape nav highlighting builds at runtime
    for name in NAV_SECTION_NAMES {
        let selector = format!("{MAP_LINK_SELECTOR}[{NAV_SECTION_ATTR}=\"{name}\"] .stroke");
        assert_eq!(selector.matches('"').count(), 2);
        assert!(selector.contains(name));
    }
}
