use crate::constants::{
    ACTIVE_STROKE_CLASS, MAP_LINK_SELECTOR, NAV_SECTION_ATTR, NAV_STROKE_SELECTOR,
    SECTION_SELECTOR,
};
use crate::dom;
use folio_core::nav::{active_section, SectionBox};
use folio_core::NAV_SECTION_NAMES;
use wasm_bindgen::JsCast;
use web_sys as web;

fn measure_sections(document: &web::Document) -> Vec<SectionBox> {
    dom::query_all(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| SectionBox::new(el.id(), el.offset_top() as f64, el.client_height() as f64))
        .collect()
}

fn highlight(document: &web::Document, scroll_y: f64) {
    for stroke in dom::query_all(document, NAV_STROKE_SELECTOR) {
        _ = stroke.class_list().remove_1(ACTIVE_STROKE_CLASS);
    }
    let sections = measure_sections(document);
    let Some(id) = active_section(scroll_y, &sections) else {
        return;
    };
    let selector = format!(
        "{}[{}=\"{}\"] .stroke",
        MAP_LINK_SELECTOR, NAV_SECTION_ATTR, id
    );
    if let Ok(Some(stroke)) = document.query_selector(&selector) {
        _ = stroke.class_list().add_1(ACTIVE_STROKE_CLASS);
    }
}

/// Highlight the map link of whichever section the page is scrolled to.
pub fn wire(document: &web::Document) {
    let sections = dom::query_all(document, SECTION_SELECTOR);
    let strokes = dom::query_all(document, NAV_STROKE_SELECTOR);
    let links = dom::query_all(document, MAP_LINK_SELECTOR);
    if sections.is_empty() || strokes.is_empty() || links.len() < NAV_SECTION_NAMES.len() {
        log::warn!(
            "[nav] missing markup: {} section(s), {} stroke(s), {} link(s)",
            sections.len(),
            strokes.len(),
            links.len()
        );
        return;
    }
    for (link, name) in links.iter().zip(NAV_SECTION_NAMES) {
        _ = link.set_attribute(NAV_SECTION_ATTR, name);
    }

    let Some(window) = web::window() else {
        return;
    };
    highlight(document, window.scroll_y().unwrap_or(0.0));

    let doc = document.clone();
    let win = window.clone();
    dom::add_listener(&window, "scroll", move |_ev: web::Event| {
        highlight(&doc, win.scroll_y().unwrap_or(0.0));
    });
}
