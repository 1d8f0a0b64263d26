use crate::constants::{
    SAFARI_ROOT_CLASS, UP_NEXT_FRAMER_SELECTOR, UP_NEXT_INNER_SELECTOR, UP_NEXT_TOPIC_SELECTOR,
};
use crate::dom;
use folio_core::browser::is_safari;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Link and image defaults, the Safari root class and the up-next hover.
pub fn apply_defaults(document: &web::Document) {
    for el in dom::query_all(document, "a, img") {
        _ = el.set_attribute("draggable", "false");
    }

    dom::add_listener(document, "contextmenu", |ev: web::MouseEvent| {
        let tag = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| el.tag_name());
        if matches!(tag.as_deref(), Some("CANVAS" | "IMG")) {
            ev.prevent_default();
        }
    });

    let user_agent = web::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default();
    if is_safari(&user_agent) {
        if let Some(root) = document.document_element() {
            _ = root.class_list().add_1(SAFARI_ROOT_CLASS);
        }
        log::info!("[page] safari detected");
    }

    wire_up_next(document);
}

fn wire_up_next(document: &web::Document) {
    let Some(topic) = dom::query_html(document, UP_NEXT_TOPIC_SELECTOR) else {
        return;
    };
    let (Some(framer), Some(inner)) = (
        dom::query_html(document, UP_NEXT_FRAMER_SELECTOR),
        dom::query_html(document, UP_NEXT_INNER_SELECTOR),
    ) else {
        return;
    };

    let show = {
        let (framer, inner) = (framer.clone(), inner.clone());
        move |_ev: web::MouseEvent| {
            dom::set_style(&framer, "opacity", "1");
            dom::set_style(&framer, "scale", "1");
            dom::set_style(&inner, "scale", "1");
        }
    };
    let hide = move |_ev: web::MouseEvent| {
        dom::set_style(&framer, "opacity", "0");
        dom::set_style(&framer, "scale", "0.9");
        dom::set_style(&inner, "scale", "1.15");
    };
    dom::add_listener(&topic, "mouseenter", show);
    dom::add_listener(&topic, "mouseleave", hide);
}
