use crate::error::FxError;
use folio_core::{effective_dpr, SurfaceSize};
use gloo::events::EventListener;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Run `f` once the document has been parsed.
pub fn on_dom_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() == "loading" {
        EventListener::once(document, "DOMContentLoaded", move |_event| f()).forget();
    } else {
        f();
    }
}

/// Run `f` once every subresource (images included) has loaded, or right
/// away if that already happened.
pub fn on_window_load(window: &web::Window, f: impl FnOnce() + 'static) {
    let complete = window
        .document()
        .map_or(false, |d| d.ready_state() == "complete");
    if complete {
        f();
    } else {
        EventListener::once(window, "load", move |_event| f()).forget();
    }
}

/// Ratio used for ripple backing stores (clamped, see `effective_dpr`).
#[inline]
pub fn device_pixel_ratio() -> f64 {
    effective_dpr(web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0))
}

/// Backing-store size for the canvas' current CSS box.
pub fn surface_backing_size(canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    SurfaceSize::from_css(
        canvas.client_width() as f64,
        canvas.client_height() as f64,
        device_pixel_ratio(),
    )
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, property: &str) {
    _ = el.style().remove_property(property);
}

/// Load an image and wait until it is decoded and ready for upload.
pub async fn load_image(url: &str) -> Result<web::HtmlImageElement, FxError> {
    let image = web::HtmlImageElement::new().map_err(FxError::dom)?;
    image.set_src(url);
    JsFuture::from(image.decode())
        .await
        .map_err(|_| FxError::ImageLoad {
            url: url.to_owned(),
        })?;
    Ok(image)
}
