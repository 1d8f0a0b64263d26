#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod error;
mod events;
mod frame;
mod nav;
mod page;
mod parallax;
mod registry;
mod render;
mod resize;
mod scroll;

pub use dom::on_window_load;
pub use error::FxError;
pub use events::wire_drag_scroll;
pub use frame::FrameLoop;
pub use page::apply_defaults;
pub use registry::CanvasRegistry;
pub use render::RippleRenderer;
pub use resize::Debounced;
pub use scroll::{ScrollController, WindowScroller};

thread_local! {
    static REGISTRY: RefCell<Option<CanvasRegistry>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: {}", FxError::NoDocument);
        return Ok(());
    };
    let ready_doc = document.clone();
    dom::on_dom_ready(&document, move || {
        if let Err(e) = init(&ready_doc) {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or(FxError::NoDocument)?;

    page::apply_defaults(document);

    let scroller: Rc<dyn scroll::ScrollController> = Rc::new(scroll::WindowScroller::new(window));
    let wiring = events::wire_drag_scroll(document, scroller);
    events::wire_scroll_links(&wiring);

    nav::wire(document);
    parallax::wire(document);

    let registry = CanvasRegistry::discover(document);
    if registry.is_empty() {
        log::info!("[registry] no ripple canvases on this page");
    }
    REGISTRY.with(|slot| *slot.borrow_mut() = Some(registry));
    Ok(())
}

/// Stop every ripple loop and release its GL resources and listeners.
/// Page-level scroll wiring stays in place.
#[wasm_bindgen]
pub fn teardown() {
    let dropped = REGISTRY.with(|slot| slot.borrow_mut().take());
    if let Some(registry) = dropped {
        log::info!(
            "[registry] tearing down {} surface(s), {} animating",
            registry.len(),
            registry.animating()
        );
    }
}

/// Number of ripple surfaces currently attached.
#[wasm_bindgen]
pub fn surface_count() -> usize {
    REGISTRY.with(|slot| slot.borrow().as_ref().map_or(0, CanvasRegistry::len))
}
