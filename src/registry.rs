//! Discovery and lifetime of every ripple surface on the page.

use crate::constants::{IMAGE_SOURCE_ATTR, RIPPLE_CANVAS_SELECTOR};
use crate::dom;
use crate::error::FxError;
use crate::events::wire_ripple_pointer;
use crate::frame::FrameLoop;
use crate::render::RippleRenderer;
use crate::resize::{on_window_resize, ResizeWatch};
use folio_core::{RippleConfig, RESIZE_DEBOUNCE_MS};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// One canvas with its renderer, listeners and animation loop. Everything
/// is released when this is dropped.
pub struct RippleSurface {
    renderer: Rc<RefCell<RippleRenderer>>,
    // Filled once the image is on the GPU
    frame: Rc<RefCell<Option<FrameLoop>>>,
    _pointer: Vec<EventListener>,
    _observer: ResizeWatch,
}

impl RippleSurface {
    pub fn attach(canvas: web::HtmlCanvasElement) -> Result<Self, FxError> {
        let url = canvas
            .get_attribute(IMAGE_SOURCE_ATTR)
            .filter(|url| !url.trim().is_empty())
            .ok_or(FxError::MissingSource(IMAGE_SOURCE_ATTR))?;

        let renderer = Rc::new(RefCell::new(RippleRenderer::new(
            canvas.clone(),
            RippleConfig::default(),
        )?));
        let pointer = wire_ripple_pointer(&canvas, &renderer);

        let weak = Rc::downgrade(&renderer);
        let observer = ResizeWatch::observe(&canvas, move || {
            if let Some(renderer) = weak.upgrade() {
                renderer.borrow_mut().resize();
            }
        })?;

        let frame = Rc::new(RefCell::new(None));
        spawn_local(load_and_start(
            Rc::downgrade(&renderer),
            Rc::downgrade(&frame),
            url,
        ));

        Ok(Self {
            renderer,
            frame,
            _pointer: pointer,
            _observer: observer,
        })
    }

    pub fn is_animating(&self) -> bool {
        self.frame
            .borrow()
            .as_ref()
            .map_or(false, FrameLoop::is_running)
    }

    fn renderer(&self) -> Weak<RefCell<RippleRenderer>> {
        Rc::downgrade(&self.renderer)
    }
}

impl Drop for RippleSurface {
    fn drop(&mut self) {
        if let Some(frame) = self.frame.borrow_mut().take() {
            frame.stop();
        }
    }
}

async fn load_and_start(
    renderer: Weak<RefCell<RippleRenderer>>,
    frame: Weak<RefCell<Option<FrameLoop>>>,
    url: String,
) {
    let image = match dom::load_image(&url).await {
        Ok(image) => image,
        Err(err) => {
            log::warn!("[ripple] {}", err);
            return;
        }
    };
    // The surface may have been torn down while the image was loading.
    let (Some(renderer), Some(frame)) = (renderer.upgrade(), frame.upgrade()) else {
        return;
    };
    if let Err(err) = renderer.borrow_mut().attach_image(&image) {
        log::warn!("[ripple] {}", err);
        return;
    }
    let tick = Rc::downgrade(&renderer);
    *frame.borrow_mut() = Some(FrameLoop::forever(move || {
        if let Some(renderer) = tick.upgrade() {
            renderer.borrow_mut().frame();
        }
    }));
}

/// All ripple surfaces found at startup plus the shared window-resize hook.
#[derive(Default)]
pub struct CanvasRegistry {
    surfaces: Vec<RippleSurface>,
    _window_resize: Option<EventListener>,
}

impl CanvasRegistry {
    /// Attach a ripple to every matching canvas. A surface that fails to
    /// initialise is logged and skipped; the others are unaffected.
    pub fn discover(document: &web::Document) -> Self {
        let mut surfaces = Vec::new();
        for (index, el) in dom::query_all(document, RIPPLE_CANVAS_SELECTOR)
            .into_iter()
            .enumerate()
        {
            let Ok(canvas) = el.dyn_into::<web::HtmlCanvasElement>() else {
                log::warn!("[registry] #{} is not a canvas", index);
                continue;
            };
            match RippleSurface::attach(canvas) {
                Ok(surface) => surfaces.push(surface),
                Err(err @ (FxError::ShaderCompile { .. } | FxError::ProgramLink(_))) => {
                    log::error!("[registry] #{}: {}", index, err);
                }
                Err(err) => log::warn!("[registry] #{}: {}", index, err),
            }
        }
        log::info!("[registry] {} ripple surface(s) attached", surfaces.len());

        let window_resize = web::window().map(|window| {
            let renderers: Vec<_> = surfaces.iter().map(RippleSurface::renderer).collect();
            on_window_resize(&window, RESIZE_DEBOUNCE_MS, move || {
                for renderer in renderers.iter().filter_map(Weak::upgrade) {
                    renderer.borrow_mut().resize();
                }
            })
        });

        Self {
            surfaces,
            _window_resize: window_resize,
        }
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn animating(&self) -> usize {
        self.surfaces.iter().filter(|s| s.is_animating()).count()
    }
}
