mod program;
mod resources;

use crate::dom;
use crate::error::FxError;
use folio_core::{pointer_to_surface, CoverFit, RippleConfig, RippleState, SurfaceSize};
use glam::Vec2;
use resources::GlResources;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{self as web, WebGlRenderingContext as GL};

/// One image drawn onto one canvas with the cursor ripple on top.
///
/// The renderer is inert until [`RippleRenderer::attach_image`] succeeds:
/// before that, resizes still track the canvas size but nothing is drawn.
pub struct RippleRenderer {
    canvas: web::HtmlCanvasElement,
    gl: GL,
    gpu: GlResources,
    // Source aspect (w/h); `Some` once the texture holds the image
    image_aspect: Option<f32>,
    size: SurfaceSize,
    state: RippleState,
}

impl RippleRenderer {
    pub fn new(canvas: web::HtmlCanvasElement, config: RippleConfig) -> Result<Self, FxError> {
        let gl = acquire_context(&canvas)?;
        let gpu = GlResources::new(&gl)?;
        let mut renderer = Self {
            canvas,
            gl,
            gpu,
            image_aspect: None,
            size: SurfaceSize::default(),
            state: RippleState::new(config),
        };
        renderer.resize();
        Ok(renderer)
    }

    /// Upload the decoded source image, lay out the quad and draw once.
    pub fn attach_image(&mut self, image: &web::HtmlImageElement) -> Result<(), FxError> {
        let (w, h) = (image.natural_width(), image.natural_height());
        if w == 0 || h == 0 {
            return Err(FxError::ImageLoad { url: image.src() });
        }
        self.gpu.upload_image(&self.gl, image)?;
        self.image_aspect = Some(w as f32 / h as f32);
        self.layout();
        self.draw();
        log::info!(
            "[ripple] {}x{} image on {}x{} surface",
            w,
            h,
            self.size.width,
            self.size.height
        );
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.image_aspect.is_some()
    }

    pub fn pointer_move(&mut self, client: Vec2) {
        let pos = self.to_surface(client);
        self.state.pointer_move(pos);
    }

    pub fn pointer_leave(&mut self, client: Vec2) {
        let pos = self.to_surface(client);
        self.state.pointer_leave(pos);
    }

    /// One animation frame: advance the ripple state and redraw.
    pub fn frame(&mut self) {
        self.state.step();
        self.draw();
    }

    /// Re-measure the canvas. Only a real size change touches the backing
    /// store, viewport and fit; returns whether that happened.
    pub fn resize(&mut self) -> bool {
        let size = dom::surface_backing_size(&self.canvas);
        if size == self.size {
            return false;
        }
        log::debug!(
            "[resize] {}x{} -> {}x{}",
            self.size.width,
            self.size.height,
            size.width,
            size.height
        );
        self.size = size;
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        self.gl.viewport(0, 0, size.width as i32, size.height as i32);
        self.layout();
        self.draw();
        true
    }

    fn to_surface(&self, client: Vec2) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        let origin = Vec2::new(rect.left() as f32, rect.top() as f32);
        pointer_to_surface(client, origin, dom::device_pixel_ratio())
    }

    fn layout(&self) {
        if let Some(aspect) = self.image_aspect {
            let fit = CoverFit::compute(aspect, self.size.aspect());
            self.gpu.upload_fit(&self.gl, &fit);
        }
    }

    fn draw(&self) {
        if !self.is_ready() || self.size.is_empty() {
            return;
        }
        self.gpu.draw(&self.gl, self.size, &self.state.uniforms());
    }
}

impl Drop for RippleRenderer {
    fn drop(&mut self) {
        self.gpu.release(&self.gl);
    }
}

/// WebGL 1 context with a persistent back buffer.
fn acquire_context(canvas: &web::HtmlCanvasElement) -> Result<GL, FxError> {
    let attrs = js_sys::Object::new();
    js_sys::Reflect::set(
        &attrs,
        &JsValue::from_str("preserveDrawingBuffer"),
        &JsValue::from_bool(true),
    )
    .map_err(FxError::dom)?;
    canvas
        .get_context_with_context_options("webgl", &attrs)
        .map_err(FxError::dom)?
        .ok_or(FxError::ContextUnavailable)?
        .dyn_into::<GL>()
        .map_err(|_| FxError::ContextUnavailable)
}
