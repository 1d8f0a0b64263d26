use web_sys as web;

/// The page scroller the drag and link handlers drive.
pub trait ScrollController {
    /// Current vertical offset.
    fn offset(&self) -> f64;
    /// Largest reachable offset.
    fn max_offset(&self) -> f64;
    fn viewport_height(&self) -> f64;
    /// Jump immediately; callers animate by calling this every frame.
    fn scroll_to(&self, y: f64);
    /// Let the browser animate to `y`.
    fn glide_to(&self, y: f64);
}

/// Native window scrolling.
pub struct WindowScroller {
    window: web::Window,
}

impl WindowScroller {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl ScrollController for WindowScroller {
    fn offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn max_offset(&self) -> f64 {
        let scroll_height = self
            .window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        (scroll_height - self.viewport_height()).max(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, y: f64) {
        self.window.scroll_to_with_x_and_y(0.0, y);
    }

    fn glide_to(&self, y: f64) {
        let opts = web::ScrollToOptions::new();
        opts.set_top(y);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}
