//! Resize plumbing: a re-armable debouncer for window resizes and a scoped
//! ResizeObserver for element-level size changes.

use crate::error::FxError;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Runs `action` once the triggers have gone quiet for `delay_ms`.
/// Each trigger re-arms the timer; the previously pending run is dropped.
pub struct Debounced {
    delay_ms: u32,
    action: Rc<dyn Fn()>,
    pending: RefCell<Option<Timeout>>,
}

impl Debounced {
    pub fn new(delay_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            delay_ms,
            action: Rc::new(action),
            pending: RefCell::new(None),
        }
    }

    pub fn trigger(&self) {
        let action = self.action.clone();
        // Replacing the old Timeout clears it.
        *self.pending.borrow_mut() = Some(Timeout::new(self.delay_ms, move || action()));
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

impl Drop for Debounced {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Window `resize` listener with the given quiescence delay. Dropping the
/// returned listener unhooks it and cancels any pending run.
pub fn on_window_resize(
    window: &web::Window,
    delay_ms: u32,
    action: impl Fn() + 'static,
) -> EventListener {
    let debounced = Debounced::new(delay_ms, action);
    EventListener::new(window, "resize", move |_event| debounced.trigger())
}

/// Element size observation scoped to this value's lifetime.
pub struct ResizeWatch {
    observer: web::ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ResizeWatch {
    pub fn observe(target: &web::Element, mut on_resize: impl FnMut() + 'static) -> Result<Self, FxError> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            if entries.length() > 0 {
                on_resize();
            }
        }) as Box<dyn FnMut(js_sys::Array)>);
        let observer =
            web::ResizeObserver::new(callback.as_ref().unchecked_ref()).map_err(FxError::dom)?;
        observer.observe(target);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
