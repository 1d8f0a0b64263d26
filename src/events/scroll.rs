use crate::constants::{
    DRAGGING_BODY_CLASS, MAP_LINK_SELECTOR, MAP_LINK_TARGET_ATTR, SCROLL_TO_TOP_SELECTOR,
};
use crate::dom;
use crate::frame::FrameLoop;
use crate::scroll::ScrollController;
use folio_core::scroll::{anchor_offset, DragScroll, ScrollKey};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ScrollWiring {
    pub document: web::Document,
    pub scroller: Rc<dyn ScrollController>,
    pub drag: Rc<RefCell<DragScroll>>,
    animation: Rc<RefCell<Option<FrameLoop>>>,
}

impl ScrollWiring {
    pub fn is_dragging(&self) -> bool {
        self.drag.borrow().is_dragging()
    }

    fn set_body_dragging(&self, on: bool) {
        if let Some(body) = self.document.body() {
            let classes = body.class_list();
            _ = if on {
                classes.add_1(DRAGGING_BODY_CLASS)
            } else {
                classes.remove_1(DRAGGING_BODY_CLASS)
            };
        }
    }

    fn end_drag(&self) {
        if self.drag.borrow_mut().end() {
            self.set_body_dragging(false);
        }
    }

    /// Ease toward the current target, one step per frame. The position is
    /// tracked here rather than read back, since the window may round it.
    fn animate(&self) {
        if !self.drag.borrow_mut().start_animation() {
            return;
        }
        let drag = self.drag.clone();
        let scroller = self.scroller.clone();
        let mut position = scroller.offset();
        let animation = FrameLoop::start(move || {
            let step = drag.borrow_mut().step(position);
            position = step.position;
            scroller.scroll_to(position);
            !step.settled
        });
        *self.animation.borrow_mut() = Some(animation);
    }
}

/// Drag-to-scroll with the primary button plus arrow/space key scrolling.
pub fn wire_drag_scroll(
    document: &web::Document,
    scroller: Rc<dyn ScrollController>,
) -> ScrollWiring {
    let w = ScrollWiring {
        document: document.clone(),
        scroller,
        drag: Rc::new(RefCell::new(DragScroll::default())),
        animation: Rc::new(RefCell::new(None)),
    };

    {
        let w = w.clone();
        dom::add_listener(document, "mousedown", move |ev: web::MouseEvent| {
            if ev.button() != 0 {
                return;
            }
            let offset = w.scroller.offset();
            w.drag.borrow_mut().begin(ev.client_y() as f64, offset);
            w.set_body_dragging(true);
        });
    }
    {
        let w = w.clone();
        dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
            if !w.is_dragging() {
                return;
            }
            let max = w.scroller.max_offset();
            let target = w.drag.borrow_mut().drag_to(ev.client_y() as f64, max);
            if target.is_some() {
                w.animate();
            }
        });
    }
    {
        let w = w.clone();
        dom::add_listener(document, "mouseup", move |_ev: web::MouseEvent| w.end_drag());
    }
    {
        let w = w.clone();
        dom::add_listener(document, "contextmenu", move |_ev: web::MouseEvent| w.end_drag());
    }
    {
        let w = w.clone();
        dom::add_listener(document, "selectstart", move |ev: web::Event| {
            if w.is_dragging() {
                ev.prevent_default();
            }
        });
    }
    {
        // Capture phase so the link never sees a click that ended a drag.
        let w = w.clone();
        let options = EventListenerOptions {
            phase: EventListenerPhase::Capture,
            passive: false,
        };
        EventListener::new_with_options(document, "click", options, move |event| {
            if !w.is_dragging() {
                return;
            }
            let on_link = event
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|el| el.closest("a").ok().flatten())
                .is_some();
            if on_link {
                event.prevent_default();
                event.stop_propagation();
            }
        })
        .forget();
    }
    {
        let w = w.clone();
        dom::add_listener(document, "keydown", move |ev: web::KeyboardEvent| {
            let Some(key) = ScrollKey::from_key(&ev.key()) else {
                return;
            };
            if key == ScrollKey::Page {
                ev.prevent_default();
            }
            let (offset, viewport, max) = (
                w.scroller.offset(),
                w.scroller.viewport_height(),
                w.scroller.max_offset(),
            );
            w.drag.borrow_mut().key_target(key, offset, viewport, max);
            w.animate();
        });
    }

    w
}

/// Back-to-top buttons and in-page map links.
pub fn wire_scroll_links(w: &ScrollWiring) {
    for button in dom::query_all(&w.document, SCROLL_TO_TOP_SELECTOR) {
        let scroller = w.scroller.clone();
        dom::add_listener(&button, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            scroller.glide_to(0.0);
        });
    }

    let links = dom::query_all(&w.document, MAP_LINK_SELECTOR);
    log::info!("[scroll] {} map link(s)", links.len());
    for link in links {
        let w = w.clone();
        let link_for_handler = link.clone();
        dom::add_listener(&link, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            if w.is_dragging() {
                ev.stop_propagation();
                return;
            }
            let Some(selector) = link_for_handler.get_attribute(MAP_LINK_TARGET_ATTR) else {
                return;
            };
            let Some(target) = w.document.query_selector(&selector).ok().flatten() else {
                log::warn!("[scroll] map link target {} not found", selector);
                return;
            };
            let top = target.get_bounding_client_rect().top();
            w.scroller.glide_to(anchor_offset(top, w.scroller.offset()));
        });
    }
}
