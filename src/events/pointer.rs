use crate::render::RippleRenderer;
use glam::Vec2;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Hook mouse move/leave on one ripple canvas. The listeners live as long
/// as the returned handles.
pub fn wire_ripple_pointer(
    canvas: &web::HtmlCanvasElement,
    renderer: &Rc<RefCell<RippleRenderer>>,
) -> Vec<EventListener> {
    let on_move = {
        let renderer = renderer.clone();
        EventListener::new(canvas, "mousemove", move |event| {
            if let Some(ev) = event.dyn_ref::<web::MouseEvent>() {
                renderer.borrow_mut().pointer_move(client_pos(ev));
            }
        })
    };
    let on_leave = {
        let renderer = renderer.clone();
        EventListener::new(canvas, "mouseleave", move |event| {
            if let Some(ev) = event.dyn_ref::<web::MouseEvent>() {
                renderer.borrow_mut().pointer_leave(client_pos(ev));
            }
        })
    };
    vec![on_move, on_leave]
}
