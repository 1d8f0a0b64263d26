//! requestAnimationFrame-driven loops with an explicit stop handle.

use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct LoopInner {
    running: Cell<bool>,
    pending: RefCell<Option<AnimationFrame>>,
    tick: RefCell<Box<dyn FnMut() -> bool>>,
}

/// A repeating per-frame task. `tick` runs once per display refresh and
/// returns whether it wants another frame. Dropping the handle cancels the
/// next pending frame, so whoever owns the handle owns the loop.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    pub fn start(tick: impl FnMut() -> bool + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            running: Cell::new(true),
            pending: RefCell::new(None),
            tick: RefCell::new(Box::new(tick)),
        });
        schedule(&inner);
        Self { inner }
    }

    /// Loop that only ends when stopped or dropped.
    pub fn forever(mut tick: impl FnMut() + 'static) -> Self {
        Self::start(move || {
            tick();
            true
        })
    }

    pub fn stop(&self) {
        self.inner.running.set(false);
        self.inner.pending.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(inner: &Rc<LoopInner>) {
    // The frame callback holds only a weak handle; the loop dies with its owner.
    let weak = Rc::downgrade(inner);
    let frame = request_animation_frame(move |_timestamp| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        if !inner.running.get() {
            return;
        }
        let again = (inner.tick.borrow_mut())();
        if again && inner.running.get() {
            schedule(&inner);
        } else {
            inner.running.set(false);
        }
    });
    *inner.pending.borrow_mut() = Some(frame);
}
