//! Scroll-scrubbed parallax on the hero block and framed images.

use crate::constants::{DIM_OVERLAY_SELECTOR, HERO_SELECTOR, PARALLAX_FRAME_SELECTOR};
use crate::dom;
use crate::resize::on_window_resize;
use folio_core::parallax::{Extent, ScrollTween};
use folio_core::RESIZE_DEBOUNCE_MS;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy)]
enum Property {
    TranslateY,
    Opacity,
}

impl Property {
    fn css_name(self) -> &'static str {
        match self {
            Self::TranslateY => "transform",
            Self::Opacity => "opacity",
        }
    }

    fn apply(self, el: &web::HtmlElement, value: f64) {
        match self {
            Self::TranslateY => dom::set_style(el, "transform", &format!("translateY({:.3}%)", value)),
            Self::Opacity => dom::set_style(el, "opacity", &format!("{:.4}", value)),
        }
    }
}

/// One tweened element. `trigger` is the element whose extent positions
/// the tween; `target` receives the style.
struct Scrub {
    target: web::HtmlElement,
    trigger: web::HtmlElement,
    property: Property,
    build: fn(Extent, f64) -> ScrollTween,
    tween: Option<ScrollTween>,
}

impl Scrub {
    fn new(
        target: web::HtmlElement,
        trigger: web::HtmlElement,
        property: Property,
        build: fn(Extent, f64) -> ScrollTween,
    ) -> Self {
        Self {
            target,
            trigger,
            property,
            build,
            tween: None,
        }
    }

    fn reset(&self) {
        dom::clear_style(&self.target, self.property.css_name());
    }

    /// Resolve trigger offsets. Call after every scrub has been reset so
    /// the layout is untransformed.
    fn measure(&mut self, scroll_y: f64, viewport_height: f64) {
        let rect = self.trigger.get_bounding_client_rect();
        let extent = Extent::new(rect.top() + scroll_y, rect.height());
        self.tween = Some((self.build)(extent, viewport_height));
    }

    fn update(&self, scroll_y: f64) {
        if let Some(tween) = &self.tween {
            self.property.apply(&self.target, tween.value_at(scroll_y));
        }
    }
}

fn collect(document: &web::Document) -> Vec<Scrub> {
    let mut scrubs = Vec::new();
    if let Some(hero) = dom::query_html(document, HERO_SELECTOR) {
        if let Some(overlay) = dom::query_html(document, DIM_OVERLAY_SELECTOR) {
            scrubs.push(Scrub::new(overlay, hero.clone(), Property::Opacity, ScrollTween::hero_dim));
        }
        scrubs.push(Scrub::new(hero.clone(), hero, Property::TranslateY, ScrollTween::hero_shift));
    }
    for frame in dom::query_all(document, PARALLAX_FRAME_SELECTOR) {
        let Ok(frame) = frame.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let image = frame
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if let Some(image) = image {
            scrubs.push(Scrub::new(image, frame, Property::TranslateY, ScrollTween::image_shift));
        }
    }
    scrubs
}

fn viewport(window: &web::Window) -> (f64, f64) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (scroll_y, height)
}

fn remeasure(window: &web::Window, scrubs: &RefCell<Vec<Scrub>>) {
    let (scroll_y, height) = viewport(window);
    let mut scrubs = scrubs.borrow_mut();
    scrubs.iter().for_each(Scrub::reset);
    for scrub in scrubs.iter_mut() {
        scrub.measure(scroll_y, height);
    }
    for scrub in scrubs.iter() {
        scrub.update(scroll_y);
    }
}

pub fn wire(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let scrubs = collect(document);
    if scrubs.is_empty() {
        return;
    }
    log::info!("[scroll] {} parallax tween(s)", scrubs.len());
    let scrubs = Rc::new(RefCell::new(scrubs));
    remeasure(&window, &scrubs);

    {
        let scrubs = scrubs.clone();
        let win = window.clone();
        dom::add_listener(&window, "scroll", move |_ev: web::Event| {
            let scroll_y = win.scroll_y().unwrap_or(0.0);
            for scrub in scrubs.borrow().iter() {
                scrub.update(scroll_y);
            }
        });
    }

    // Images change the layout as they arrive
    {
        let scrubs = scrubs.clone();
        let win = window.clone();
        dom::on_window_load(&window, move || remeasure(&win, &scrubs));
    }

    let win = window.clone();
    on_window_resize(&window, RESIZE_DEBOUNCE_MS, move || remeasure(&win, &scrubs)).forget();
}
