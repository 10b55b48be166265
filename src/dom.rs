//! Browser bindings.
//!
//! Thin wrappers over `web-sys` and `gloo` for the few things the page does
//! outside Dioxus' own event system: window scroll, animation frames, the
//! visibility observer, element geometry and focus.
//!
//! Every helper tolerates a missing window, document or element and simply
//! does nothing (logged at debug).

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use verdant_core::{ClickTarget, RevealOptions, Timer, VerticalRect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

/// [`Timer`] on the browser event loop
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo::timers::future::sleep(duration)
    }
}

fn element_by_id(id: &str) -> Option<Element> {
    let element = web_sys::window()?.document()?.get_element_by_id(id);
    if element.is_none() {
        tracing::debug!("No element with id '{}'", id);
    }
    element
}

/// Current vertical scroll position
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Smoothly scroll the window to a document offset
pub fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Viewport-relative extent of the element with `id`
pub fn element_rect(id: &str) -> Option<VerticalRect> {
    let rect = element_by_id(id)?.get_bounding_client_rect();
    Some(VerticalRect {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

/// Smoothly scroll the element with `id` to the nearest viewport edge
pub fn scroll_into_view_nearest(id: &str) {
    let Some(element) = element_by_id(id) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Nearest);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn focus(id: &str) {
    let Some(element) = element_by_id(id).and_then(|e| e.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    if let Err(e) = element.focus() {
        tracing::debug!("Could not focus '{}': {:?}", id, e);
    }
}

/// Inline `overflow` on the body; empty string removes the override
pub fn set_body_overflow(value: &str) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let result = if value.is_empty() {
        body.style().remove_property("overflow").map(|_| ())
    } else {
        body.style().set_property("overflow", value)
    };
    if let Err(e) = result {
        tracing::debug!("Could not set body overflow: {:?}", e);
    }
}

/// Window `scroll` listener; removed when dropped
pub fn on_window_scroll(mut callback: impl FnMut() + 'static) -> Option<EventListener> {
    let window = web_sys::window()?;
    Some(EventListener::new(&window, "scroll", move |_| callback()))
}

/// Runs a callback on the next animation frame, at most one pending
/// request at a time. Dropping it cancels the pending frame.
#[derive(Clone, Default)]
pub struct FrameScheduler {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameScheduler {
    pub fn request(&self, callback: impl FnOnce() + 'static) {
        let pending = self.pending.clone();
        let handle = request_animation_frame(move |_| {
            pending.borrow_mut().take();
            callback();
        });
        *self.pending.borrow_mut() = Some(handle);
    }
}

/// Document click listener that reports where the click landed relative to
/// the nav (`nav_id`) and its toggle (`toggle_id`).
pub fn on_document_click(
    nav_id: &'static str,
    toggle_id: &'static str,
    mut callback: impl FnMut(ClickTarget) + 'static,
) -> Option<EventListener> {
    let document = web_sys::window()?.document()?;
    Some(EventListener::new(&document, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside = |id: &str| {
            element_by_id(id)
                .map(|el| el.contains(target.as_ref()))
                .unwrap_or(false)
        };
        let click = if inside(toggle_id) {
            ClickTarget::Toggle
        } else if inside(nav_id) {
            ClickTarget::InsideNav
        } else {
            ClickTarget::Outside
        };
        callback(click);
    }))
}

/// Intersection observer watching one element; disconnects when dropped.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe `element` with the reveal settings.
///
/// `on_change` receives each intersection update and returns true when the
/// element should stop being observed. Returns `None` when the browser has
/// no intersection observer.
pub fn observe_visibility(
    element: &Element,
    options: RevealOptions,
    mut on_change: impl FnMut(bool) -> bool + 'static,
) -> Option<VisibilityObserver> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if on_change(entry.is_intersecting()) {
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            Some(VisibilityObserver {
                observer,
                _callback: callback,
            })
        }
        Err(e) => {
            tracing::debug!("Intersection observer unavailable: {:?}", e);
            None
        }
    }
}
