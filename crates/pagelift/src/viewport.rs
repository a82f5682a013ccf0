//! Capability-checked viewport observation.
//!
//! Intersection support is probed once per initializer run and selects a
//! strategy up front instead of branching inline at each call site.

use gloo::console;
use gloo::utils::window;
use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// How a routine reacts to elements entering the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Strategy {
    /// Intersection observation is available; defer work until entry.
    Observed,
    /// No observer support; the routine applies its fallback at once.
    Immediate,
}

/// Probe the global object for intersection-observer support.
pub(crate) fn strategy() -> Strategy {
    let supported = Reflect::has(window().as_ref(), &JsValue::from_str("IntersectionObserver"));
    if supported.unwrap_or(false) {
        Strategy::Observed
    } else {
        Strategy::Immediate
    }
}

/// An intersection observer together with the closure backing its callback.
///
/// Dropping the value disconnects the observer and releases the closure.
pub(crate) struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub(crate) fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Build an observer that hands each intersecting target to `on_enter`
/// along with the live observer, so the handler can unobserve one-shot
/// elements.
pub(crate) fn enter_observer(
    threshold: Option<f64>,
    mut on_enter: impl FnMut(Element, &IntersectionObserver) + 'static,
) -> Option<ViewportObserver> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_enter(entry.target(), &observer);
                }
            }
        },
    );
    let observer = if let Some(threshold) = threshold {
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    } else {
        IntersectionObserver::new(callback.as_ref().unchecked_ref())
    };
    match observer {
        Ok(observer) => Some(ViewportObserver {
            observer,
            _callback: callback,
        }),
        Err(err) => {
            console::error!("intersection observer construction failed", err);
            None
        }
    }
}
