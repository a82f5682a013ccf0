//! Disposable wiring handles and idempotent re-binding markers.

use crate::logic::wired_attr;
use crate::viewport::ViewportObserver;
use gloo::console;
use gloo::events::EventListener;
use web_sys::{Document, Element};

/// Page hooks attached by a single routine.
///
/// Dropping the binding detaches its listeners, disconnects its observers,
/// and removes the markers it placed, so the elements it claimed can be
/// wired again by a later pass.
#[derive(Default)]
pub struct Binding {
    listeners: Vec<EventListener>,
    observers: Vec<ViewportObserver>,
    claims: Vec<Claim>,
}

struct Claim {
    element: Element,
    attr: String,
}

impl Binding {
    pub(crate) fn listen(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    pub(crate) fn watch(&mut self, observer: ViewportObserver) {
        self.observers.push(observer);
    }

    /// Claim an element for `routine`; returns `false` when already wired.
    ///
    /// The marker placed here is removed when the binding drops, returning
    /// the element to a wireable state.
    pub(crate) fn claim(&mut self, element: &Element, routine: &str) -> bool {
        let attr = wired_attr(routine);
        if element.has_attribute(&attr) {
            return false;
        }
        if let Err(err) = element.set_attribute(&attr, "") {
            console::error!("wiring marker failed", routine, err);
        }
        self.claims.push(Claim {
            element: element.clone(),
            attr,
        });
        true
    }

    pub(crate) fn absorb(&mut self, mut other: Self) {
        self.listeners.append(&mut other.listeners);
        self.observers.append(&mut other.observers);
        self.claims.append(&mut other.claims);
    }
}

impl Drop for Binding {
    fn drop(&mut self) {
        for claim in &self.claims {
            if let Err(err) = claim.element.remove_attribute(&claim.attr) {
                console::error!("wiring marker removal failed", err);
            }
        }
    }
}

/// Aggregate of all six routine bindings from one wiring pass.
#[derive(Default)]
pub struct Bindings {
    /// Mobile navigation toggle.
    pub menu: Binding,
    /// Deferred image loading.
    pub lazy_images: Binding,
    /// Animated metric counters.
    pub counters: Binding,
    /// Form validation interception.
    pub forms: Binding,
    /// Smooth in-page anchor scrolling.
    pub anchors: Binding,
    /// Dismissible alert removal.
    pub alerts: Binding,
}

impl Bindings {
    pub(crate) fn absorb(&mut self, other: Self) {
        self.menu.absorb(other.menu);
        self.lazy_images.absorb(other.lazy_images);
        self.counters.absorb(other.counters);
        self.forms.absorb(other.forms);
        self.anchors.absorb(other.anchors);
        self.alerts.absorb(other.alerts);
    }
}

/// All elements under `root` matching `selector`.
pub(crate) fn select_all(root: &Document, selector: &str) -> Vec<Element> {
    use wasm_bindgen::JsCast;

    match root.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(err) => {
            console::error!("selector query failed", selector, err);
            Vec::new()
        }
    }
}
