//! Page-lifetime boot sequence and host-facing exports.

use crate::bind::Bindings;
use crate::wire::init_all;
use gloo::events::EventListener;
use gloo::utils::document;
use std::cell::RefCell;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

/// Event the hypermedia-exchange library fires after swapping content in.
const SWAP_EVENT: &str = "htmx:afterSwap";

thread_local! {
    /// Hooks installed by [`boot`], kept alive until page unload.
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

struct Page {
    bindings: Bindings,
    _swaps: EventListener,
}

/// Wire the whole document and keep the hooks alive for the page lifetime.
///
/// Safe to call more than once; elements wired by an earlier pass are
/// skipped via their markers.
pub fn boot() {
    console_error_panic_hook::set_once();
    let doc = document();
    let bindings = init_all(&doc);
    PAGE.with(|page| {
        let mut slot = page.borrow_mut();
        if let Some(existing) = slot.as_mut() {
            existing.bindings.absorb(bindings);
        } else {
            *slot = Some(Page {
                bindings,
                _swaps: watch_swaps(&doc),
            });
        }
    });
}

/// Rewire the routines whenever the hypermedia library lands new content.
/// Already-wired elements are skipped, so only swapped-in markup is touched.
fn watch_swaps(doc: &Document) -> EventListener {
    let target = doc.clone();
    EventListener::new(doc, SWAP_EVENT, move |_event| {
        let fresh = init_all(&target);
        PAGE.with(|page| {
            if let Some(state) = page.borrow_mut().as_mut() {
                state.bindings.absorb(fresh);
            }
        });
    })
}

/// Disposable handle exported to host pages for ad-hoc re-wiring after
/// dynamic content replacement.
#[wasm_bindgen]
pub struct Enhancements {
    bindings: Option<Bindings>,
}

#[wasm_bindgen]
impl Enhancements {
    /// Wire every routine over the current document.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: Some(init_all(&document())),
        }
    }

    /// Detach every listener and observer this handle wired, releasing the
    /// wiring markers so the elements can be claimed again.
    pub fn dispose(&mut self) {
        drop(self.bindings.take());
    }
}

impl Default for Enhancements {
    fn default() -> Self {
        Self::new()
    }
}
