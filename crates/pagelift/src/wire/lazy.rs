//! Deferred image loading for `img[data-src]`.

use crate::bind::{Binding, select_all};
use crate::viewport::{self, Strategy};
use gloo::console;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement};

const PENDING_ATTR: &str = "data-src";
const PENDING_CLASS: &str = "lazy-load";
const LOADED_CLASS: &str = "loaded";

/// Observe pending images and swap in the real source on first entry.
///
/// Without intersection support this is a no-op; pages using the pending
/// source pattern are expected to carry a non-JS fallback.
pub(super) fn init(doc: &Document, binding: &mut Binding) {
    if viewport::strategy() == Strategy::Immediate {
        return;
    }
    let Some(observer) = viewport::enter_observer(None, |image, observer| {
        observer.unobserve(&image);
        reveal(&image);
    }) else {
        return;
    };
    let mut observing = false;
    for image in select_all(doc, &format!("img[{PENDING_ATTR}]")) {
        if binding.claim(&image, "lazy") {
            observer.observe(&image);
            observing = true;
        }
    }
    if observing {
        binding.watch(observer);
    }
}

/// Apply the pending source and flip the visual state classes. Runs at most
/// once per image; the caller unobserves before calling.
fn reveal(element: &Element) {
    let Some(src) = element.get_attribute(PENDING_ATTR) else {
        return;
    };
    let Some(image) = element.dyn_ref::<HtmlImageElement>() else {
        return;
    };
    image.set_src(&src);
    let classes = image.class_list();
    if let Err(err) = classes
        .remove_1(PENDING_CLASS)
        .and_then(|()| classes.add_1(LOADED_CLASS))
    {
        console::error!("lazy image class swap failed", err);
    }
}
