//! Dismissible alert removal.
//!
//! Lifecycle per alert: visible, fading for 300 ms, removed. Terminal; a
//! second click during the fade re-triggers it harmlessly since removal
//! happens once regardless.

use crate::bind::{Binding, select_all};
use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

const CLOSE_SELECTOR: &str = ".alert-dismissible .close";
const CONTAINER_CLASS: &str = ".alert";
const FADE_MS: u32 = 300;

/// Wire every close control inside a dismissible alert.
pub(super) fn init(doc: &Document, binding: &mut Binding) {
    for button in select_all(doc, CLOSE_SELECTOR) {
        if !binding.claim(&button, "alert") {
            continue;
        }
        let listener = EventListener::new(&button.clone(), "click", move |_event| {
            let Ok(Some(alert)) = button.closest(CONTAINER_CLASS) else {
                return;
            };
            dismiss(&alert);
        });
        binding.listen(listener);
    }
}

/// Fade the container out, then remove it once the transition elapses.
/// The timeout is deliberately detached: dismissal has no cancellation.
fn dismiss(alert: &Element) {
    if let Some(element) = alert.dyn_ref::<HtmlElement>() {
        let style = element.style();
        let fade = style
            .set_property("transition", "opacity 0.3s")
            .and_then(|()| style.set_property("opacity", "0"));
        if let Err(err) = fade {
            console::error!("alert fade failed", err);
        }
    }
    let alert = alert.clone();
    Timeout::new(FADE_MS, move || alert.remove()).forget();
}
