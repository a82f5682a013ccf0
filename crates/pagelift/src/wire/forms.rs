//! Native constraint-validation interception for `form[data-validate]`.

use crate::bind::{Binding, select_all};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement};

const MARKER_CLASS: &str = "was-validated";

/// Cancel submits that fail native validation and mark the form so CSS can
/// reveal inline hints. Valid submits proceed untouched apart from the
/// marker class.
pub(super) fn init(doc: &Document, binding: &mut Binding) {
    for element in select_all(doc, "form[data-validate]") {
        if !binding.claim(&element, "validate") {
            continue;
        }
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let listener = EventListener::new_with_options(
            &form.clone(),
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if !form.check_validity() {
                    event.prevent_default();
                    event.stop_propagation();
                }
                if let Err(err) = form.class_list().add_1(MARKER_CLASS) {
                    console::error!("validation marker failed", err);
                }
            },
        );
        binding.listen(listener);
    }
}
