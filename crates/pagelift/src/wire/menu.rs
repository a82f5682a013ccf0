//! Mobile navigation toggle.

use crate::bind::Binding;
use crate::logic::expanded_value;
use gloo::console;
use gloo::events::EventListener;
use web_sys::Document;

const BUTTON_ID: &str = "mobile-menu-button";
const PANEL_ID: &str = "mobile-menu";
const HIDDEN_CLASS: &str = "hidden";

/// Toggle the panel's `hidden` class on trigger clicks and mirror the open
/// state into `aria-expanded`. Does nothing when either element is missing.
pub(super) fn init(doc: &Document, binding: &mut Binding) {
    let Some(button) = doc.get_element_by_id(BUTTON_ID) else {
        return;
    };
    let Some(panel) = doc.get_element_by_id(PANEL_ID) else {
        return;
    };
    if !binding.claim(&button, "menu") {
        return;
    }
    let listener = EventListener::new(&button.clone(), "click", move |_event| {
        match panel.class_list().toggle(HIDDEN_CLASS) {
            Ok(hidden) => {
                if let Err(err) = button.set_attribute("aria-expanded", expanded_value(!hidden)) {
                    console::error!("aria-expanded update failed", err);
                }
            }
            Err(err) => console::error!("menu toggle failed", err),
        }
    });
    binding.listen(listener);
}
