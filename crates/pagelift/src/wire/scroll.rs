//! Smooth scrolling for in-page anchor links.

use crate::bind::{Binding, select_all};
use crate::logic::anchor::fragment;
use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Replace the default jump with a smooth scroll whenever the anchor's
/// fragment names an existing element. Bare `#` anchors and dangling
/// fragments keep default navigation.
pub(super) fn init(doc: &Document, binding: &mut Binding) {
    for anchor in select_all(doc, "a[href^='#']") {
        if !binding.claim(&anchor, "anchor") {
            continue;
        }
        let listener = EventListener::new_with_options(
            &anchor.clone(),
            "click",
            EventListenerOptions::enable_prevent_default(),
            {
                let doc = doc.clone();
                move |event| {
                    let Some(href) = anchor.get_attribute("href") else {
                        return;
                    };
                    let Some(id) = fragment(&href) else {
                        return;
                    };
                    let Some(target) = doc.get_element_by_id(id) else {
                        return;
                    };
                    event.prevent_default();
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            },
        );
        binding.listen(listener);
    }
}
