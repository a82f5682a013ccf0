//! The six enhancement routines and their public initializers.
//!
//! Each initializer scans `doc` for its convention (an id, a data attribute,
//! or a class), wires listeners or observers onto matching elements, and
//! returns a [`Binding`] that detaches everything on drop. Elements already
//! claimed by a previous pass are skipped, so re-running an initializer
//! after a content swap is safe.

mod alerts;
mod counters;
mod forms;
mod lazy;
mod menu;
mod scroll;

use crate::bind::{Binding, Bindings};
use web_sys::Document;

/// Wire every routine over `doc` in one pass.
#[must_use]
pub fn init_all(doc: &Document) -> Bindings {
    Bindings {
        menu: init_mobile_menu(doc),
        lazy_images: init_lazy_images(doc),
        counters: init_counters(doc),
        forms: init_form_validation(doc),
        anchors: init_smooth_scroll(doc),
        alerts: init_alert_dismiss(doc),
    }
}

/// Wire the mobile navigation trigger to its panel.
#[must_use]
pub fn init_mobile_menu(doc: &Document) -> Binding {
    let mut binding = Binding::default();
    menu::init(doc, &mut binding);
    binding
}

/// Defer `img[data-src]` loading until the image scrolls into view.
#[must_use]
pub fn init_lazy_images(doc: &Document) -> Binding {
    let mut binding = Binding::default();
    lazy::init(doc, &mut binding);
    binding
}

/// Animate `[data-count]` elements from zero once half-visible.
#[must_use]
pub fn init_counters(doc: &Document) -> Binding {
    let mut binding = Binding::default();
    counters::init(doc, &mut binding);
    binding
}

/// Intercept submits of `form[data-validate]` that fail native validation.
#[must_use]
pub fn init_form_validation(doc: &Document) -> Binding {
    let mut binding = Binding::default();
    forms::init(doc, &mut binding);
    binding
}

/// Replace in-page anchor jumps with smooth scrolling.
#[must_use]
pub fn init_smooth_scroll(doc: &Document) -> Binding {
    let mut binding = Binding::default();
    scroll::init(doc, &mut binding);
    binding
}

/// Fade out and remove dismissible alerts on close.
#[must_use]
pub fn init_alert_dismiss(doc: &Document) -> Binding {
    let mut binding = Binding::default();
    alerts::init(doc, &mut binding);
    binding
}
