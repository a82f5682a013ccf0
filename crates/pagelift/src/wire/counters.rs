//! Animated metric counters for `[data-count]` elements.

use crate::bind::{Binding, select_all};
use crate::logic::counter::{Frame, Tween, parse_target, render, suffix_of};
use crate::viewport::{self, Strategy};
use gloo::render::{AnimationFrame, request_animation_frame};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element};

const TARGET_ATTR: &str = "data-count";

/// Half the element must be visible before the count-up starts.
const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Start each counter once it is half-visible, or immediately when
/// intersection observation is unavailable. Each element animates at most
/// once.
pub(super) fn init(doc: &Document, binding: &mut Binding) {
    let selector = format!("[{TARGET_ATTR}]");
    match viewport::strategy() {
        Strategy::Observed => {
            let Some(observer) = viewport::enter_observer(
                Some(VISIBILITY_THRESHOLD),
                |element, observer| {
                    observer.unobserve(&element);
                    animate(&element);
                },
            ) else {
                return;
            };
            let mut observing = false;
            for element in select_all(doc, &selector) {
                if binding.claim(&element, "count") {
                    observer.observe(&element);
                    observing = true;
                }
            }
            if observing {
                binding.watch(observer);
            }
        }
        Strategy::Immediate => {
            for element in select_all(doc, &selector) {
                if binding.claim(&element, "count") {
                    animate(&element);
                }
            }
        }
    }
}

struct Run {
    element: Element,
    tween: Tween,
    suffix: Option<char>,
    frame: Option<AnimationFrame>,
}

/// Drive one element from zero to its target, frame by frame. Elements
/// without a parseable integer target are skipped.
fn animate(element: &Element) {
    let Some(target) = element
        .get_attribute(TARGET_ATTR)
        .as_deref()
        .and_then(parse_target)
    else {
        return;
    };
    let suffix = suffix_of(&element.text_content().unwrap_or_default());
    let run = Rc::new(RefCell::new(Run {
        element: element.clone(),
        tween: Tween::new(target),
        suffix,
        frame: None,
    }));
    step(&run);
}

fn step(run: &Rc<RefCell<Run>>) {
    let mut state = run.borrow_mut();
    match state.tween.advance() {
        Frame::Running(value) => {
            let text = render(value, state.suffix);
            state.element.set_text_content(Some(&text));
            let next = Rc::clone(run);
            state.frame = Some(request_animation_frame(move |_timestamp| step(&next)));
        }
        Frame::Done(value) => {
            let text = render(value, state.suffix);
            state.element.set_text_content(Some(&text));
            // Dropping the handle here breaks the Rc cycle through the
            // scheduled closure.
            state.frame = None;
        }
    }
}
