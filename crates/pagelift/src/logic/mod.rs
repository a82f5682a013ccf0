//! Pure, natively-testable logic behind the DOM wiring routines.

pub mod anchor;
pub mod counter;

/// `aria-expanded` value mirroring the menu panel's visibility.
#[must_use]
pub const fn expanded_value(visible: bool) -> &'static str {
    if visible { "true" } else { "false" }
}

/// Marker attribute recording that `routine` wired an element.
///
/// A routine sets this attribute when it claims an element, checks it to
/// skip re-wiring, and removes it again when its binding drops. All three
/// go through this one function so teardown restores exactly the state a
/// later wiring pass inspects.
#[must_use]
pub fn wired_attr(routine: &str) -> String {
    format!("data-pagelift-{routine}")
}

#[cfg(test)]
mod tests {
    use super::{expanded_value, wired_attr};

    #[test]
    fn expanded_tracks_visibility() {
        assert_eq!(expanded_value(true), "true");
        assert_eq!(expanded_value(false), "false");
    }

    #[test]
    fn wired_markers_are_stable() {
        // Claiming, skipping, and releasing must all name the same
        // attribute, or a disposed element could never be wired again.
        assert_eq!(wired_attr("menu"), "data-pagelift-menu");
        assert_eq!(wired_attr("menu"), wired_attr("menu"));
    }

    #[test]
    fn routines_never_share_a_marker() {
        let routines = ["menu", "lazy", "count", "validate", "anchor", "alert"];
        for (index, first) in routines.iter().enumerate() {
            for second in &routines[index + 1..] {
                assert_ne!(wired_attr(first), wired_attr(second));
            }
        }
    }
}
