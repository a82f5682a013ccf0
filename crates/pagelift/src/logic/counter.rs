//! Count-up pacing for the animated metric counters.
//!
//! A counter runs over a fixed 2000 ms window at an assumed 60 steps/second
//! cadence: the accumulator advances by `target / 125` per frame, every
//! intermediate frame displays the floored accumulator, and the final frame
//! snaps exactly to the target so rounding drift never shows.

/// Full animation window in milliseconds.
pub const DURATION_MS: u32 = 2_000;

/// Assumed frame interval for a 60 steps/second cadence.
pub const FRAME_MS: u32 = 16;

/// Animation steps across the full window.
pub const STEPS: u32 = DURATION_MS / FRAME_MS;

/// Parse the integer animation target from its attribute value.
#[must_use]
pub fn parse_target(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// First `+` or `%` in the element's initial text, preserved across frames.
#[must_use]
pub fn suffix_of(text: &str) -> Option<char> {
    text.chars().find(|c| matches!(c, '+' | '%'))
}

/// Text displayed for one frame, with the preserved suffix appended.
#[must_use]
pub fn render(value: i64, suffix: Option<char>) -> String {
    suffix.map_or_else(|| value.to_string(), |suffix| format!("{value}{suffix}"))
}

/// One counter animation in progress.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    target: i64,
    current: f64,
}

/// Outcome of advancing a tween by one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Intermediate frame showing the floored accumulator.
    Running(i64),
    /// Final frame snapping exactly to the target.
    Done(i64),
}

impl Tween {
    /// Start a fresh count-up toward `target`.
    #[must_use]
    pub const fn new(target: i64) -> Self {
        Self {
            target,
            current: 0.0,
        }
    }

    /// Advance one frame and report what to display.
    ///
    /// Targets at or below zero complete on the first frame.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn advance(&mut self) -> Frame {
        self.current += self.target as f64 / f64::from(STEPS);
        if self.current < self.target as f64 {
            Frame::Running(self.current.floor() as i64)
        } else {
            Frame::Done(self.target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Frame, Tween, parse_target, render, suffix_of};

    fn run_to_completion(target: i64) -> (Vec<i64>, i64) {
        let mut tween = Tween::new(target);
        let mut frames = Vec::new();
        loop {
            match tween.advance() {
                Frame::Running(value) => {
                    frames.push(value);
                    assert!(frames.len() < 10_000, "tween failed to terminate");
                }
                Frame::Done(value) => return (frames, value),
            }
        }
    }

    #[test]
    fn lands_exactly_on_the_target() {
        let (frames, last) = run_to_completion(847);
        assert_eq!(last, 847);
        assert!(frames.iter().all(|value| *value < 847));
    }

    #[test]
    fn intermediate_values_never_decrease() {
        let (frames, _) = run_to_completion(250);
        assert!(frames.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn even_targets_use_every_frame() {
        // 1000 / 125 = 8 exactly, so step 125 lands on the target and the
        // 124 steps before it all run.
        let (frames, last) = run_to_completion(1_000);
        assert_eq!(frames.len(), 124);
        assert_eq!(last, 1_000);
    }

    #[test]
    fn zero_and_negative_targets_snap_immediately() {
        assert_eq!(run_to_completion(0), (Vec::new(), 0));
        assert_eq!(run_to_completion(-40), (Vec::new(), -40));
    }

    #[test]
    fn target_parsing_rejects_non_integers() {
        assert_eq!(parse_target("250"), Some(250));
        assert_eq!(parse_target(" 42 "), Some(42));
        assert_eq!(parse_target("12px"), None);
        assert_eq!(parse_target(""), None);
    }

    #[test]
    fn suffix_sniffing_finds_plus_and_percent() {
        assert_eq!(suffix_of("250+"), Some('+'));
        assert_eq!(suffix_of("98%"), Some('%'));
        assert_eq!(suffix_of("1200"), None);
        assert_eq!(suffix_of(""), None);
    }

    #[test]
    fn rendered_frames_carry_the_suffix() {
        assert_eq!(render(42, Some('%')), "42%");
        assert_eq!(render(99, Some('+')), "99+");
        assert_eq!(render(7, None), "7");
    }
}
