//! Easing of the offset marker drawn on the schematic.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use crate::config::{MARKER_EASING, MARKER_SETTLE_MM};

/// Outcome of advancing the marker by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerStep {
    /// Still travelling; another frame is needed.
    Moving(f64),
    /// Reached the target. No further frames.
    Settled(f64),
}

impl MarkerStep {
    pub fn position(self) -> f64 {
        match self {
            MarkerStep::Moving(p) | MarkerStep::Settled(p) => p,
        }
    }

    pub fn is_settled(self) -> bool {
        matches!(self, MarkerStep::Settled(_))
    }
}

/// Move `current` a fixed fraction of the way to `target`.
///
/// Snaps to `target` once the remaining distance is under the settle threshold.
/// A non-finite target or position settles immediately.
pub fn step_marker(current: f64, target: f64) -> MarkerStep {
    if !target.is_finite()
        || !current.is_finite()
        || (target - current).abs() < MARKER_SETTLE_MM
    {
        return MarkerStep::Settled(target);
    }
    MarkerStep::Moving(current + (target - current) * MARKER_EASING)
}

/// Whether another animation frame would move the marker at all.
///
/// Compares bit patterns so a NaN target stops the loop once the marker holds it.
pub fn needs_frame(current: f64, target: f64) -> bool {
    step_marker(current, target).position().to_bits() != current.to_bits()
}
