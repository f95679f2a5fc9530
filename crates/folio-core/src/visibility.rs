//! One-shot reveal signal driven by viewport intersection.

use crate::constants::{REVEAL_STAGGER_STEP_MS, REVEAL_THRESHOLD_DEFAULT};
use crate::geometry::{Rect, Viewport};

/// One intersection observation: what a browser reports as
/// `IntersectionObserverEntry { isIntersecting, intersectionRatio }`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f32,
}

impl IntersectionSample {
    /// Computes a sample from layout, for hosts without an intersection API.
    pub fn from_layout(rect: Rect, viewport: Viewport) -> Self {
        let ratio = rect.visible_fraction(viewport);
        Self {
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }
}

/// Monotonic "revealed" latch for one target.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityTrigger {
    threshold: f32,
    revealed: bool,
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD_DEFAULT)
    }
}

impl VisibilityTrigger {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one observation. Returns true only for the observation that
    /// flips the latch, so hosts know when to stop observing.
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if self.revealed {
            return false;
        }
        if sample.is_intersecting && sample.ratio >= self.threshold {
            self.revealed = true;
            return true;
        }
        false
    }
}

/// Transition delay for the `index`-th child of a revealed group.
#[inline]
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

#[inline]
pub fn default_stagger_delay_ms(index: usize) -> u32 {
    stagger_delay_ms(index, REVEAL_STAGGER_STEP_MS)
}
