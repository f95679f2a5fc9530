//! Pointer-driven parallax for decorative elements inside a container.

use crate::error::FxError;
use crate::geometry::Rect;
use glam::Vec2;
use std::str::FromStr;

/// What happens to the offsets when the pointer leaves the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeaveBehavior {
    /// Keep the last offsets.
    #[default]
    Freeze,
    /// Snap back to zero.
    Reset,
}

impl FromStr for LeaveBehavior {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "freeze" => Ok(LeaveBehavior::Freeze),
            "reset" => Ok(LeaveBehavior::Reset),
            _ => Err(FxError::invalid("leave", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Pointer displacement from the container center divided by the
    /// container size, roughly in \[-0.5, 0.5\] per axis.
    pub ratio: Vec2,
    pub active: bool,
}

/// `(pointer - center) / size` per axis. Degenerate axes yield zero.
#[inline]
pub fn normalized_offset(pointer: Vec2, container: Rect) -> Vec2 {
    let center = container.center();
    let size = container.size();
    let axis = |p: f32, c: f32, s: f32| if s > 0.0 { (p - c) / s } else { 0.0 };
    Vec2::new(
        axis(pointer.x, center.x, size.x),
        axis(pointer.y, center.y, size.y),
    )
}

#[derive(Clone, Debug, Default)]
pub struct PointerParallax {
    container: Rect,
    leave: LeaveBehavior,
    state: PointerState,
}

impl PointerParallax {
    pub fn new(container: Rect, leave: LeaveBehavior) -> Self {
        Self {
            container,
            leave,
            state: PointerState::default(),
        }
    }

    pub fn set_container(&mut self, container: Rect) {
        self.container = container;
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Pointer moved to `pointer` (same coordinate space as the container).
    pub fn on_move(&mut self, pointer: Vec2) -> PointerState {
        self.state = PointerState {
            ratio: normalized_offset(pointer, self.container),
            active: true,
        };
        self.state
    }

    pub fn on_leave(&mut self) -> PointerState {
        self.state.active = false;
        if self.leave == LeaveBehavior::Reset {
            self.state.ratio = Vec2::ZERO;
        }
        self.state
    }

    /// Offset for an element with the given sensitivity.
    #[inline]
    pub fn offset_for(&self, sensitivity: f32) -> Vec2 {
        self.state.ratio * sensitivity
    }
}
