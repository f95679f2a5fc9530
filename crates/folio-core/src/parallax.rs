//! Scroll-driven parallax.
//!
//! [`ScrollParallax`] moves an element relative to its distance from the
//! viewport center, optionally fading and scaling it. [`ParallaxLayer`] is
//! the simpler background variant that drifts at a fraction of the global
//! scroll offset regardless of where the element sits.

use crate::constants::{
    FADE_IN_BOOST, PARALLAX_LAYER_SPEED_DEFAULT, PARALLAX_SPEED_DEFAULT, SCALE_MIN, SCALE_SPAN,
};
use crate::error::FxError;
use crate::geometry::Rect;
use glam::Vec2;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }
}

impl FromStr for Direction {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "up" | "Up" | "UP" => Ok(Direction::Up),
            "down" | "Down" | "DOWN" => Ok(Direction::Down),
            _ => Err(FxError::invalid("direction", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub speed: f32,
    pub direction: Direction,
    pub fade_out: bool,
    pub scale_effect: bool,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            speed: PARALLAX_SPEED_DEFAULT,
            direction: Direction::Up,
            fade_out: false,
            scale_effect: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxValues {
    pub y: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl Default for ParallaxValues {
    fn default() -> Self {
        Self {
            y: 0.0,
            opacity: 1.0,
            scale: 1.0,
        }
    }
}

impl ParallaxValues {
    /// CSS `transform` value for these values.
    pub fn transform_css(&self) -> String {
        format!("translate3d(0, {:.2}px, 0) scale({:.4})", self.y, self.scale)
    }

    /// Where a box laid out at `layout` is drawn once these values are applied
    /// as its transform (origin at the box center).
    pub fn apply_to(&self, layout: Rect) -> Rect {
        let center = layout.center() + Vec2::new(0.0, self.y);
        let size = layout.size() * self.effective_scale();
        Rect::new(
            center.x - size.x * 0.5,
            center.y - size.y * 0.5,
            size.x,
            size.y,
        )
    }

    /// Inverse of [`ParallaxValues::apply_to`]: recovers the layout box from
    /// a measured rectangle that already includes these values.
    pub fn untransform(&self, measured: Rect) -> Rect {
        let center = measured.center() - Vec2::new(0.0, self.y);
        let size = measured.size() / self.effective_scale();
        Rect::new(
            center.x - size.x * 0.5,
            center.y - size.y * 0.5,
            size.x,
            size.y,
        )
    }

    fn effective_scale(&self) -> f32 {
        if self.scale > 0.0 {
            self.scale
        } else {
            1.0
        }
    }
}

/// Signed distance from the element's vertical center to the viewport's.
/// Positive when the element sits below center.
#[inline]
pub fn distance_from_center(rect: Rect, viewport_height: f32) -> f32 {
    (rect.top + rect.height * 0.5) - viewport_height * 0.5
}

/// Pure parallax computation for one element.
pub fn compute(rect: Rect, viewport_height: f32, cfg: &ParallaxConfig) -> ParallaxValues {
    let distance = distance_from_center(rect, viewport_height);
    let y = distance * cfg.speed * cfg.direction.sign();

    let opacity = if cfg.fade_out {
        fade_opacity(rect, viewport_height)
    } else {
        1.0
    };

    let scale = if cfg.scale_effect && viewport_height > 0.0 {
        let progress = 1.0 - distance.abs() / viewport_height;
        SCALE_MIN + progress * SCALE_SPAN
    } else {
        1.0
    };

    ParallaxValues { y, opacity, scale }
}

/// Visible fraction along the vertical axis, boosted so the element is fully
/// opaque before it is fully inside the viewport.
pub fn fade_opacity(rect: Rect, viewport_height: f32) -> f32 {
    if viewport_height <= 0.0 {
        return 1.0;
    }
    let from_top = ((viewport_height - rect.top) / viewport_height).max(0.0);
    let from_bottom = (rect.bottom() / viewport_height).max(0.0);
    let visible = from_top.min(from_bottom).clamp(0.0, 1.0);
    (visible * FADE_IN_BOOST).clamp(0.0, 1.0)
}

/// Stateful parallax for one registered element. Keeps the last computed
/// values so a detached target leaves its transform untouched.
#[derive(Clone, Debug, Default)]
pub struct ScrollParallax {
    cfg: ParallaxConfig,
    values: ParallaxValues,
}

impl ScrollParallax {
    pub fn new(cfg: ParallaxConfig) -> Self {
        Self {
            cfg,
            values: ParallaxValues::default(),
        }
    }

    pub fn config(&self) -> &ParallaxConfig {
        &self.cfg
    }

    pub fn values(&self) -> ParallaxValues {
        self.values
    }

    /// Recomputes from the target's current rectangle. `None` means the
    /// target is not mounted: the previous values are returned unchanged.
    pub fn update(&mut self, rect: Option<Rect>, viewport_height: f32) -> ParallaxValues {
        if let Some(rect) = rect {
            self.values = compute(rect, viewport_height, &self.cfg);
        }
        self.values
    }

    /// Like [`ScrollParallax::update`], for a rectangle measured on the
    /// element that carries the transform. The transform applied last time
    /// is removed first so the result depends only on layout position.
    pub fn update_measured(
        &mut self,
        measured: Option<Rect>,
        viewport_height: f32,
    ) -> ParallaxValues {
        let layout = measured.map(|r| self.values.untransform(r));
        self.update(layout, viewport_height)
    }
}

/// Background layer drifting at `speed` times the scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub speed: f32,
    offset: f32,
}

impl Default for ParallaxLayer {
    fn default() -> Self {
        Self::new(PARALLAX_LAYER_SPEED_DEFAULT)
    }
}

impl ParallaxLayer {
    pub fn new(speed: f32) -> Self {
        Self { speed, offset: 0.0 }
    }

    pub fn update(&mut self, scroll_y: f32) -> f32 {
        self.offset = layer_offset(scroll_y, self.speed);
        self.offset
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

#[inline]
pub fn layer_offset(scroll_y: f32, speed: f32) -> f32 {
    scroll_y * speed
}
