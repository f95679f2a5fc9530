//! Host-independent layout types.
//!
//! Rectangles are in viewport (client) coordinates, matching what a browser
//! reports from `getBoundingClientRect`.

use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Fraction of this rectangle's area inside `viewport`, in \[0, 1\].
    pub fn visible_fraction(&self, viewport: Viewport) -> f32 {
        let area = self.width * self.height;
        if area <= 0.0 {
            return 0.0;
        }
        let w = (self.right().min(viewport.width) - self.left.max(0.0)).max(0.0);
        let h = (self.bottom().min(viewport.height) - self.top.max(0.0)).max(0.0);
        ((w * h) / area).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.height * 0.5
    }
}
