// Shared helpers for host-side engine tests.

#![allow(dead_code)]
use folio_core::{Rgba, Surface};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    FillRect { origin: Vec2, size: Vec2, color: Rgba },
    Line { from: Vec2, to: Vec2, color: Rgba },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Glyph { glyph: char, at: Vec2, color: Rgba },
}

/// In-memory surface that records every draw call.
pub struct Recorder {
    pub size: Vec2,
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            calls: Vec::new(),
        }
    }

    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for Recorder {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.calls.push(DrawCall::FillRect {
            origin,
            size,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, _width: f32, color: Rgba) {
        self.calls.push(DrawCall::Line { from, to, color });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn glyph(&mut self, glyph: char, at: Vec2, _font_px: f32, color: Rgba) {
        self.calls.push(DrawCall::Glyph { glyph, at, color });
    }
}
