//! Minimal 2-D drawing interface the canvas simulations render into.
//!
//! The browser implements it over `CanvasRenderingContext2d`; tests use an
//! in-memory recorder.

use crate::color::Rgba;
use glam::Vec2;

pub trait Surface {
    /// Backing size in pixels.
    fn size(&self) -> Vec2;
    fn clear(&mut self);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Draws `glyph` with its baseline-left corner at `at`.
    fn glyph(&mut self, glyph: char, at: Vec2, font_px: f32, color: Rgba);
}
