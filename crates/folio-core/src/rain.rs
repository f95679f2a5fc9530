//! Column-based falling-symbol ("binary rain") simulation.
//!
//! Ticks on a fixed wall-clock cadence rather than per frame. Each column
//! falls one glyph row per tick. Once past the bottom edge it resets to the
//! top with a small probability per tick, so resets are staggered. Pass a
//! seeded RNG for reproducible resets.

use crate::color::Palette;
use crate::constants::{
    RAIN_ALPHABET, RAIN_GLYPH_PX, RAIN_INITIAL_ROW_MIN, RAIN_RESET_PROBABILITY, RAIN_TICK_MS,
};
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainConfig {
    pub glyph_px: f32,
    pub alphabet: &'static str,
    pub tick_ms: u32,
    pub reset_probability: f64,
    /// Columns start at a row uniform in `[initial_row_min, 0)`.
    pub initial_row_min: i32,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            glyph_px: RAIN_GLYPH_PX,
            alphabet: RAIN_ALPHABET,
            tick_ms: RAIN_TICK_MS,
            reset_probability: RAIN_RESET_PROBABILITY,
            initial_row_min: RAIN_INITIAL_ROW_MIN,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RainColumn {
    pub row: i32,
}

#[derive(Clone, Debug)]
pub struct RainSim {
    cfg: RainConfig,
    glyphs: Vec<char>,
    columns: Vec<RainColumn>,
    size: Vec2,
}

impl RainSim {
    pub fn new<R: Rng>(cfg: RainConfig, size: Vec2, rng: &mut R) -> Self {
        let mut sim = Self {
            cfg,
            glyphs: cfg.alphabet.chars().collect(),
            columns: Vec::new(),
            size: size.max(Vec2::ZERO),
        };
        sim.columns = sim.fresh_columns(rng);
        sim
    }

    pub fn config(&self) -> &RainConfig {
        &self.cfg
    }

    pub fn columns(&self) -> &[RainColumn] {
        &self.columns
    }

    pub fn column_count_for(&self, width: f32) -> usize {
        if self.cfg.glyph_px <= 0.0 {
            return 0;
        }
        (width.max(0.0) / self.cfg.glyph_px).floor() as usize
    }

    fn fresh_columns<R: Rng>(&self, rng: &mut R) -> Vec<RainColumn> {
        let min = self.cfg.initial_row_min.min(-1);
        (0..self.column_count_for(self.size.x))
            .map(|_| RainColumn {
                row: rng.gen_range(min..0),
            })
            .collect()
    }

    /// New canvas size. Columns are rebuilt only when their count changes so
    /// a height-only resize keeps the rain in place.
    pub fn resize<R: Rng>(&mut self, size: Vec2, rng: &mut R) {
        self.size = size.max(Vec2::ZERO);
        if self.column_count_for(self.size.x) != self.columns.len() {
            self.columns = self.fresh_columns(rng);
            log::debug!("rain rebuilt with {} columns", self.columns.len());
        }
    }

    /// One tick: fade previous glyphs, draw one glyph per column, advance.
    pub fn tick<R: Rng, S: Surface + ?Sized>(
        &mut self,
        rng: &mut R,
        surface: &mut S,
        palette: &Palette,
    ) {
        surface.fill_rect(Vec2::ZERO, self.size, palette.rain_fade);

        let glyph_px = self.cfg.glyph_px;
        for (i, col) in self.columns.iter_mut().enumerate() {
            let x = i as f32 * glyph_px;
            let y = col.row as f32 * glyph_px;

            if !self.glyphs.is_empty() {
                let glyph = self.glyphs[rng.gen_range(0..self.glyphs.len())];
                surface.glyph(glyph, Vec2::new(x, y), glyph_px, palette.rain_glyph);
            }

            if y > self.size.y && rng.gen_bool(self.cfg.reset_probability.clamp(0.0, 1.0)) {
                col.row = 0;
            } else {
                col.row += 1;
            }
        }
    }
}
