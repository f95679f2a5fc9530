//! Procedurally generated particle layouts.
//!
//! A [`ParticleField`] belongs to one mount. It returns an empty layout until
//! the host marks it ready (so nothing randomized is rendered before the host
//! can show it), then generates once and hands out the same shared sequence
//! until the requested count changes.

use crate::color::Hue;
use crate::constants::{
    PARTICLE_DELAY_MAX_SEC, PARTICLE_DURATION_MIN_SEC, PARTICLE_DURATION_SPAN_SEC,
    PARTICLE_SIZE_MIN_PX, PARTICLE_SIZE_SPAN_PX,
};
use rand::Rng;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleDescriptor {
    pub id: usize,
    pub width: f32,
    pub height: f32,
    /// Percent of the container width, in \[0, 100).
    pub left: f32,
    /// Percent of the container height, in \[0, 100).
    pub top: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
}

impl ParticleDescriptor {
    pub fn style_css(&self) -> String {
        format!(
            "width:{:.2}px;height:{:.2}px;left:{:.3}%;top:{:.3}%;animation-delay:{:.2}s;animation-duration:{:.2}s",
            self.width, self.height, self.left, self.top, self.delay_sec, self.duration_sec
        )
    }
}

/// Uniform sampling ranges, each `[min, min + span)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldRanges {
    pub size_min: f32,
    pub size_span: f32,
    pub delay_max: f32,
    pub duration_min: f32,
    pub duration_span: f32,
}

impl Default for FieldRanges {
    fn default() -> Self {
        Self {
            size_min: PARTICLE_SIZE_MIN_PX,
            size_span: PARTICLE_SIZE_SPAN_PX,
            delay_max: PARTICLE_DELAY_MAX_SEC,
            duration_min: PARTICLE_DURATION_MIN_SEC,
            duration_span: PARTICLE_DURATION_SPAN_SEC,
        }
    }
}

pub fn generate<R: Rng>(
    count: usize,
    ranges: &FieldRanges,
    rng: &mut R,
) -> Vec<ParticleDescriptor> {
    (0..count)
        .map(|id| ParticleDescriptor {
            id,
            width: ranges.size_min + rng.gen::<f32>() * ranges.size_span,
            height: ranges.size_min + rng.gen::<f32>() * ranges.size_span,
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            delay_sec: rng.gen::<f32>() * ranges.delay_max,
            duration_sec: ranges.duration_min + rng.gen::<f32>() * ranges.duration_span,
        })
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    ranges: FieldRanges,
    hue: Hue,
    ready: bool,
    cached: Option<(usize, Rc<[ParticleDescriptor]>)>,
}

impl ParticleField {
    pub fn new(hue: Hue) -> Self {
        Self {
            hue,
            ..Self::default()
        }
    }

    pub fn with_ranges(mut self, ranges: FieldRanges) -> Self {
        self.ranges = ranges;
        self.cached = None;
        self
    }

    pub fn hue(&self) -> Hue {
        self.hue
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Called once the host can render randomized layout.
    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    pub fn particles<R: Rng>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Rc<[ParticleDescriptor]> {
        if !self.ready {
            return Rc::from(Vec::new());
        }
        match &self.cached {
            Some((cached_count, particles)) if *cached_count == count => particles.clone(),
            _ => {
                let particles: Rc<[ParticleDescriptor]> =
                    generate(count, &self.ranges, rng).into();
                log::debug!("generated {} particles", count);
                self.cached = Some((count, particles.clone()));
                particles
            }
        }
    }
}
