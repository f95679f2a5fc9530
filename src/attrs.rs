// Parsing of per-element data attributes into engine configuration.
// Pure functions over an attribute lookup so they run on the host in tests.

use crate::constants::*;
use folio_core::{
    Direction, FxError, FxResult, Hue, LeaveBehavior, ParallaxConfig, PARALLAX_LAYER_SPEED_DEFAULT,
    PARTICLE_COUNT_DEFAULT, PARTICLE_COUNT_MAX, REVEAL_THRESHOLD_DEFAULT,
};

/// Canvas simulations selectable with `data-fx`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasFx {
    Network,
    Rain,
}

#[inline]
pub fn canvas_fx(value: &str) -> Option<CanvasFx> {
    match value.trim() {
        "network" => Some(CanvasFx::Network),
        "rain" | "binary-rain" => Some(CanvasFx::Rain),
        _ => None,
    }
}

pub fn parse_f32(key: &str, raw: &str) -> FxResult<f32> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FxError::invalid(key, raw))
}

/// Boolean attribute: present and empty, "true" or "1" means on.
pub fn parse_flag(key: &str, raw: Option<&str>) -> FxResult<bool> {
    match raw.map(str::trim) {
        None | Some("false") | Some("0") => Ok(false),
        Some("") | Some("true") | Some("1") => Ok(true),
        Some(other) => Err(FxError::invalid(key, other)),
    }
}

pub fn parallax_config(get: impl Fn(&str) -> Option<String>) -> FxResult<ParallaxConfig> {
    let mut cfg = ParallaxConfig::default();
    if let Some(raw) = get(ATTR_SPEED) {
        cfg.speed = parse_f32(ATTR_SPEED, &raw)?;
    }
    if let Some(raw) = get(ATTR_DIRECTION) {
        cfg.direction = raw.parse::<Direction>()?;
    }
    cfg.fade_out = parse_flag(ATTR_FADE, get(ATTR_FADE).as_deref())?;
    cfg.scale_effect = parse_flag(ATTR_SCALE, get(ATTR_SCALE).as_deref())?;
    Ok(cfg)
}

pub fn layer_speed(get: impl Fn(&str) -> Option<String>) -> FxResult<f32> {
    match get(ATTR_SPEED) {
        Some(raw) => parse_f32(ATTR_SPEED, &raw),
        None => Ok(PARALLAX_LAYER_SPEED_DEFAULT),
    }
}

/// `data-reveal` with no value uses the default threshold.
pub fn reveal_threshold(raw: &str) -> FxResult<f32> {
    if raw.trim().is_empty() {
        return Ok(REVEAL_THRESHOLD_DEFAULT);
    }
    let t = parse_f32(ATTR_REVEAL, raw)?;
    if (0.0..=1.0).contains(&t) {
        Ok(t)
    } else {
        Err(FxError::invalid(ATTR_REVEAL, raw))
    }
}

pub fn leave_behavior(raw: Option<&str>) -> FxResult<LeaveBehavior> {
    raw.unwrap_or_default().parse()
}

pub fn sensitivity(raw: Option<&str>) -> FxResult<f32> {
    match raw.map(str::trim) {
        None | Some("") => Ok(POINTER_SENSITIVITY_DEFAULT),
        Some(v) => parse_f32(ATTR_SENSITIVITY, v),
    }
}

/// `(count, color)` for a particle field. Counts above
/// `PARTICLE_COUNT_MAX` are rejected.
pub fn particle_params(get: impl Fn(&str) -> Option<String>) -> FxResult<(usize, Hue)> {
    let count = match get(ATTR_COUNT) {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|&n| n <= PARTICLE_COUNT_MAX)
            .ok_or_else(|| FxError::invalid(ATTR_COUNT, raw.as_str()))?,
        None => PARTICLE_COUNT_DEFAULT,
    };
    let hue = match get(ATTR_COLOR) {
        Some(raw) => raw.parse::<Hue>()?,
        None => Hue::Accent,
    };
    Ok((count, hue))
}

/// Unwraps a parsed attribute, logging and falling back on bad markup.
pub fn or_warn<T>(res: FxResult<T>, fallback: T) -> T {
    res.unwrap_or_else(|e| {
        log::warn!("{}; using default", e);
        fallback
    })
}
