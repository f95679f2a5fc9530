// Host-side tests for data-attribute parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod attrs {
    include!("../src/attrs.rs");
}

use attrs::*;
use folio_core::{Direction, FxError, Hue, LeaveBehavior, ParallaxConfig};
use std::collections::HashMap;

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    let map: HashMap<&str, &str> = pairs.iter().copied().collect();
    move |name: &str| map.get(name).map(|v| v.to_string())
}

#[test]
fn parallax_attributes_default_when_absent() {
    let cfg = parallax_config(lookup(&[])).unwrap();
    assert_eq!(cfg, ParallaxConfig::default());
}

#[test]
fn parallax_attributes_override_defaults() {
    let cfg = parallax_config(lookup(&[
        ("data-speed", "0.5"),
        ("data-direction", "down"),
        ("data-fade", ""),
        ("data-scale", "false"),
    ]))
    .unwrap();
    assert_eq!(cfg.speed, 0.5);
    assert_eq!(cfg.direction, Direction::Down);
    assert!(cfg.fade_out);
    assert!(!cfg.scale_effect);
}

#[test]
fn bad_speed_is_reported_with_its_key() {
    let err = parallax_config(lookup(&[("data-speed", "fast")])).unwrap_err();
    assert_eq!(err, FxError::invalid("data-speed", "fast"));

    let err = parallax_config(lookup(&[("data-speed", "NaN")])).unwrap_err();
    assert!(matches!(err, FxError::InvalidConfig { .. }));
}

#[test]
fn flags_accept_common_spellings() {
    assert!(!parse_flag("k", None).unwrap());
    assert!(parse_flag("k", Some("")).unwrap());
    assert!(parse_flag("k", Some("true")).unwrap());
    assert!(parse_flag("k", Some("1")).unwrap());
    assert!(!parse_flag("k", Some("0")).unwrap());
    assert!(parse_flag("k", Some("maybe")).is_err());
}

#[test]
fn layer_speed_defaults_to_half() {
    assert_eq!(layer_speed(lookup(&[])).unwrap(), 0.5);
    assert_eq!(layer_speed(lookup(&[("data-speed", "0.2")])).unwrap(), 0.2);
}

#[test]
fn reveal_threshold_is_bounded() {
    assert_eq!(reveal_threshold("").unwrap(), 0.1);
    assert_eq!(reveal_threshold("0.2").unwrap(), 0.2);
    assert!(reveal_threshold("1.5").is_err());
    assert!(reveal_threshold("-0.1").is_err());
}

#[test]
fn pointer_attributes() {
    assert_eq!(leave_behavior(None).unwrap(), LeaveBehavior::Freeze);
    assert_eq!(leave_behavior(Some("")).unwrap(), LeaveBehavior::Freeze);
    assert_eq!(leave_behavior(Some("reset")).unwrap(), LeaveBehavior::Reset);
    assert!(leave_behavior(Some("bounce")).is_err());

    assert_eq!(sensitivity(None).unwrap(), constants::POINTER_SENSITIVITY_DEFAULT);
    assert_eq!(sensitivity(Some("-20")).unwrap(), -20.0);
}

#[test]
fn particle_params_parse_count_and_color() {
    assert_eq!(particle_params(lookup(&[])).unwrap(), (30, Hue::Accent));
    assert_eq!(
        particle_params(lookup(&[("data-count", "12"), ("data-color", "Pink")])).unwrap(),
        (12, Hue::Pink)
    );
    assert!(particle_params(lookup(&[("data-count", "-3")])).is_err());
    assert!(particle_params(lookup(&[("data-color", "mauve")])).is_err());
}

#[test]
fn particle_count_is_capped() {
    assert_eq!(particle_params(lookup(&[("data-count", "500")])).unwrap().0, 500);
    assert_eq!(
        particle_params(lookup(&[("data-count", "501")])).unwrap_err(),
        FxError::invalid("data-count", "501")
    );
    assert!(particle_params(lookup(&[("data-count", "18446744073709551615")])).is_err());
    assert!(particle_params(lookup(&[("data-count", "99999999999999999999999")])).is_err());
    assert_eq!(
        or_warn(particle_params(lookup(&[("data-count", "100000")])), (30, Hue::Accent)),
        (30, Hue::Accent)
    );
}

#[test]
fn canvas_effects_by_name() {
    assert_eq!(canvas_fx("network"), Some(CanvasFx::Network));
    assert_eq!(canvas_fx(" rain "), Some(CanvasFx::Rain));
    assert_eq!(canvas_fx("binary-rain"), Some(CanvasFx::Rain));
    assert_eq!(canvas_fx("snow"), None);
}

#[test]
fn or_warn_falls_back() {
    assert_eq!(or_warn(reveal_threshold("2"), 0.1), 0.1);
    assert_eq!(or_warn(reveal_threshold("0.3"), 0.1), 0.3);
}
