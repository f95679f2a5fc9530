// Host-side tests for the one-shot reveal trigger.

use folio_core::visibility::{default_stagger_delay_ms, stagger_delay_ms};
use folio_core::{IntersectionSample, Rect, Viewport, VisibilityTrigger};

fn sample(is_intersecting: bool, ratio: f32) -> IntersectionSample {
    IntersectionSample {
        is_intersecting,
        ratio,
    }
}

#[test]
fn starts_hidden_and_ignores_sub_threshold_samples() {
    let mut t = VisibilityTrigger::new(0.2);
    assert!(!t.revealed());
    assert!(!t.observe(sample(true, 0.1)));
    assert!(!t.observe(sample(false, 0.0)));
    assert!(!t.revealed());
}

#[test]
fn fires_once_at_threshold() {
    let mut t = VisibilityTrigger::new(0.2);
    assert!(t.observe(sample(true, 0.2)));
    assert!(t.revealed());
    // Already revealed: later samples never report a flip again.
    assert!(!t.observe(sample(true, 1.0)));
}

#[test]
fn reveal_is_monotonic() {
    let mut t = VisibilityTrigger::default();
    assert!(t.observe(sample(true, 0.5)));
    for i in 0..1000 {
        let s = sample(i % 2 == 0, (i % 10) as f32 / 10.0);
        t.observe(s);
        assert!(t.revealed(), "reverted after event {i}");
    }
}

#[test]
fn instances_are_independent() {
    let mut a = VisibilityTrigger::new(0.1);
    let b = VisibilityTrigger::new(0.1);
    a.observe(sample(true, 0.3));
    assert!(a.revealed());
    assert!(!b.revealed());
}

#[test]
fn threshold_is_clamped() {
    assert_eq!(VisibilityTrigger::new(3.0).threshold(), 1.0);
    assert_eq!(VisibilityTrigger::new(-1.0).threshold(), 0.0);
}

#[test]
fn layout_sample_reports_visible_fraction() {
    let vp = Viewport::new(1000.0, 800.0);
    let half_below = Rect::new(0.0, 600.0, 100.0, 400.0);
    let s = IntersectionSample::from_layout(half_below, vp);
    assert!(s.is_intersecting);
    assert!((s.ratio - 0.5).abs() < 1e-6);

    let offscreen = Rect::new(0.0, 900.0, 100.0, 100.0);
    let s = IntersectionSample::from_layout(offscreen, vp);
    assert!(!s.is_intersecting);
    assert_eq!(s.ratio, 0.0);
}

#[test]
fn stagger_delays_grow_per_index() {
    assert_eq!(default_stagger_delay_ms(0), 0);
    assert_eq!(default_stagger_delay_ms(3), 300);
    assert_eq!(stagger_delay_ms(4, 50), 200);
}
