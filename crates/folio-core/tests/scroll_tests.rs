// Host-side tests for nav scroll tracking.

use folio_core::{is_scrolled, ScrollSpy, Section};

fn sections() -> Vec<Section> {
    [("projects", 1800.0), ("about", 600.0), ("experience", 1200.0)]
        .into_iter()
        .map(|(id, top)| Section {
            id: id.to_string(),
            top,
        })
        .collect()
}

#[test]
fn nav_compacts_past_fifty_pixels() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(50.5));
}

#[test]
fn spy_tracks_last_section_above_offset_line() {
    let mut spy = ScrollSpy::new(sections());
    assert!(!spy.update(0.0));
    assert_eq!(spy.active(), None);

    assert!(spy.update(500.0));
    assert_eq!(spy.active(), Some("about"));

    // Still inside about: no change reported.
    assert!(!spy.update(900.0));

    assert!(spy.update(1750.0));
    assert_eq!(spy.active(), Some("projects"));

    assert!(spy.update(0.0));
    assert_eq!(spy.active(), None);
}

#[test]
fn spy_offset_is_configurable() {
    let mut spy = ScrollSpy::new(sections()).with_offset(0.0);
    spy.update(599.0);
    assert_eq!(spy.active(), None);
    spy.update(600.0);
    assert_eq!(spy.active(), Some("about"));
}
