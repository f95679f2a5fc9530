// Host-side tests for the observable theme flag and palettes.

use folio_core::{Hue, Palette, Theme, ThemeFlag};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn defaults_to_dark() {
    assert_eq!(ThemeFlag::default().get(), Theme::Dark);
    assert_eq!(Theme::from_dark(false), Theme::Light);
}

#[test]
fn notifies_only_on_change() {
    let flag = ThemeFlag::new(Theme::Dark);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    let _sub = flag.subscribe(move |t| s.borrow_mut().push(t));
    flag.set(Theme::Dark);
    flag.set(Theme::Light);
    flag.set(Theme::Light);
    flag.set(Theme::Dark);
    assert_eq!(*seen.borrow(), vec![Theme::Light, Theme::Dark]);
}

#[test]
fn unsubscribed_listener_is_silent() {
    let flag = ThemeFlag::new(Theme::Dark);
    let seen = Rc::new(RefCell::new(0));
    let s = seen.clone();
    let mut sub = flag.subscribe(move |_| *s.borrow_mut() += 1);
    assert_eq!(flag.subscriber_count(), 1);
    sub.unsubscribe();
    assert_eq!(flag.subscriber_count(), 0);
    flag.set(Theme::Light);
    assert_eq!(*seen.borrow(), 0);
}

#[test]
fn clones_share_state() {
    let flag = ThemeFlag::new(Theme::Light);
    let reader = flag.clone();
    flag.set(Theme::Dark);
    assert_eq!(reader.get(), Theme::Dark);
}

#[test]
fn listener_may_unsubscribe_itself_during_notify() {
    let flag = ThemeFlag::new(Theme::Dark);
    let slot: Rc<RefCell<Option<folio_core::Subscription>>> = Rc::new(RefCell::new(None));
    let s = slot.clone();
    let sub = flag.subscribe(move |_| {
        if let Some(mut sub) = s.borrow_mut().take() {
            sub.unsubscribe();
        }
    });
    *slot.borrow_mut() = Some(sub);
    flag.set(Theme::Light);
    assert_eq!(flag.subscriber_count(), 0);
    flag.set(Theme::Dark);
}

#[test]
fn palettes_differ_per_theme() {
    let dark = Palette::for_theme(Theme::Dark);
    let light = Palette::for_theme(Theme::Light);
    assert_ne!(dark, light);
    assert_eq!(dark.network_node.to_css(), "rgba(99, 102, 241, 0.6)");
    assert_eq!(light.rain_fade.to_css(), "rgba(255, 255, 255, 0.08)");
}

#[test]
fn light_theme_uses_stronger_tints() {
    for hue in [Hue::Accent, Hue::Purple, Hue::Blue, Hue::Green] {
        assert!(hue.particle(Theme::Light).a > hue.particle(Theme::Dark).a);
        assert!(hue.code(Theme::Light).a > hue.code(Theme::Dark).a);
    }
}
