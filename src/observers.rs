// Reveal-on-scroll via IntersectionObserver, and the theme flag fed by a
// MutationObserver on the root element's class list.

use crate::attrs;
use crate::constants::*;
use crate::dom;
use folio_core::visibility::default_stagger_delay_ms;
use folio_core::{
    IntersectionSample, Subscription, Theme, ThemeFlag, VisibilityTrigger,
    REVEAL_THRESHOLD_DEFAULT,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback<O> = Closure<dyn FnMut(js_sys::Array, O)>;

fn observe_reveal(el: web::Element, threshold: f32) -> anyhow::Result<Subscription> {
    let trigger = Rc::new(RefCell::new(VisibilityTrigger::new(threshold)));
    let target = el.clone();
    let callback: ObserverCallback<web::IntersectionObserver> = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let sample = IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio() as f32,
                };
                if trigger.borrow_mut().observe(sample) {
                    _ = target.class_list().add_1(CLASS_REVEALED);
                    // Revealed is final; nothing left to watch.
                    observer.disconnect();
                    return;
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold as f64));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    observer.observe(&el);

    Ok(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

/// Gives each element child of a stagger container an increasing
/// `transition-delay`.
fn apply_stagger(container: &web::Element) {
    let children = container.children();
    for i in 0..children.length() {
        if let Some(child) = children.item(i) {
            let delay = default_stagger_delay_ms(i as usize);
            dom::set_style(&child, "transition-delay", &format!("{}ms", delay));
        }
    }
}

pub fn wire_reveal(document: &web::Document) -> Vec<Subscription> {
    for container in dom::query_document(document, SEL_STAGGER) {
        apply_stagger(&container);
    }

    let targets = dom::query_document(document, SEL_REVEAL);
    let mut subs = Vec::with_capacity(targets.len());
    for el in targets {
        let threshold = attrs::or_warn(
            attrs::reveal_threshold(&el.get_attribute(ATTR_REVEAL).unwrap_or_default()),
            REVEAL_THRESHOLD_DEFAULT,
        );
        match observe_reveal(el, threshold) {
            Ok(sub) => subs.push(sub),
            Err(e) => log::warn!("reveal observer unavailable: {}", e),
        }
    }
    if !subs.is_empty() {
        log::info!("reveal: observing {} targets", subs.len());
    }
    subs
}

fn root_theme(root: &web::Element) -> Theme {
    Theme::from_dark(root.class_list().contains(CLASS_DARK))
}

/// Theme flag mirroring the `dark` class on `<html>`. The observer is the
/// flag's only writer.
pub fn watch_theme(document: &web::Document) -> (ThemeFlag, Subscription) {
    let Some(root) = document.document_element() else {
        return (ThemeFlag::default(), Subscription::noop());
    };
    let flag = ThemeFlag::new(root_theme(&root));

    let writer = flag.clone();
    let observed = root.clone();
    let callback: ObserverCallback<web::MutationObserver> = Closure::wrap(Box::new(
        move |_records: js_sys::Array, _observer: web::MutationObserver| {
            writer.set(root_theme(&observed));
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>);

    let observer = match web::MutationObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("theme observer unavailable: {:?}", e);
            return (flag, Subscription::noop());
        }
    };
    let init = web::MutationObserverInit::new();
    init.set_attributes(true);
    let filter = js_sys::Array::of1(&JsValue::from_str("class"));
    init.set_attribute_filter(&filter);
    if let Err(e) = observer.observe_with_options(&root, &init) {
        log::warn!("theme observer failed: {:?}", e);
        return (flag, Subscription::noop());
    }

    (
        flag,
        Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }),
    )
}
