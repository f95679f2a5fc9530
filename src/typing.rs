use crate::constants::*;
use crate::dom;
use crate::frame::run_every_frame;
use folio_core::{AliveFlag, RepeatingTask, Subscription, Typewriter};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn type_into(el: web::Element) -> Subscription {
    let text = match el.get_attribute(ATTR_TYPEWRITER) {
        Some(t) if !t.trim().is_empty() => t,
        _ => el.text_content().unwrap_or_default(),
    };
    let mut typewriter = Typewriter::new(text);
    el.set_text_content(Some(""));

    // Filled after the task exists so the step can stop its own loop.
    let alive: Rc<RefCell<Option<AliveFlag>>> = Rc::new(RefCell::new(None));
    let alive_step = alive.clone();
    let mut last = Instant::now();
    let task = RepeatingTask::new(move |_now| {
        let now = Instant::now();
        let dt = now - last;
        last = now;
        if typewriter.tick(dt) {
            el.set_text_content(Some(typewriter.visible()));
        }
        if typewriter.is_done() {
            if let Some(flag) = alive_step.borrow().as_ref() {
                flag.tear_down();
            }
        }
    });
    *alive.borrow_mut() = Some(task.alive());
    run_every_frame(task)
}

pub fn wire(document: &web::Document) -> Vec<Subscription> {
    dom::query_document(document, SEL_TYPEWRITER)
        .into_iter()
        .map(type_into)
        .collect()
}
