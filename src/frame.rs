// Host schedulers for `RepeatingTask`: one per animation frame or one per
// fixed interval. Both return a Subscription that cancels the task, clears
// the pending callback and frees the closure.

use folio_core::{RepeatingTask, Subscription};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn run_every_frame(task: Rc<RepeatingTask>) -> Subscription {
    let Some(window) = web::window() else {
        return Subscription::noop();
    };
    if !task.start() {
        log::warn!("frame loop: task already started or cancelled");
        return Subscription::noop();
    }

    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let task_tick = task.clone();
    let pending_tick = pending.clone();
    let window_tick = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        pending_tick.set(None);
        if !task_tick.fire(now) {
            return;
        }
        if let Some(cb) = tick_clone.borrow().as_ref() {
            pending_tick.set(
                window_tick
                    .request_animation_frame(cb.as_ref().unchecked_ref())
                    .ok(),
            );
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = tick.borrow().as_ref() {
        pending.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }

    Subscription::new(move || {
        task.cancel();
        if let Some(id) = pending.take() {
            _ = window.cancel_animation_frame(id);
        }
        // Breaks the closure's self-reference.
        tick.borrow_mut().take();
    })
}

pub fn run_every(task: Rc<RepeatingTask>, period_ms: u32) -> Subscription {
    let Some(window) = web::window() else {
        return Subscription::noop();
    };
    if !task.start() {
        log::warn!("interval: task already started or cancelled");
        return Subscription::noop();
    }

    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let task_tick = task.clone();
    let handle_tick = handle.clone();
    let closure = Closure::wrap(Box::new(move || {
        if !task_tick.fire(instant::now()) {
            if let (Some(id), Some(w)) = (handle_tick.take(), web::window()) {
                w.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);

    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        period_ms.min(i32::MAX as u32) as i32,
    ) {
        Ok(id) => handle.set(Some(id)),
        Err(e) => {
            log::warn!("setInterval failed: {:?}", e);
            task.cancel();
            return Subscription::noop();
        }
    }

    Subscription::new(move || {
        task.cancel();
        if let Some(id) = handle.take() {
            window.clear_interval_with_handle(id);
        }
        drop(closure);
    })
}
