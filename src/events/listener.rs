use folio_core::Subscription;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Registers a passive listener and returns the handle that removes it.
///
/// The closure is owned by the subscription, so releasing it also frees the
/// JS-side callback.
pub fn listen(
    target: &web::EventTarget,
    kind: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> Subscription {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("addEventListener({}) failed: {:?}", kind, e);
        return Subscription::noop();
    }

    let target = target.clone();
    Subscription::new(move || {
        _ = target.remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        drop(closure);
    })
}

/// `listen` on the window, or a no-op handle when there is none.
pub fn listen_window(
    kind: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> Subscription {
    match web::window() {
        Some(w) => listen(&w, kind, handler),
        None => Subscription::noop(),
    }
}
