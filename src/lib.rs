#![cfg(target_arch = "wasm32")]
use folio_core::{Disposer, ThemeFlag};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod attrs;
mod canvas;
mod constants;
mod decor;
mod dom;
mod events;
mod frame;
mod gestures;
mod observers;
mod sims;
mod typing;

thread_local! {
    // Mount created by `start` when the page opts in with `data-fx-auto`.
    static AUTO_MOUNT: RefCell<Option<FxHandle>> = const { RefCell::new(None) };
}

/// Every listener, observer, loop and generated node of one mount.
#[wasm_bindgen]
pub struct FxHandle {
    disposer: Disposer,
    theme: ThemeFlag,
}

#[wasm_bindgen]
impl FxHandle {
    /// Releases everything the mount registered. Later calls do nothing.
    pub fn teardown(&mut self) {
        if self.disposer.is_empty() {
            return;
        }
        let count = self.disposer.len();
        self.disposer.dispose_all();
        log::info!("fx torn down ({} handles)", count);
    }

    /// Number of live subscriptions held by this mount.
    #[wasm_bindgen(getter)]
    pub fn active(&self) -> usize {
        self.disposer.len()
    }

    #[wasm_bindgen(js_name = isDark)]
    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }
}

fn mount_document(document: &web::Document) -> FxHandle {
    let mut disposer = Disposer::new();

    let (theme, theme_sub) = observers::watch_theme(document);
    disposer.add(theme_sub);
    disposer.extend(observers::wire_reveal(document));
    disposer.extend(events::scroll::wire(document));
    disposer.extend(events::pointer::wire(document));
    disposer.extend(decor::wire(document, &theme));
    disposer.extend(sims::wire(document, &theme));
    disposer.extend(typing::wire(document));

    log::info!(
        "fx mounted: {} handles, theme {:?}",
        disposer.len(),
        theme.get()
    );
    FxHandle { disposer, theme }
}

fn try_mount() -> anyhow::Result<FxHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    Ok(mount_document(&document))
}

/// Scans the document for effect markup and starts everything it finds.
#[wasm_bindgen]
pub fn mount() -> Result<FxHandle, JsValue> {
    try_mount().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tears down the automatic mount, if any.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(mut handle) = AUTO_MOUNT.with(|slot| slot.borrow_mut().take()) {
        handle.teardown();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    let auto = dom::window_document()
        .and_then(|d| d.body())
        .is_some_and(|b| b.has_attribute(constants::ATTR_AUTO_MOUNT));
    if auto {
        match try_mount() {
            Ok(handle) => AUTO_MOUNT.with(|slot| {
                if let Some(mut previous) = slot.borrow_mut().replace(handle) {
                    previous.teardown();
                }
            }),
            Err(e) => log::error!("mount error: {:?}", e),
        }
    }
    Ok(())
}
