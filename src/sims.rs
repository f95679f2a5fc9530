// Canvas simulations: the pointer-reactive node network and the falling
// symbol rain. Each canvas owns its simulation, RNG and surface for the
// lifetime of one mount.

use crate::attrs::{self, CanvasFx};
use crate::canvas::LazySurface;
use crate::constants::*;
use crate::dom;
use crate::events::listen_window;
use crate::frame::{run_every, run_every_frame};
use crate::gestures::{pointer_released, POINTER_END_EVENTS};
use folio_core::{
    NetworkConfig, NetworkSim, Palette, RainConfig, RainSim, RepeatingTask, Subscription, ThemeFlag,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct NetworkCtx {
    sim: NetworkSim,
    surface: LazySurface,
    rng: StdRng,
    theme: ThemeFlag,
}

struct RainCtx {
    sim: RainSim,
    surface: LazySurface,
    rng: StdRng,
    theme: ThemeFlag,
}

/// Pointer position in canvas pixels, or `None` outside the canvas.
fn canvas_local(canvas: &web::HtmlCanvasElement, client: Vec2) -> Option<Vec2> {
    let rect = dom::element_rect(canvas);
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let local = client - Vec2::new(rect.left, rect.top);
    if local.x < 0.0 || local.y < 0.0 || local.x > rect.width || local.y > rect.height {
        return None;
    }
    let scale = Vec2::new(
        canvas.width() as f32 / rect.width,
        canvas.height() as f32 / rect.height,
    );
    Some(local * scale)
}

fn pointer_type(ev: &web::Event) -> String {
    ev.dyn_ref::<web::PointerEvent>()
        .map(|p| p.pointer_type())
        .unwrap_or_default()
}

fn leaves_window(ev: &web::Event) -> bool {
    ev.dyn_ref::<web::MouseEvent>()
        .is_some_and(|m| m.related_target().is_none())
}

fn mount_network(canvas: web::HtmlCanvasElement, theme: &ThemeFlag) -> Vec<Subscription> {
    let size = dom::sync_canvas_to_parent(&canvas);
    let surface = LazySurface::new(canvas.clone());
    let mut rng = StdRng::from_entropy();
    let sim = NetworkSim::new(NetworkConfig::default(), size, &mut rng);
    log::info!("network: {} nodes on {}x{}", sim.nodes().len(), size.x, size.y);

    let ctx = Rc::new(RefCell::new(NetworkCtx {
        sim,
        surface,
        rng,
        theme: theme.clone(),
    }));

    let frame_ctx = ctx.clone();
    let task = RepeatingTask::new(move |_now| {
        if let Ok(mut c) = frame_ctx.try_borrow_mut() {
            let palette = Palette::for_theme(c.theme.get());
            let NetworkCtx {
                sim, surface, rng, ..
            } = &mut *c;
            // Nothing drawn, and no state advanced, until the context exists.
            if let Some(surface) = surface.get() {
                sim.frame(rng, surface, &palette);
            }
        }
    });

    let resize_ctx = ctx.clone();
    let resize_canvas = canvas.clone();
    let pointer_ctx = ctx.clone();
    let pointer_canvas = canvas;
    let mut subs: Vec<Subscription> = POINTER_END_EVENTS
        .into_iter()
        .map(|kind| {
            let release_ctx = ctx.clone();
            listen_window(kind, move |ev| {
                if !pointer_released(&ev.type_(), &pointer_type(&ev), leaves_window(&ev)) {
                    return;
                }
                if let Ok(mut c) = release_ctx.try_borrow_mut() {
                    c.sim.set_pointer(None);
                }
            })
        })
        .collect();
    subs.extend([
        run_every_frame(task),
        listen_window("resize", move |_| {
            let size = dom::sync_canvas_to_parent(&resize_canvas);
            if let Ok(mut c) = resize_ctx.try_borrow_mut() {
                c.sim.resize(size);
            }
        }),
        listen_window("pointermove", move |ev| {
            let pos = dom::client_pos(&ev).and_then(|p| canvas_local(&pointer_canvas, p));
            if let Ok(mut c) = pointer_ctx.try_borrow_mut() {
                c.sim.set_pointer(pos);
            }
        }),
    ]);
    subs
}

fn mount_rain(canvas: web::HtmlCanvasElement, theme: &ThemeFlag) -> Vec<Subscription> {
    let size = dom::sync_canvas_to_parent(&canvas);
    let surface = LazySurface::new(canvas.clone());
    let mut rng = StdRng::from_entropy();
    let cfg = RainConfig::default();
    let sim = RainSim::new(cfg, size, &mut rng);
    log::info!("rain: {} columns every {} ms", sim.columns().len(), cfg.tick_ms);

    let ctx = Rc::new(RefCell::new(RainCtx {
        sim,
        surface,
        rng,
        theme: theme.clone(),
    }));

    let tick_ctx = ctx.clone();
    let task = RepeatingTask::new(move |_now| {
        if let Ok(mut c) = tick_ctx.try_borrow_mut() {
            let palette = Palette::for_theme(c.theme.get());
            let RainCtx {
                sim, surface, rng, ..
            } = &mut *c;
            if let Some(surface) = surface.get() {
                sim.tick(rng, surface, &palette);
            }
        }
    });

    let resize_ctx = ctx;
    vec![
        run_every(task, cfg.tick_ms),
        listen_window("resize", move |_| {
            let size = dom::sync_canvas_to_parent(&canvas);
            if let Ok(mut c) = resize_ctx.try_borrow_mut() {
                let RainCtx { sim, rng, .. } = &mut *c;
                sim.resize(size, rng);
            }
        }),
    ]
}

pub fn wire(document: &web::Document, theme: &ThemeFlag) -> Vec<Subscription> {
    let mut subs = Vec::new();
    for el in dom::query_document(document, SEL_CANVAS_FX) {
        let raw = el.get_attribute(ATTR_FX).unwrap_or_default();
        let Some(kind) = attrs::canvas_fx(&raw) else {
            log::warn!("unknown canvas effect {:?}", raw);
            continue;
        };
        let Ok(canvas) = el.dyn_into::<web::HtmlCanvasElement>() else {
            continue;
        };
        subs.extend(match kind {
            CanvasFx::Network => mount_network(canvas, theme),
            CanvasFx::Rain => mount_rain(canvas, theme),
        });
    }
    subs
}
