// Pointer parallax: children of a container drift with the pointer.

use crate::attrs;
use crate::constants::*;
use crate::dom;
use crate::events::listen;
use folio_core::{LeaveBehavior, PointerParallax, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct PointerGroup {
    container: web::Element,
    fx: PointerParallax,
    /// `(child, sensitivity)` pairs.
    children: Vec<(web::Element, f32)>,
}

impl PointerGroup {
    fn collect(container: web::Element) -> Self {
        let leave = attrs::or_warn(
            attrs::leave_behavior(container.get_attribute(ATTR_POINTER_LEAVE).as_deref()),
            LeaveBehavior::default(),
        );
        let children = dom::query_all(&container, SEL_POINTER_CHILD)
            .into_iter()
            .map(|el| {
                let s = attrs::or_warn(
                    attrs::sensitivity(el.get_attribute(ATTR_SENSITIVITY).as_deref()),
                    POINTER_SENSITIVITY_DEFAULT,
                );
                (el, s)
            })
            .collect();
        Self {
            fx: PointerParallax::new(dom::element_rect(&container), leave),
            container,
            children,
        }
    }

    fn apply(&self) {
        for (el, sensitivity) in &self.children {
            let offset = self.fx.offset_for(*sensitivity);
            dom::set_style(
                el,
                "transform",
                &format!("translate3d({:.2}px, {:.2}px, 0)", offset.x, offset.y),
            );
        }
    }
}

pub fn wire(document: &web::Document) -> Vec<Subscription> {
    let containers = dom::query_document(document, SEL_POINTER_CONTAINER);
    if !containers.is_empty() {
        log::info!("pointer parallax: {} containers", containers.len());
    }

    let mut subs = Vec::with_capacity(containers.len() * 2);
    for container in containers {
        let group = Rc::new(RefCell::new(PointerGroup::collect(container.clone())));

        let on_move = group.clone();
        subs.push(listen(&container, "pointermove", move |ev| {
            let Some(pos) = dom::client_pos(&ev) else {
                return;
            };
            if let Ok(mut g) = on_move.try_borrow_mut() {
                // The container may have moved since the last event.
                let rect = dom::element_rect(&g.container);
                g.fx.set_container(rect);
                g.fx.on_move(pos);
                g.apply();
            }
        }));

        let on_leave = group;
        subs.push(listen(&container, "pointerleave", move |_| {
            if let Ok(mut g) = on_leave.try_borrow_mut() {
                g.fx.on_leave();
                g.apply();
            }
        }));
    }
    subs
}
