// Scroll-linked effects: element parallax, background layers and the nav bar.

use crate::attrs;
use crate::constants::*;
use crate::dom;
use crate::events::listen_window;
use folio_core::{
    is_scrolled, ParallaxLayer, ScrollParallax, ScrollSpy, ScrollState, Section, Subscription,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct ParallaxTarget {
    el: web::Element,
    fx: ScrollParallax,
}

struct LayerTarget {
    el: web::Element,
    layer: ParallaxLayer,
}

struct NavTarget {
    nav: web::Element,
    spy: ScrollSpy,
    /// `(section id, link)` pairs.
    links: Vec<(String, web::Element)>,
    scrolled: bool,
}

impl NavTarget {
    fn collect(document: &web::Document) -> Option<Self> {
        let nav = document.query_selector(SEL_NAV).ok().flatten()?;
        let links = dom::query_all(&nav, SEL_NAV_LINK)
            .into_iter()
            .filter_map(|a| {
                let id = a.get_attribute("href")?.trim_start_matches('#').to_string();
                (!id.is_empty()).then_some((id, a))
            })
            .collect();
        let mut target = Self {
            nav,
            spy: ScrollSpy::default(),
            links,
            scrolled: false,
        };
        target.measure_sections(document);
        Some(target)
    }

    /// Re-reads section offsets in document coordinates.
    fn measure_sections(&mut self, document: &web::Document) {
        let scroll_y = dom::scroll_y();
        let sections = self
            .links
            .iter()
            .filter_map(|(id, _)| {
                let el = document.get_element_by_id(id)?;
                Some(Section {
                    id: id.clone(),
                    top: dom::element_rect(&el).top + scroll_y,
                })
            })
            .collect();
        self.spy.set_sections(sections);
    }

    fn apply(&mut self, scroll_y: f32) {
        let scrolled = is_scrolled(scroll_y);
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            _ = self.nav.class_list().toggle_with_force(CLASS_SCROLLED, scrolled);
        }
        if self.spy.update(scroll_y) {
            let active = self.spy.active();
            for (id, link) in &self.links {
                let on = active == Some(id.as_str());
                _ = link.class_list().toggle_with_force(CLASS_ACTIVE, on);
            }
        }
    }
}

#[derive(Default)]
struct ScrollEffects {
    parallax: Vec<ParallaxTarget>,
    layers: Vec<LayerTarget>,
    nav: Option<NavTarget>,
}

impl ScrollEffects {
    fn collect(document: &web::Document) -> Self {
        let parallax = dom::query_document(document, SEL_PARALLAX)
            .into_iter()
            .map(|el| {
                let cfg = attrs::or_warn(
                    attrs::parallax_config(dom::attr_lookup(&el)),
                    Default::default(),
                );
                ParallaxTarget {
                    fx: ScrollParallax::new(cfg),
                    el,
                }
            })
            .collect();
        let layers = dom::query_document(document, SEL_PARALLAX_LAYER)
            .into_iter()
            .map(|el| {
                let speed = attrs::or_warn(
                    attrs::layer_speed(dom::attr_lookup(&el)),
                    folio_core::PARALLAX_LAYER_SPEED_DEFAULT,
                );
                LayerTarget {
                    layer: ParallaxLayer::new(speed),
                    el,
                }
            })
            .collect();
        Self {
            parallax,
            layers,
            nav: NavTarget::collect(document),
        }
    }

    fn is_empty(&self) -> bool {
        self.parallax.is_empty() && self.layers.is_empty() && self.nav.is_none()
    }

    fn apply(&mut self) {
        let state = ScrollState::new(dom::scroll_y(), dom::viewport());
        let (scroll_y, vh) = (state.scroll_y, state.viewport.height);

        for t in &mut self.parallax {
            // The measured rect includes the transform written below.
            let values = t.fx.update_measured(dom::live_rect(&t.el), vh);
            dom::set_style(&t.el, "transform", &values.transform_css());
            if t.fx.config().fade_out {
                dom::set_style(&t.el, "opacity", &format!("{:.3}", values.opacity));
            }
        }
        for t in &mut self.layers {
            let y = t.layer.update(scroll_y);
            dom::set_style(&t.el, "transform", &format!("translate3d(0, {:.2}px, 0)", y));
        }
        if let Some(nav) = &mut self.nav {
            nav.apply(scroll_y);
        }
    }
}

/// Applies every scroll effect once, then keeps them in sync with scroll and
/// resize events.
pub fn wire(document: &web::Document) -> Vec<Subscription> {
    let effects = ScrollEffects::collect(document);
    if effects.is_empty() {
        return Vec::new();
    }
    log::info!(
        "scroll effects: {} parallax, {} layers, nav={}",
        effects.parallax.len(),
        effects.layers.len(),
        effects.nav.is_some()
    );
    let effects = Rc::new(RefCell::new(effects));
    effects.borrow_mut().apply();

    let on_scroll = effects.clone();
    let on_resize = effects.clone();
    let document = document.clone();
    vec![
        listen_window("scroll", move |_| {
            if let Ok(mut fx) = on_scroll.try_borrow_mut() {
                fx.apply();
            }
        }),
        listen_window("resize", move |_| {
            if let Ok(mut fx) = on_resize.try_borrow_mut() {
                if let Some(nav) = &mut fx.nav {
                    nav.measure_sections(&document);
                }
                fx.apply();
            }
        }),
    ]
}
