// DOM-backed decorations: particle fields, floating shapes, floating code
// snippets, the background grid and the gradient orbs. Nodes are created once per mount, recoloured on theme changes
// and removed on teardown.

use crate::attrs;
use crate::constants::*;
use crate::dom;
use folio_core::{
    floating_shapes, floating_snippets, gradient_orbs, AnimatedGrid, FxResult, Hue,
    ParticleField, ShapeKind, Subscription, Theme, ThemeFlag, PARTICLE_COUNT_DEFAULT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone, Copy, Debug)]
enum Role {
    Particle,
    Shape,
    Code,
    Orb,
    Grid(AnimatedGrid),
}

impl Role {
    /// Value written to the node's colour property.
    fn value(self, hue: Hue, theme: Theme) -> String {
        match self {
            Role::Particle => hue.particle(theme).to_css(),
            Role::Shape => hue.shape(theme).to_css(),
            Role::Code => hue.code(theme).to_css(),
            Role::Orb => hue.orb(theme).to_css(),
            Role::Grid(grid) => grid.background_image(theme),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum HostKind {
    Particles,
    Shapes,
    Code,
    Grid,
    Orbs,
}

struct Painted {
    el: web::Element,
    /// CSS property carrying the colour.
    prop: &'static str,
    hue: Hue,
    role: Role,
}

impl Painted {
    fn paint(&self, theme: Theme) {
        dom::set_style(&self.el, self.prop, &self.role.value(self.hue, theme));
    }
}

fn particle_nodes(
    document: &web::Document,
    host: &web::Element,
    rng: &mut StdRng,
) -> FxResult<Vec<Painted>> {
    let (count, hue) = attrs::or_warn(
        attrs::particle_params(dom::attr_lookup(host)),
        (PARTICLE_COUNT_DEFAULT, Hue::Accent),
    );
    let mut field = ParticleField::new(hue);
    field.mark_ready();
    let hue = field.hue();

    let mut out = Vec::with_capacity(count);
    for p in field.particles(count, rng).iter() {
        let el = dom::create_div(document, CLASS_PARTICLE)?;
        _ = el.set_attribute("style", &p.style_css());
        out.push(Painted {
            el,
            prop: "background-color",
            hue,
            role: Role::Particle,
        });
    }
    Ok(out)
}

fn shape_nodes(document: &web::Document) -> FxResult<Vec<Painted>> {
    floating_shapes()
        .into_iter()
        .map(|s| {
            let modifier = match s.kind {
                ShapeKind::Circle => "circle",
                ShapeKind::Square => "square",
                ShapeKind::Triangle => "triangle",
            };
            let el = dom::create_div(document, &format!("{CLASS_SHAPE} {CLASS_SHAPE}-{modifier}"))?;
            _ = el.set_attribute("style", &s.style_css());
            Ok(Painted {
                el,
                prop: s.paint_property(),
                hue: s.hue,
                role: Role::Shape,
            })
        })
        .collect()
}

fn code_nodes(document: &web::Document) -> FxResult<Vec<Painted>> {
    floating_snippets()
        .into_iter()
        .map(|s| {
            let el = dom::create_div(document, CLASS_CODE)?;
            el.set_text_content(Some(s.text));
            _ = el.set_attribute(
                "style",
                &format!(
                    "left:{}%;top:{}%;animation-delay:{:.1}s;animation-duration:{:.1}s",
                    s.left, s.top, s.delay_sec, s.duration_sec
                ),
            );
            Ok(Painted {
                el,
                prop: "color",
                hue: Hue::Accent,
                role: Role::Code,
            })
        })
        .collect()
}

fn grid_nodes(document: &web::Document) -> FxResult<Vec<Painted>> {
    let grid = AnimatedGrid::default();
    let el = dom::create_div(document, CLASS_GRID)?;
    _ = el.set_attribute("style", &grid.style_css());
    Ok(vec![Painted {
        el,
        prop: "background-image",
        hue: Hue::Accent,
        role: Role::Grid(grid),
    }])
}

fn orb_nodes(document: &web::Document) -> FxResult<Vec<Painted>> {
    gradient_orbs()
        .into_iter()
        .map(|o| {
            let el = dom::create_div(document, CLASS_ORB)?;
            _ = el.set_attribute("style", &o.style_css());
            Ok(Painted {
                el,
                prop: "background-color",
                hue: o.hue,
                role: Role::Orb,
            })
        })
        .collect()
}

/// Builds every decoration host found in `document` and returns the handles
/// that recolour and finally remove the generated nodes.
pub fn wire(document: &web::Document, theme: &ThemeFlag) -> Vec<Subscription> {
    let mut rng = StdRng::from_entropy();
    let mut subs = Vec::new();

    let hosts = [
        (SEL_PARTICLES, HostKind::Particles),
        (SEL_SHAPES, HostKind::Shapes),
        (SEL_CODE, HostKind::Code),
        (SEL_GRID, HostKind::Grid),
        (SEL_ORBS, HostKind::Orbs),
    ]
    .into_iter()
    .flat_map(|(sel, kind)| {
        dom::query_document(document, sel)
            .into_iter()
            .map(move |h| (h, kind))
    });

    for (host, kind) in hosts {
        let built = match kind {
            HostKind::Particles => particle_nodes(document, &host, &mut rng),
            HostKind::Shapes => shape_nodes(document),
            HostKind::Code => code_nodes(document),
            HostKind::Grid => grid_nodes(document),
            HostKind::Orbs => orb_nodes(document),
        };
        let nodes = match built {
            Ok(nodes) => nodes,
            Err(e) => {
                log::warn!("decoration skipped: {}", e);
                continue;
            }
        };

        let current = theme.get();
        for n in &nodes {
            n.paint(current);
            _ = host.append_child(&n.el);
        }
        log::debug!("decoration host filled with {} nodes", nodes.len());

        let nodes = Rc::new(nodes);
        let recolor = nodes.clone();
        let mut on_theme = theme.subscribe(move |t| {
            for n in recolor.iter() {
                n.paint(t);
            }
        });
        subs.push(Subscription::new(move || {
            on_theme.unsubscribe();
            for n in nodes.iter() {
                n.el.remove();
            }
        }));
    }
    subs
}
