//! Ambient node-graph simulation.
//!
//! Nodes drift inside the canvas, are pulled toward the pointer when it is
//! close, and are linked to every neighbour within [`NetworkConfig::link_distance`].
//! Linking is a pairwise O(n²) scan per frame: fine at the default 40 nodes,
//! but node counts in the hundreds need a spatial grid first.

use crate::color::Palette;
use crate::constants::{
    NETWORK_ATTRACTION_RADIUS, NETWORK_ATTRACTION_STRENGTH, NETWORK_DAMPING,
    NETWORK_INITIAL_SPEED, NETWORK_JITTER, NETWORK_LINK_DISTANCE, NETWORK_MIN_SPEED,
    NETWORK_NODE_COUNT, NETWORK_NODE_RADIUS, NETWORK_NODE_RADIUS_BOOST,
    NETWORK_POINTER_LINK_DISTANCE,
};
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetworkConfig {
    pub node_count: usize,
    pub initial_speed: f32,
    pub attraction_radius: f32,
    pub attraction_strength: f32,
    pub damping: f32,
    pub min_speed: f32,
    pub jitter: f32,
    pub link_distance: f32,
    pub pointer_link_distance: f32,
    pub node_radius: f32,
    pub node_radius_boost: f32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            node_count: NETWORK_NODE_COUNT,
            initial_speed: NETWORK_INITIAL_SPEED,
            attraction_radius: NETWORK_ATTRACTION_RADIUS,
            attraction_strength: NETWORK_ATTRACTION_STRENGTH,
            damping: NETWORK_DAMPING,
            min_speed: NETWORK_MIN_SPEED,
            jitter: NETWORK_JITTER,
            link_distance: NETWORK_LINK_DISTANCE,
            pointer_link_distance: NETWORK_POINTER_LINK_DISTANCE,
            node_radius: NETWORK_NODE_RADIUS,
            node_radius_boost: NETWORK_NODE_RADIUS_BOOST,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Node {
    pub pos: Vec2,
    pub vel: Vec2,
}

#[derive(Clone, Debug)]
pub struct NetworkSim {
    cfg: NetworkConfig,
    nodes: Vec<Node>,
    bounds: Vec2,
    pointer: Option<Vec2>,
}

impl NetworkSim {
    pub fn new<R: Rng>(cfg: NetworkConfig, bounds: Vec2, rng: &mut R) -> Self {
        let bounds = bounds.max(Vec2::ZERO);
        let half = cfg.initial_speed * 0.5;
        let nodes = (0..cfg.node_count)
            .map(|_| Node {
                pos: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
                vel: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * half,
                    (rng.gen::<f32>() - 0.5) * 2.0 * half,
                ),
            })
            .collect();
        Self {
            cfg,
            nodes,
            bounds,
            pointer: None,
        }
    }

    /// Builds a simulation from explicit node state.
    pub fn from_nodes(cfg: NetworkConfig, bounds: Vec2, nodes: Vec<Node>) -> Self {
        let mut sim = Self {
            cfg,
            nodes,
            bounds: Vec2::ZERO,
            pointer: None,
        };
        sim.resize(bounds);
        sim
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.cfg
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// New canvas size. Nodes keep their state but are pulled back inside.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds.max(Vec2::ZERO);
        for node in &mut self.nodes {
            node.pos = node.pos.clamp(Vec2::ZERO, self.bounds);
        }
    }

    /// Pointer position in canvas pixels, `None` when it left the canvas.
    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Advances every node by one frame.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        let cfg = self.cfg;
        let bounds = self.bounds;
        for node in &mut self.nodes {
            if let Some(p) = self.pointer {
                let to_pointer = p - node.pos;
                let dist = to_pointer.length();
                if dist < cfg.attraction_radius && dist > f32::EPSILON {
                    let force = (cfg.attraction_radius - dist) / cfg.attraction_radius;
                    node.vel += to_pointer / dist * force * cfg.attraction_strength;
                }
            }

            node.vel *= cfg.damping;

            if node.vel.length() < cfg.min_speed && cfg.jitter > 0.0 {
                node.vel += Vec2::new(
                    rng.gen_range(-cfg.jitter..cfg.jitter),
                    rng.gen_range(-cfg.jitter..cfg.jitter),
                );
            }

            node.pos += node.vel;
            reflect(node, bounds);
        }
    }

    /// Index pairs closer than the link distance, with their distance.
    pub fn links(&self) -> Vec<(usize, usize, f32)> {
        let mut out = Vec::new();
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                let d = self.nodes[i].pos.distance(self.nodes[j].pos);
                if d < self.cfg.link_distance {
                    out.push((i, j, d));
                }
            }
        }
        out
    }

    /// 0 outside the attraction radius, rising to 1 right under the pointer.
    fn proximity(&self, node: &Node) -> f32 {
        match self.pointer {
            Some(p) => {
                let d = p.distance(node.pos);
                ((self.cfg.attraction_radius - d) / self.cfg.attraction_radius).clamp(0.0, 1.0)
            }
            None => 0.0,
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, palette: &Palette) {
        surface.clear();

        for (i, j, d) in self.links() {
            let fade = 1.0 - d / self.cfg.link_distance;
            let color = palette
                .network_line
                .with_alpha(palette.network_line.a * (0.5 + 0.5 * fade));
            surface.line(self.nodes[i].pos, self.nodes[j].pos, 1.0, color);
        }

        if let Some(p) = self.pointer {
            for node in &self.nodes {
                let d = p.distance(node.pos);
                if d < self.cfg.pointer_link_distance {
                    let alpha = (1.0 - d / self.cfg.pointer_link_distance) * 0.5;
                    surface.line(p, node.pos, 1.0, palette.network_node.with_alpha(alpha));
                }
            }
        }

        for node in &self.nodes {
            let near = self.proximity(node);
            let radius = self.cfg.node_radius + self.cfg.node_radius_boost * near;
            let base = palette.network_node.a;
            let color = palette
                .network_node
                .with_alpha(base + (1.0 - base) * near * 0.5);
            surface.circle(node.pos, radius, color);
        }
    }

    /// One full frame: step then draw.
    pub fn frame<R: Rng, S: Surface + ?Sized>(
        &mut self,
        rng: &mut R,
        surface: &mut S,
        palette: &Palette,
    ) {
        self.step(rng);
        self.draw(surface, palette);
    }
}

/// Keeps `node` inside `[0, bounds]`, flipping velocity to point inward on
/// contact.
fn reflect(node: &mut Node, bounds: Vec2) {
    if node.pos.x < 0.0 {
        node.pos.x = 0.0;
        node.vel.x = node.vel.x.abs();
    } else if node.pos.x > bounds.x {
        node.pos.x = bounds.x;
        node.vel.x = -node.vel.x.abs();
    }
    if node.pos.y < 0.0 {
        node.pos.y = 0.0;
        node.vel.y = node.vel.y.abs();
    } else if node.pos.y > bounds.y {
        node.pos.y = bounds.y;
        node.vel.y = -node.vel.y.abs();
    }
}
