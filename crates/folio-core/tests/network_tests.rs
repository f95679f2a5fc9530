// Host-side tests for the node-graph simulation.

mod common;

use common::{DrawCall, Recorder};
use folio_core::{NetworkConfig, NetworkSim, Node, Palette, Theme};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_sim(seed: u64, w: f32, h: f32) -> (NetworkSim, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let sim = NetworkSim::new(NetworkConfig::default(), Vec2::new(w, h), &mut rng);
    (sim, rng)
}

fn assert_in_bounds(sim: &NetworkSim) {
    let b = sim.bounds();
    for (i, n) in sim.nodes().iter().enumerate() {
        assert!(
            n.pos.x >= 0.0 && n.pos.x <= b.x && n.pos.y >= 0.0 && n.pos.y <= b.y,
            "node {i} escaped: {:?} (bounds {:?})",
            n.pos,
            b
        );
    }
}

#[test]
fn initializes_default_node_count_inside_bounds() {
    let (sim, _) = make_sim(1, 800.0, 600.0);
    assert_eq!(sim.nodes().len(), 40);
    assert_in_bounds(&sim);
    for n in sim.nodes() {
        assert!(n.vel.x.abs() <= 0.25 && n.vel.y.abs() <= 0.25);
    }
}

#[test]
fn nodes_never_leave_bounds() {
    let (mut sim, mut rng) = make_sim(2, 320.0, 180.0);
    for frame in 0..5000 {
        // Sweep the pointer around, including outside the canvas.
        let t = frame as f32 * 0.01;
        let pointer = (frame % 700 < 500)
            .then(|| Vec2::new(160.0 + t.cos() * 260.0, 90.0 + t.sin() * 200.0));
        sim.set_pointer(pointer);
        sim.step(&mut rng);
        assert_in_bounds(&sim);
    }
}

fn lone_node(pos: Vec2, vel: Vec2) -> NetworkSim {
    let cfg = NetworkConfig {
        node_count: 1,
        jitter: 0.0,
        ..Default::default()
    };
    NetworkSim::from_nodes(cfg, Vec2::new(1000.0, 1000.0), vec![Node { pos, vel }])
}

#[test]
fn pointer_attracts_nearby_node() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut sim = lone_node(Vec2::new(500.0, 500.0), Vec2::new(0.1, 0.0));
    sim.set_pointer(Some(Vec2::new(600.0, 500.0)));
    sim.step(&mut rng);
    let v = sim.nodes()[0].vel;
    // Force (200 - 100) / 200 * 0.03 toward +x, then damping.
    let expected = (0.1 + 0.015) * 0.99;
    assert!((v.x - expected).abs() < 1e-6, "vx {} vs {}", v.x, expected);
    assert!(v.y.abs() < 1e-6);
    assert!((sim.nodes()[0].pos.x - (500.0 + expected)).abs() < 1e-4);
}

#[test]
fn distant_pointer_has_no_pull() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut sim = lone_node(Vec2::new(200.0, 200.0), Vec2::new(0.3, -0.2));
    sim.set_pointer(Some(Vec2::new(700.0, 700.0)));
    sim.step(&mut rng);
    let expected = Vec2::new(0.3, -0.2) * 0.99;
    assert!((sim.nodes()[0].vel - expected).length() < 1e-6);
}

#[test]
fn boundary_contact_flips_velocity_inward() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut sim = lone_node(Vec2::new(999.8, 0.1), Vec2::new(0.5, -0.5));
    sim.step(&mut rng);
    let n = sim.nodes()[0];
    assert_eq!(n.pos, Vec2::new(1000.0, 0.0));
    assert!(n.vel.x < 0.0 && n.vel.y > 0.0);
}

#[test]
fn slow_nodes_get_jitter() {
    let cfg = NetworkConfig {
        node_count: 20,
        initial_speed: 0.0,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(5);
    let mut sim = NetworkSim::new(cfg, Vec2::new(500.0, 500.0), &mut rng);
    assert!(sim.nodes().iter().all(|n| n.vel == Vec2::ZERO));
    sim.step(&mut rng);
    assert!(sim.nodes().iter().any(|n| n.vel != Vec2::ZERO));
    for n in sim.nodes() {
        assert!(n.vel.x.abs() <= 0.1 + 1e-6 && n.vel.y.abs() <= 0.1 + 1e-6);
    }
}

#[test]
fn resize_pulls_nodes_inside() {
    let (mut sim, mut rng) = make_sim(6, 1200.0, 900.0);
    sim.resize(Vec2::new(200.0, 100.0));
    assert_in_bounds(&sim);
    sim.step(&mut rng);
    assert_in_bounds(&sim);
}

#[test]
fn links_only_join_close_pairs() {
    let (sim, _) = make_sim(7, 600.0, 400.0);
    let links = sim.links();
    for &(i, j, d) in &links {
        assert!(i < j);
        assert!(d < 150.0);
        assert!((sim.nodes()[i].pos.distance(sim.nodes()[j].pos) - d).abs() < 1e-4);
    }
    let n = sim.nodes().len();
    let expected = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .filter(|&(i, j)| sim.nodes()[i].pos.distance(sim.nodes()[j].pos) < 150.0)
        .count();
    assert_eq!(links.len(), expected);
}

#[test]
fn draw_clears_then_renders_links_and_nodes() {
    let (mut sim, _) = make_sim(8, 600.0, 400.0);
    let palette = Palette::for_theme(Theme::Dark);
    let mut surface = Recorder::new(600.0, 400.0);
    sim.draw(&mut surface, &palette);
    assert_eq!(surface.calls.first(), Some(&DrawCall::Clear));
    assert_eq!(
        surface.count(|c| matches!(c, DrawCall::Line { .. })),
        sim.links().len()
    );
    assert_eq!(surface.count(|c| matches!(c, DrawCall::Circle { .. })), 40);

    // With the pointer on a node, that node grows and gets a pointer edge.
    let target = sim.nodes()[0].pos;
    sim.set_pointer(Some(target));
    surface.take();
    sim.draw(&mut surface, &palette);
    let boosted = surface.calls.iter().any(|c| match c {
        DrawCall::Circle { center, radius, .. } => *center == target && *radius > 3.9,
        _ => false,
    });
    assert!(boosted);
    let pointer_edges = surface.count(|c| matches!(c, DrawCall::Line { from, .. } if *from == target));
    assert!(pointer_edges >= 1);
}

#[test]
fn released_pointer_stops_pull_and_edges() {
    let mut rng = StdRng::seed_from_u64(6);
    let palette = Palette::for_theme(Theme::Light);
    let mut surface = Recorder::new(1000.0, 1000.0);
    let mut sim = lone_node(Vec2::new(500.0, 500.0), Vec2::new(0.3, 0.0));

    sim.set_pointer(Some(Vec2::new(550.0, 500.0)));
    sim.draw(&mut surface, &palette);
    assert_eq!(surface.count(|c| matches!(c, DrawCall::Line { .. })), 1);

    sim.set_pointer(None);
    assert_eq!(sim.pointer(), None);
    let before = sim.nodes()[0].vel;
    sim.step(&mut rng);
    assert!((sim.nodes()[0].vel - before * 0.99).length() < 1e-6);

    surface.take();
    sim.draw(&mut surface, &palette);
    assert_eq!(surface.count(|c| matches!(c, DrawCall::Line { .. })), 0);
}
