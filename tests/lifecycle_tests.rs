// Host-side tests for the element lifecycle and the composed sphere engine,
// using a recording host in place of the DOM.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod content {
    include!("../src/core/content.rs");
}
mod layout {
    include!("../src/core/layout.rs");
}
mod projection {
    include!("../src/core/projection.rs");
}
mod rotation {
    include!("../src/core/rotation.rs");
}
mod schedule {
    include!("../src/core/schedule.rs");
}
mod lifecycle {
    include!("../src/core/lifecycle.rs");
}
mod engine {
    include!("../src/core/engine.rs");
}

use config::SphereConfig;
use content::{base_testimonials, replicate};
use engine::SphereEngine;
use glam::Vec2;
use instant::Instant;
use lifecycle::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::time::Duration;

const HANDLERS_PER_NODE: usize = 3;

#[derive(Debug)]
struct FakeNode {
    id: usize,
    index: usize,
}

#[derive(Default)]
struct RecordingHost {
    next_id: usize,
    created: Vec<usize>,
    destroyed: Vec<usize>,
    live_handlers: usize,
    styles: HashMap<usize, NodeStyle>,
    refuse: Option<usize>,
}

impl ElementHost for RecordingHost {
    type Node = FakeNode;

    fn create(&mut self, index: usize) -> Option<FakeNode> {
        if self.refuse == Some(index) {
            return None;
        }
        self.next_id += 1;
        self.created.push(index);
        self.live_handlers += HANDLERS_PER_NODE;
        Some(FakeNode {
            id: self.next_id,
            index,
        })
    }

    fn update(&mut self, node: &FakeNode, style: &NodeStyle) {
        self.styles.insert(node.index, *style);
    }

    fn destroy(&mut self, node: FakeNode) {
        self.destroyed.push(node.index);
        self.live_handlers -= HANDLERS_PER_NODE;
        self.styles.remove(&node.index);
    }
}

fn make_engine(seed: u64) -> SphereEngine {
    let items = replicate(&base_testimonials(), 30);
    SphereEngine::new(
        SphereConfig::for_viewport(1280.0),
        items,
        &mut StdRng::seed_from_u64(seed),
    )
}

fn visible(i: usize) -> Placement {
    Placement {
        index: i,
        style: Some(NodeStyle {
            left: 0.0,
            top: 0.0,
            size: 10.0,
            opacity: 1.0,
            transform_scale: 1.0,
            z_index: 1000,
        }),
    }
}

fn hidden(i: usize) -> Placement {
    Placement { index: i, style: None }
}

#[test]
fn nodes_are_created_once_and_restyled_afterwards() {
    let mut reg = ElementRegistry::new();
    let mut host = RecordingHost::default();
    reg.render_pass(&[visible(0), visible(1), hidden(2)], &mut host);
    reg.render_pass(&[visible(0), visible(1), hidden(2)], &mut host);
    assert_eq!(host.created, vec![0, 1]);
    assert!(host.destroyed.is_empty());
    assert_eq!(reg.indices(), vec![0, 1]);
    assert_eq!(host.live_handlers, 2 * HANDLERS_PER_NODE);
}

#[test]
fn invisible_items_lose_their_node() {
    let mut reg = ElementRegistry::new();
    let mut host = RecordingHost::default();
    reg.render_pass(&[visible(0), visible(1)], &mut host);
    reg.render_pass(&[hidden(0), visible(1)], &mut host);
    assert_eq!(host.destroyed, vec![0]);
    assert!(!reg.contains(0));
    assert!(reg.contains(1));
    assert_eq!(host.live_handlers, HANDLERS_PER_NODE);

    // becoming visible again builds a fresh node
    reg.render_pass(&[visible(0), visible(1)], &mut host);
    assert_eq!(host.created, vec![0, 1, 0]);
}

#[test]
fn nodes_missing_from_the_frame_are_swept() {
    let mut reg = ElementRegistry::new();
    let mut host = RecordingHost::default();
    reg.render_pass(&[visible(0), visible(1), visible(2)], &mut host);
    reg.render_pass(&[visible(0)], &mut host);
    assert_eq!(reg.indices(), vec![0]);
    let mut gone = host.destroyed.clone();
    gone.sort_unstable();
    assert_eq!(gone, vec![1, 2]);
}

#[test]
fn failed_creation_is_retried_next_pass() {
    let mut reg = ElementRegistry::new();
    let mut host = RecordingHost {
        refuse: Some(1),
        ..Default::default()
    };
    reg.render_pass(&[visible(0), visible(1)], &mut host);
    assert_eq!(reg.indices(), vec![0]);
    host.refuse = None;
    reg.render_pass(&[visible(0), visible(1)], &mut host);
    assert_eq!(reg.indices(), vec![0, 1]);
}

#[test]
fn teardown_removes_everything_and_detaches_handlers() {
    let mut reg = ElementRegistry::new();
    let mut host = RecordingHost::default();
    reg.render_pass(&[visible(0), visible(3), visible(7)], &mut host);
    reg.teardown(&mut host);
    assert!(reg.is_empty());
    assert_eq!(host.live_handlers, 0);
    assert_eq!(host.destroyed.len(), 3);
}

#[test]
fn rendered_set_matches_visible_set_for_any_rotation() {
    let mut engine = make_engine(5);
    let mut reg = ElementRegistry::new();
    let mut host = RecordingHost::default();
    for x in (-180..=180).step_by(30) {
        for y in (-180..=180).step_by(45) {
            engine.controller.rotation = Vec2::new(x as f32, y as f32);
            reg.render_pass(&engine.placements(), &mut host);
            assert_eq!(
                reg.indices(),
                engine.visible_indices(),
                "mismatch at rotation ({x}, {y})"
            );
            assert_eq!(host.live_handlers, reg.len() * HANDLERS_PER_NODE);
            assert_eq!(host.styles.len(), reg.len());
        }
    }
}

#[test]
fn thirty_entries_scenario_is_reproducible() {
    let a = make_engine(7);
    let b = make_engine(7);
    assert_eq!(a.items().len(), 30);
    assert_eq!(a.points().len(), 30);
    assert_eq!(a.controller.rotation, Vec2::new(15.0, 15.0));

    let vis_a = a.visible_indices();
    assert_eq!(vis_a, b.visible_indices());
    assert!(!vis_a.is_empty() && vis_a.len() < 30, "visible={}", vis_a.len());

    for p in a.world_positions() {
        assert_eq!(p.is_visible, p.pos.z > -30.0);
        assert!((0.0..=1.0).contains(&p.fade_opacity));
        assert!(p.scale > 0.0);
        assert!(p.pos.length() <= 270.0 + 1e-2);
    }
}

#[test]
fn frame_steps_momentum_and_gates_rendering() {
    let mut engine = make_engine(1);
    let t0 = Instant::now();
    let y0 = engine.controller.rotation.y;
    assert!(engine.frame(t0).is_some(), "first frame renders immediately");
    assert!(engine.frame(t0 + Duration::from_millis(4)).is_none());
    let placements = engine.frame(t0 + Duration::from_millis(16)).expect("interval elapsed");
    assert_eq!(placements.len(), 30);
    // auto-rotate advanced on every frame, gated or not
    assert!((engine.controller.rotation.y - (y0 + 3.0 * 0.2)).abs() < 1e-4);
}

#[test]
fn hover_enlarges_only_the_hovered_tile() {
    let mut engine = make_engine(2);
    let target = engine.visible_indices()[0];
    engine.set_hovered(Some(target));
    let positions = engine.world_positions();
    for p in engine.placements() {
        let Some(style) = p.style else { continue };
        if p.index == target {
            let s = positions[target].scale;
            assert!((style.transform_scale - (1.2_f32).min(1.2 / s)).abs() < 1e-6);
        } else {
            assert_eq!(style.transform_scale, 1.0);
        }
    }

    engine.clear_hovered(target + 1);
    assert_eq!(engine.hovered(), Some(target));
    engine.clear_hovered(target);
    assert_eq!(engine.hovered(), None);
}

#[test]
fn styles_center_tiles_in_the_container() {
    let engine = make_engine(3);
    let cfg = engine.config.clone();
    let positions = engine.world_positions();
    for p in engine.placements() {
        let Some(style) = p.style else { continue };
        let w = &positions[p.index];
        assert!((style.left - (cfg.container_size / 2.0 + w.pos.x)).abs() < 1e-3);
        assert!((style.top - (cfg.container_size / 2.0 + w.pos.y)).abs() < 1e-3);
        assert!((style.size - cfg.base_image_size() * w.scale).abs() < 1e-3);
        assert_eq!(style.z_index, w.z_index);
        assert!(style.css().contains(&format!("z-index: {};", w.z_index)));
    }
}

#[test]
fn reinitialize_rebuilds_geometry_and_state() {
    let mut engine = make_engine(4);
    let mut reg = ElementRegistry::new();
    let mut host = RecordingHost::default();
    let t0 = Instant::now();

    engine.controller.rotation = Vec2::new(-90.0, 120.0);
    engine.set_hovered(Some(0));
    let first = engine.frame(t0).expect("first frame");
    reg.render_pass(&first, &mut host);
    assert!(!reg.is_empty());

    reg.teardown(&mut host);
    engine.reinitialize(SphereConfig::for_viewport(500.0), &mut StdRng::seed_from_u64(9));
    assert!(reg.is_empty());
    assert_eq!(engine.points().len(), 30);
    assert!(engine.points().iter().all(|p| p.radius == 180.0));
    assert_eq!(engine.controller.rotation, Vec2::new(15.0, 15.0));
    assert_eq!(engine.hovered(), None);

    // gate is open again straight away
    let again = engine.frame(t0 + Duration::from_millis(1)).expect("gate reset");
    reg.render_pass(&again, &mut host);
    assert_eq!(reg.indices(), engine.visible_indices());
}
