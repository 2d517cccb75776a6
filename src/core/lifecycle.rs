use super::config::SphereConfig;
use super::constants::*;
use super::projection::WorldPosition;
use fnv::{FnvHashMap, FnvHashSet};

/// Final per-item styling handed to the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
    pub left: f32,
    pub top: f32,
    pub size: f32,
    pub opacity: f32,
    pub transform_scale: f32,
    pub z_index: i32,
}

impl NodeStyle {
    pub fn from_world(p: &WorldPosition, cfg: &SphereConfig, hovered: bool) -> Self {
        let half = cfg.container_size / 2.0;
        let transform_scale = if hovered {
            HOVER_SCALE_CAP.min(HOVER_SCALE_CAP / p.scale)
        } else {
            1.0
        };
        Self {
            left: half + p.pos.x,
            top: half + p.pos.y,
            size: cfg.base_image_size() * p.scale,
            opacity: p.fade_opacity,
            transform_scale,
            z_index: p.z_index,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
             opacity: {opacity}; transform: translate(-50%, -50%) scale({scale}); z-index: {z}; \
             cursor: pointer; pointer-events: auto; will-change: transform, opacity;",
            size = self.size,
            left = self.left,
            top = self.top,
            opacity = self.opacity,
            scale = self.transform_scale,
            z = self.z_index,
        )
    }
}

/// One item's state for a render pass. `style` is only set when visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub style: Option<NodeStyle>,
}

/// Platform side of the element lifecycle. `create` attaches the node's
/// handlers and `destroy` detaches them again.
pub trait ElementHost {
    type Node;

    fn create(&mut self, index: usize) -> Option<Self::Node>;
    fn update(&mut self, node: &Self::Node, style: &NodeStyle);
    fn destroy(&mut self, node: Self::Node);
}

/// Index → node mapping; the only record of which nodes exist.
pub struct ElementRegistry<N> {
    nodes: FnvHashMap<usize, N>,
}

impl<N> Default for ElementRegistry<N> {
    fn default() -> Self {
        Self {
            nodes: FnvHashMap::default(),
        }
    }
}

impl<N> ElementRegistry<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.nodes.contains_key(&index)
    }

    pub fn indices(&self) -> Vec<usize> {
        let mut v: Vec<usize> = self.nodes.keys().copied().collect();
        v.sort_unstable();
        v
    }

    pub fn render_pass<H>(&mut self, placements: &[Placement], host: &mut H)
    where
        H: ElementHost<Node = N>,
    {
        let mut visible = FnvHashSet::default();
        for p in placements {
            match p.style {
                Some(style) => {
                    if !self.nodes.contains_key(&p.index) {
                        match host.create(p.index) {
                            Some(node) => {
                                self.nodes.insert(p.index, node);
                            }
                            None => {
                                log::warn!("[sphere] could not create node {}", p.index);
                                continue;
                            }
                        }
                    }
                    if let Some(node) = self.nodes.get(&p.index) {
                        host.update(node, &style);
                    }
                    visible.insert(p.index);
                }
                None => {
                    if let Some(node) = self.nodes.remove(&p.index) {
                        host.destroy(node);
                    }
                }
            }
        }

        let stale: Vec<usize> = self
            .nodes
            .keys()
            .filter(|i| !visible.contains(*i))
            .copied()
            .collect();
        for i in stale {
            if let Some(node) = self.nodes.remove(&i) {
                host.destroy(node);
            }
        }
    }

    /// Destroy every node unconditionally.
    pub fn teardown<H>(&mut self, host: &mut H)
    where
        H: ElementHost<Node = N>,
    {
        for (_, node) in self.nodes.drain() {
            host.destroy(node);
        }
    }
}
