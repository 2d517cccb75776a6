use super::config::SphereConfig;
use super::constants::RENDER_THROTTLE_MS;
use super::content::Testimonial;
use super::layout::{generate_positions, SpherePoint};
use super::lifecycle::{NodeStyle, Placement};
use super::projection::{project_all, WorldPosition};
use super::rotation::RotationController;
use super::schedule::RenderGate;
use instant::Instant;
use rand::Rng;
use std::time::Duration;

/// Everything one sphere instance owns apart from its DOM nodes.
pub struct SphereEngine {
    pub config: SphereConfig,
    pub controller: RotationController,
    items: Vec<Testimonial>,
    points: Vec<SpherePoint>,
    gate: RenderGate,
    hovered: Option<usize>,
}

impl SphereEngine {
    pub fn new<R: Rng + ?Sized>(config: SphereConfig, items: Vec<Testimonial>, rng: &mut R) -> Self {
        let points = generate_positions(items.len(), config.sphere_radius, rng);
        Self {
            config,
            controller: RotationController::new(),
            items,
            points,
            gate: RenderGate::new(Duration::from_millis(RENDER_THROTTLE_MS)),
            hovered: None,
        }
    }

    /// Start over with new geometry: fresh points, fresh rotation state and
    /// an open render gate.
    pub fn reinitialize<R: Rng + ?Sized>(&mut self, config: SphereConfig, rng: &mut R) {
        self.points = generate_positions(self.items.len(), config.sphere_radius, rng);
        self.config = config;
        self.controller = RotationController::new();
        self.gate.reset();
        self.hovered = None;
    }

    pub fn items(&self) -> &[Testimonial] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Testimonial> {
        self.items.get(index)
    }

    pub fn points(&self) -> &[SpherePoint] {
        &self.points
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index;
    }

    /// Clear the hover only if it still points at `index`.
    pub fn clear_hovered(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    pub fn world_positions(&self) -> Vec<WorldPosition> {
        project_all(&self.points, self.controller.rotation, self.config.sphere_radius)
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.world_positions()
            .into_iter()
            .filter(|p| p.is_visible)
            .map(|p| p.index)
            .collect()
    }

    pub fn placements(&self) -> Vec<Placement> {
        self.world_positions()
            .iter()
            .map(|p| Placement {
                index: p.index,
                style: p
                    .is_visible
                    .then(|| NodeStyle::from_world(p, &self.config, self.hovered == Some(p.index))),
            })
            .collect()
    }

    /// Advance one animation frame. Returns placements when the render gate
    /// lets this frame through.
    pub fn frame(&mut self, now: Instant) -> Option<Vec<Placement>> {
        self.controller.step_momentum(&self.config);
        self.gate.try_pass(now).then(|| self.placements())
    }
}
