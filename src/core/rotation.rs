use super::config::SphereConfig;
use super::constants::*;
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

/// Wrap an angle in degrees into (-180, 180].
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    if a > 180.0 {
        a - 360.0
    } else {
        a
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    Background,
    Item(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    pub fn from_pointer_type(s: &str) -> Self {
        match s {
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Mouse,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragPhase {
    Idle,
    Dragging { start: Vec2, last: Vec2, moved: bool },
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ItemPress {
    index: usize,
    start: Vec2,
    at: Instant,
    kind: PointerKind,
    cancelled: bool,
}

/// Orientation, angular velocity and the pointer gesture state machine.
///
/// `rotation.x` is pitch and `rotation.y` is yaw, both in degrees. Velocity is
/// in degrees per frame.
#[derive(Clone, Debug)]
pub struct RotationController {
    pub rotation: Vec2,
    pub velocity: Vec2,
    phase: DragPhase,
    press: Option<ItemPress>,
}

impl Default for RotationController {
    fn default() -> Self {
        Self {
            rotation: Vec2::new(INITIAL_ROTATION[0], INITIAL_ROTATION[1]),
            velocity: Vec2::ZERO,
            phase: DragPhase::Idle,
            press: None,
        }
    }
}

impl RotationController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Pointer pressed. A press on an item never starts a drag; it is only
    /// remembered so the matching release can select the item.
    pub fn pointer_down(&mut self, target: PointerTarget, pos: Vec2, kind: PointerKind, now: Instant) {
        match target {
            PointerTarget::Item(index) => {
                self.press = Some(ItemPress {
                    index,
                    start: pos,
                    at: now,
                    kind,
                    cancelled: self.is_dragging(),
                });
            }
            PointerTarget::Background => {
                self.press = None;
                self.velocity = Vec2::ZERO;
                self.phase = DragPhase::Dragging {
                    start: pos,
                    last: pos,
                    moved: false,
                };
            }
        }
    }

    /// Pointer moved. Rotates by the delta since the previous move while
    /// dragging; repeated events at the same position are no-ops.
    pub fn pointer_move(&mut self, pos: Vec2, cfg: &SphereConfig) {
        if let Some(press) = self.press.as_mut() {
            if pos.distance(press.start) > DRAG_THRESHOLD_PX {
                press.cancelled = true;
            }
        }

        let DragPhase::Dragging { start, last, moved } = self.phase else {
            return;
        };
        let delta = pos - last;
        let step = Vec2::new(
            cfg.clamp_speed(-delta.y * cfg.drag_sensitivity),
            cfg.clamp_speed(delta.x * cfg.drag_sensitivity),
        );
        self.rotation = Vec2::new(
            normalize_angle(self.rotation.x + step.x),
            normalize_angle(self.rotation.y + step.y),
        );
        self.velocity = step;
        self.phase = DragPhase::Dragging {
            start,
            last: pos,
            moved: moved || pos.distance(start) > DRAG_THRESHOLD_PX,
        };
    }

    /// Pointer released. Returns the item to select, if this release
    /// completes a click or tap on one.
    pub fn pointer_up(&mut self, pos: Vec2, now: Instant) -> Option<usize> {
        let was_dragging = self.is_dragging();
        self.phase = DragPhase::Idle;

        let press = self.press.take()?;
        if was_dragging || press.cancelled || pos.distance(press.start) > DRAG_THRESHOLD_PX {
            return None;
        }
        if press.kind == PointerKind::Touch
            && now >= press.at + Duration::from_millis(TAP_MAX_DURATION_MS)
        {
            return None;
        }
        Some(press.index)
    }

    /// Pointer cancelled by the browser: end any gesture without selecting.
    pub fn pointer_cancel(&mut self) {
        self.phase = DragPhase::Idle;
        self.press = None;
    }

    /// One frame of inertia. No-op while dragging.
    pub fn step_momentum(&mut self, cfg: &SphereConfig) {
        if self.is_dragging() {
            return;
        }
        self.velocity *= cfg.momentum_decay;
        if self.velocity.x.abs() < VELOCITY_REST_EPSILON && self.velocity.y.abs() < VELOCITY_REST_EPSILON {
            self.velocity = Vec2::ZERO;
        }
        self.velocity = Vec2::new(cfg.clamp_speed(self.velocity.x), cfg.clamp_speed(self.velocity.y));

        let auto = if cfg.auto_rotate {
            cfg.auto_rotate_speed
        } else {
            0.0
        };
        self.rotation = Vec2::new(
            normalize_angle(self.rotation.x + self.velocity.x),
            normalize_angle(self.rotation.y + self.velocity.y + auto),
        );
    }
}
