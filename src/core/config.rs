use super::constants::*;

/// Geometry and physics settings for one sphere instance.
///
/// Geometry depends on the viewport width and is rebuilt on every
/// reinitialization; the physics knobs default to the tuned constants.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereConfig {
    pub container_size: f32,
    pub sphere_radius: f32,
    pub base_image_scale: f32,
    pub perspective: f32,
    pub drag_sensitivity: f32,
    pub momentum_decay: f32,
    pub max_rotation_speed: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub is_mobile: bool,
}

impl SphereConfig {
    pub fn for_viewport(viewport_width: f64) -> Self {
        let w = viewport_width.max(0.0) as f32;
        let is_mobile = viewport_width <= MOBILE_BREAKPOINT_PX;
        let (container_size, sphere_radius, base_image_scale) = if is_mobile {
            (
                MOBILE_CONTAINER_MAX_PX.min(w * MOBILE_CONTAINER_VW),
                MOBILE_SPHERE_RADIUS,
                MOBILE_BASE_IMAGE_SCALE,
            )
        } else {
            (
                DESKTOP_CONTAINER_MAX_PX.min(w * DESKTOP_CONTAINER_VW),
                DESKTOP_SPHERE_RADIUS,
                DESKTOP_BASE_IMAGE_SCALE,
            )
        };
        Self {
            container_size,
            sphere_radius,
            base_image_scale,
            is_mobile,
            ..Self::default()
        }
    }

    #[inline]
    pub fn base_image_size(&self) -> f32 {
        self.container_size * self.base_image_scale
    }

    #[inline]
    pub fn clamp_speed(&self, v: f32) -> f32 {
        v.clamp(-self.max_rotation_speed, self.max_rotation_speed)
    }

    /// Inline style for the container element.
    pub fn container_css(&self, dragging: bool) -> String {
        let side = if self.is_mobile {
            "left: auto; right: auto;"
        } else {
            "left: 0; right: 0;"
        };
        format!(
            "position: relative; width: {size}px; height: {size}px; margin: 0 auto; \
             perspective: {persp}px; cursor: {cursor}; user-select: none; touch-action: none; \
             transform: translateX(0); {side}",
            size = self.container_size,
            persp = self.perspective,
            cursor = if dragging { "grabbing" } else { "grab" },
            side = side,
        )
    }
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            container_size: DESKTOP_CONTAINER_MAX_PX,
            sphere_radius: DESKTOP_SPHERE_RADIUS,
            base_image_scale: DESKTOP_BASE_IMAGE_SCALE,
            perspective: PERSPECTIVE_PX,
            drag_sensitivity: DRAG_SENSITIVITY,
            momentum_decay: MOMENTUM_DECAY,
            max_rotation_speed: MAX_ROTATION_SPEED,
            auto_rotate: AUTO_ROTATE,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
            is_mobile: false,
        }
    }
}
