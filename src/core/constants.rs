// Sphere geometry, physics and interaction tuning constants.

// Viewport breakpoint (inclusive) for the mobile layout
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Desktop geometry
pub const DESKTOP_CONTAINER_MAX_PX: f32 = 1000.0;
pub const DESKTOP_CONTAINER_VW: f32 = 0.85; // fraction of viewport width
pub const DESKTOP_SPHERE_RADIUS: f32 = 270.0;
pub const DESKTOP_BASE_IMAGE_SCALE: f32 = 0.13;

// Mobile geometry
pub const MOBILE_CONTAINER_MAX_PX: f32 = 600.0;
pub const MOBILE_CONTAINER_VW: f32 = 0.92;
pub const MOBILE_SPHERE_RADIUS: f32 = 180.0;
pub const MOBILE_BASE_IMAGE_SCALE: f32 = 0.12;

pub const PERSPECTIVE_PX: f32 = 1000.0;

// Rotation physics (degrees, per frame)
pub const DRAG_SENSITIVITY: f32 = 0.8;
pub const MOMENTUM_DECAY: f32 = 0.96;
pub const MAX_ROTATION_SPEED: f32 = 6.0;
pub const VELOCITY_REST_EPSILON: f32 = 0.01; // below this both axes snap to zero
pub const AUTO_ROTATE: bool = true;
pub const AUTO_ROTATE_SPEED: f32 = 0.2;
pub const INITIAL_ROTATION: [f32; 2] = [15.0, 15.0]; // [pitch, yaw]

// Click vs drag
pub const DRAG_THRESHOLD_PX: f32 = 5.0;
pub const TAP_MAX_DURATION_MS: u64 = 300; // touch taps only

// Position generator: pole-density correction
pub const POLE_BONUS_EXPONENT: f32 = 0.6;
pub const POLE_BONUS_DEG: f32 = 35.0;
pub const POLE_PHI_MIN: f32 = 5.0;
pub const POLE_PHI_MAX: f32 = 175.0;
pub const PHI_BAND_MIN: f32 = 15.0;
pub const PHI_BAND_MAX: f32 = 165.0;

// Position generator: jitter (full width, centred on zero)
pub const THETA_JITTER_DEG: f32 = 20.0; // ±10°
pub const PHI_JITTER_DEG: f32 = 10.0; // ±5°

// Depth fade band (z grows toward the viewer)
pub const FADE_ZONE_START: f32 = -10.0;
pub const FADE_ZONE_END: f32 = -30.0; // hard visibility cutoff

// Scale mapping
pub const CENTER_SCALE_FALLOFF: f32 = 0.7;
pub const CENTER_SCALE_MIN: f32 = 0.3;
pub const DEPTH_SCALE_BASE: f32 = 0.8;
pub const DEPTH_SCALE_SPAN: f32 = 0.3;
pub const DEPTH_SCALE_MIN: f32 = 0.5;

pub const Z_INDEX_BASE: f32 = 1000.0;

// Hover
pub const HOVER_SCALE_CAP: f32 = 1.2;

// Images at indices below this load eagerly
pub const EAGER_IMAGE_COUNT: usize = 3;

// Scheduling
pub const RENDER_THROTTLE_MS: u64 = 16;
pub const RESIZE_DEBOUNCE_MS: u64 = 250;

// Content
pub const SPHERE_ITEM_COUNT: usize = 30;
