use glam::Vec3;

// Shared animation/scene tuning constants used by the core and the native frontend.

// Progress damping
pub const PROGRESS_DAMPING_RATE: f32 = 2.0; // per second, exponential
pub const ADVANCE_SNAP_SECONDS: f32 = 30.0; // larger steps snap straight to target

// Tumbling while unformed
pub const FORMED_THRESHOLD: f32 = 0.95; // progress at which objects take their rest rotation
pub const TUMBLE_RATE_X: f32 = 0.2; // radians per second
pub const TUMBLE_RATE_Y: f32 = 0.1; // radians per second

// Weight class exponents (effective progress = progress^w)
pub const WEIGHT_HEAVY: f32 = 0.8;
pub const WEIGHT_NEUTRAL: f32 = 1.0;
pub const WEIGHT_LIGHT: f32 = 1.2;

// Scene yaw driven by the hand position
pub const SCENE_YAW_DAMPING: f32 = 3.0;

// Particle field (foliage)
pub const PARTICLE_COUNT: usize = 50_000;
pub const PARTICLE_CHAOS_RADIUS: f32 = 25.0;
pub const PARTICLE_CONE_HEIGHT: f32 = 12.0;
pub const PARTICLE_CONE_RADIUS: f32 = 4.0;
pub const PARTICLE_SIZE_MIN: f32 = 0.2;
pub const PARTICLE_SIZE_SPAN: f32 = 0.5;
pub const PARTICLE_SPRITE_SCALE: f32 = 0.35; // size -> world-space sprite width
pub const PARTICLE_SWAY_FREQ: f32 = 2.0;
pub const PARTICLE_SWAY_AMPLITUDE: f32 = 0.05;
pub const PARTICLE_COLOR_BASE: [f32; 3] = [0.0, 0.259, 0.145]; // deep emerald
pub const PARTICLE_COLOR_HIGH: [f32; 3] = [0.831, 0.686, 0.216]; // gold
pub const PARTICLE_HEIGHT_MIX_MIN: f32 = -5.0;
pub const PARTICLE_HEIGHT_MIX_MAX: f32 = 5.0;
pub const PARTICLE_HEIGHT_MIX_WEIGHT: f32 = 0.3;

// Ornaments
pub const ORNAMENT_CHAOS_RADIUS: f32 = 30.0;
pub const ORNAMENT_CONE_HEIGHT: f32 = 11.0;
pub const ORNAMENT_CONE_RADIUS: f32 = 4.2; // slightly outside the foliage
pub const ORNAMENT_SCALE_MIN: f32 = 0.2;
pub const ORNAMENT_SCALE_SPAN: f32 = 0.3;
pub const LIGHT_ORNAMENT_COUNT: usize = 200;
pub const HEAVY_ORNAMENT_COUNT: usize = 50;
pub const LIGHT_ORNAMENT_COLOR: [f32; 3] = [0.831, 0.686, 0.216]; // gold
pub const HEAVY_ORNAMENT_COLOR: [f32; 3] = [0.541, 0.0, 0.0]; // gift red

// Photo panels
pub const PHOTO_COUNT: usize = 10;
pub const PHOTO_CHAOS_RADIUS: f32 = 30.0;
pub const PHOTO_SPIRAL_RADIUS: f32 = 10.0;
pub const PHOTO_SPIRAL_RADIUS_SPAN: f32 = 2.0;
pub const PHOTO_SPIRAL_BASE_Y: f32 = -3.0;
pub const PHOTO_SPIRAL_HEIGHT_SPAN: f32 = 10.0;
pub const PHOTO_SPIRAL_TURNS: f32 = 2.0;
pub const PHOTO_BASE_SCALE: f32 = 1.5;
pub const PHOTO_ENLARGE_FACTOR: f32 = 3.0;
pub const PHOTO_SCALE_DAMPING: f32 = 5.0;
pub const PHOTO_BOB_AMPLITUDE: f32 = 0.1;
pub const PHOTO_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

// Gesture adapter
pub const HAND_X_MIN: f32 = 0.1;
pub const HAND_X_MAX: f32 = 0.9;
pub const HAND_HISTORY_LEN: usize = 5;
pub const HAND_MOVEMENT_THRESHOLD: f32 = 0.02; // summed |dx| over the history
pub const GESTURE_DEBOUNCE_SEC: f64 = 1.0;
pub const GESTURE_DEBOUNCE_MIN_SEC: f64 = 0.5;

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 4.0, 20.0];
pub const CAMERA_FOVY_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;

pub const DEFAULT_SEED: u64 = 2025;

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}
