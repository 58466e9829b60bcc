// Host-side sanity checks for tuning constants and their relationships.

use tree_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn rates_and_sizes_are_positive() {
    assert!(PROGRESS_DAMPING_RATE > 0.0);
    assert!(ADVANCE_SNAP_SECONDS > 0.0);
    assert!(TUMBLE_RATE_X > 0.0 && TUMBLE_RATE_Y > 0.0);
    assert!(SCENE_YAW_DAMPING > 0.0);
    assert!(PARTICLE_CHAOS_RADIUS > 0.0);
    assert!(PARTICLE_CONE_HEIGHT > 0.0 && PARTICLE_CONE_RADIUS > 0.0);
    assert!(ORNAMENT_CHAOS_RADIUS > 0.0);
    assert!(ORNAMENT_CONE_HEIGHT > 0.0 && ORNAMENT_CONE_RADIUS > 0.0);
    assert!(PHOTO_BASE_SCALE > 0.0 && PHOTO_ENLARGE_FACTOR > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_within_unit_range() {
    assert!(FORMED_THRESHOLD > 0.0 && FORMED_THRESHOLD < 1.0);
    assert!(HAND_X_MIN >= 0.0 && HAND_X_MAX <= 1.0 && HAND_X_MIN < HAND_X_MAX);
    assert!(PARTICLE_HEIGHT_MIX_WEIGHT >= 0.0 && PARTICLE_HEIGHT_MIX_WEIGHT <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // weight exponents straddle the neutral curve
    assert!(WEIGHT_HEAVY < WEIGHT_NEUTRAL && WEIGHT_NEUTRAL < WEIGHT_LIGHT);

    // ornaments sit slightly outside the foliage
    assert!(ORNAMENT_CONE_RADIUS > PARTICLE_CONE_RADIUS);

    // photos spiral outside the tree
    assert!(PHOTO_SPIRAL_RADIUS > PARTICLE_CONE_RADIUS);

    // default debounce honours the minimum quiet period
    assert!(GESTURE_DEBOUNCE_SEC >= GESTURE_DEBOUNCE_MIN_SEC);
    assert!(GESTURE_DEBOUNCE_MIN_SEC >= 0.5);

    // the camera sits outside the chaos cloud's core and inside the far plane
    assert!(CAMERA_ZFAR > camera_eye_vec3().length() + PARTICLE_CHAOS_RADIUS);
}
