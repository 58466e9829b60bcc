// Host-side tests for the procedural point samplers.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::*;

const SAMPLES: usize = 20_000;

#[test]
fn sphere_points_stay_inside_radius() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let p = sample_point_in_sphere(&mut rng, 25.0);
        assert!(p.length() <= 25.0 + 1e-3, "point outside sphere: {p:?}");
    }
}

#[test]
fn sphere_sampling_is_volumetrically_uniform() {
    let mut rng = StdRng::seed_from_u64(11);
    let radius = 10.0;
    let inner = (0..SAMPLES)
        .filter(|_| sample_point_in_sphere(&mut rng, radius).length() <= radius / 2.0)
        .count();
    let fraction = inner as f32 / SAMPLES as f32;
    // inner half-radius ball holds 1/8 of the volume
    assert!((fraction - 0.125).abs() < 0.02, "fraction within r/2 = {fraction}");
}

#[test]
fn sphere_sampling_has_no_octant_bias() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut positive = [0usize; 3];
    for _ in 0..SAMPLES {
        let p = sample_point_in_sphere(&mut rng, 1.0);
        positive[0] += (p.x > 0.0) as usize;
        positive[1] += (p.y > 0.0) as usize;
        positive[2] += (p.z > 0.0) as usize;
    }
    for (axis, n) in positive.iter().enumerate() {
        let f = *n as f32 / SAMPLES as f32;
        assert!((f - 0.5).abs() < 0.03, "axis {axis} positive fraction {f}");
    }
}

#[test]
fn cone_points_respect_height_and_taper() {
    let mut rng = StdRng::seed_from_u64(3);
    let (h, r) = (12.0_f32, 4.0_f32);
    for _ in 0..SAMPLES {
        let p = sample_cone(&mut rng, h, r);
        assert!(p.y >= -h / 2.0 - 1e-4 && p.y <= h / 2.0 + 1e-4, "y out of range: {p:?}");
        let allowed = r * (h - (p.y + h / 2.0)) / h;
        let radial = (p.x * p.x + p.z * p.z).sqrt();
        assert!(radial <= allowed + 1e-3, "radial {radial} > {allowed} at y {}", p.y);
    }
}

#[test]
fn cone_height_is_drawn_uniformly() {
    // uniform in height, not in volume: each vertical half gets ~50%
    let mut rng = StdRng::seed_from_u64(5);
    let upper = (0..SAMPLES)
        .filter(|_| sample_cone(&mut rng, 12.0, 4.0).y > 0.0)
        .count();
    let fraction = upper as f32 / SAMPLES as f32;
    assert!((fraction - 0.5).abs() < 0.02, "upper fraction {fraction}");
}

#[test]
fn samplers_draw_fresh_points() {
    let mut rng = StdRng::seed_from_u64(1);
    let a = sample_point_in_sphere(&mut rng, 5.0);
    let b = sample_point_in_sphere(&mut rng, 5.0);
    assert_ne!(a, b);
    let c = sample_cone(&mut rng, 5.0, 1.0);
    let d = sample_cone(&mut rng, 5.0, 1.0);
    assert_ne!(c, d);
}

#[test]
fn same_seed_gives_same_points() {
    let mut r1 = StdRng::seed_from_u64(99);
    let mut r2 = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        assert_eq!(sample_cone(&mut r1, 11.0, 4.2), sample_cone(&mut r2, 11.0, 4.2));
    }
}
