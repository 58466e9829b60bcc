//! Procedural point sampling for the two shapes every object moves between.
//!
//! Both samplers draw from a caller-supplied RNG so scenes can be rebuilt
//! deterministically from a seed. Geometry parameters must be positive; that is
//! checked once by [`crate::SceneConfig::validate`], not on every draw.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Point on a right circular cone, apex up, centred vertically on the origin.
///
/// The height fraction is drawn uniformly and the radius tapers linearly to
/// zero at the apex. This is uniform over height rather than over volume, which
/// gives the tree its characteristic silhouette.
pub fn sample_cone<R: Rng + ?Sized>(rng: &mut R, height: f32, base_radius: f32) -> Vec3 {
    let h = rng.gen::<f32>() * height;
    let r = base_radius * (height - h) / height;
    let theta = rng.gen::<f32>() * TAU;
    Vec3::new(r * theta.cos(), h - height / 2.0, r * theta.sin())
}

/// Point uniformly distributed inside a solid sphere centred on the origin.
pub fn sample_point_in_sphere<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let u = rng.gen::<f32>();
    let v = rng.gen::<f32>();
    let theta = u * TAU;
    let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
    // cube root keeps the radial density uniform in volume
    let r = rng.gen::<f32>().cbrt() * radius;
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vec3::new(
        r * sin_phi * cos_theta,
        r * sin_phi * sin_theta,
        r * cos_phi,
    )
}
