//! Foliage particle field.
//!
//! Tens of thousands of points share one neutral weight curve, so the field
//! keeps its endpoints in flat arrays instead of one [`RenderableObject`] per
//! point. Particles never rotate; they only blend, sway, and carry a colour
//! derived from their formed height.
//!
//! [`RenderableObject`]: crate::driver::RenderableObject

use crate::config::ParticleSpec;
use crate::constants::*;
use crate::driver::{InstanceRaw, WeightClass};
use crate::sampler::{sample_cone, sample_point_in_sphere};
use glam::{Mat4, Vec3};
use rand::Rng;

pub struct ParticleField {
    chaos: Vec<Vec3>,
    target: Vec<Vec3>,
    sizes: Vec<f32>,
    colors: Vec<[f32; 3]>,
    current: Vec<Vec3>,
}

impl ParticleField {
    pub fn build<R: Rng + ?Sized>(rng: &mut R, spec: &ParticleSpec) -> Self {
        let n = spec.count;
        let mut chaos = Vec::with_capacity(n);
        let mut target = Vec::with_capacity(n);
        let mut sizes = Vec::with_capacity(n);
        for _ in 0..n {
            chaos.push(sample_point_in_sphere(rng, spec.shape.chaos_radius));
            target.push(sample_cone(rng, spec.shape.cone_height, spec.shape.cone_radius));
            sizes.push(rng.gen::<f32>() * PARTICLE_SIZE_SPAN + PARTICLE_SIZE_MIN);
        }
        let colors = target.iter().map(|t| height_color(t.y)).collect();
        let current = target.clone();
        log::debug!("[scene] built particle field ({n} particles)");
        Self {
            chaos,
            target,
            sizes,
            colors,
            current,
        }
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn chaos_positions(&self) -> &[Vec3] {
        &self.chaos
    }

    pub fn target_positions(&self) -> &[Vec3] {
        &self.target
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn current_positions(&self) -> &[Vec3] {
        &self.current
    }

    pub fn update(&mut self, progress: f32, time_sec: f32) {
        let t = WeightClass::Neutral.effective_progress(progress);
        let endpoints = self.chaos.iter().zip(&self.target);
        for (cur, (chaos, target)) in self.current.iter_mut().zip(endpoints) {
            *cur = sway(chaos.lerp(*target, t), t, time_sec);
        }
    }

    /// Particles are camera-facing sprites: only their centre follows `root`.
    pub fn write_instances(&self, root: Mat4, out: &mut Vec<InstanceRaw>) {
        out.reserve(self.current.len());
        for ((pos, size), color) in self.current.iter().zip(&self.sizes).zip(&self.colors) {
            out.push(InstanceRaw::billboard(
                root.transform_point3(*pos),
                *size * PARTICLE_SPRITE_SCALE,
                *color,
            ));
        }
    }
}

/// Gentle sideways wave that fades out as the field dissolves.
#[inline]
pub fn sway(position: Vec3, progress: f32, time_sec: f32) -> Vec3 {
    let phase = time_sec * PARTICLE_SWAY_FREQ + position.y;
    let dx = phase.sin() * PARTICLE_SWAY_AMPLITUDE * progress;
    Vec3::new(position.x + dx, position.y, position.z)
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Emerald at the bottom, a touch of gold towards the tip.
pub fn height_color(y: f32) -> [f32; 3] {
    let mix = smoothstep(PARTICLE_HEIGHT_MIX_MIN, PARTICLE_HEIGHT_MIX_MAX, y)
        * PARTICLE_HEIGHT_MIX_WEIGHT;
    let base = Vec3::from(PARTICLE_COLOR_BASE);
    let high = Vec3::from(PARTICLE_COLOR_HIGH);
    base.lerp(high, mix).to_array()
}
