//! Per-object interpolation between a chaos position and a formed position.
//!
//! Every collection in the scene (ornament batches, photo panels, the particle
//! field) reads the same progress scalar and bends it through its
//! [`WeightClass`] before blending. Transforms are recomputed from scratch each
//! frame; the cached position is never fed back into the blend.

use crate::config::OrnamentSpec;
use crate::constants::*;
use crate::sampler::{sample_cone, sample_point_in_sphere};
use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::PI;

/// Speed modifier applied to the progress curve of a whole collection.
///
/// Note the naming is inherited from how the scene was tuned, not from the
/// curve: with `progress` in \[0, 1\], `progress^0.8 >= progress`, so `Heavy`
/// objects actually arrive *before* `Light` ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WeightClass {
    Heavy,
    #[default]
    Neutral,
    Light,
}

impl WeightClass {
    #[inline]
    pub fn exponent(self) -> f32 {
        match self {
            WeightClass::Heavy => WEIGHT_HEAVY,
            WeightClass::Neutral => WEIGHT_NEUTRAL,
            WeightClass::Light => WEIGHT_LIGHT,
        }
    }

    #[inline]
    pub fn effective_progress(self, progress: f32) -> f32 {
        progress.clamp(0.0, 1.0).powf(self.exponent())
    }
}

/// Position blended from the two endpoints using the weighted progress.
#[inline]
pub fn blend_position(chaos: Vec3, target: Vec3, weight: WeightClass, progress: f32) -> Vec3 {
    chaos.lerp(target, weight.effective_progress(progress))
}

#[inline]
pub fn is_formed(progress: f32) -> bool {
    progress >= FORMED_THRESHOLD
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// Per-instance vertex data uploaded by the renderer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceRaw {
    pub fn new(root: Mat4, transform: &Transform, color: [f32; 3]) -> Self {
        Self {
            model: (root * transform.matrix()).to_cols_array_2d(),
            color: [color[0], color[1], color[2], 1.0],
        }
    }

    /// Unrotated sprite of width `size` centred on a world-space point.
    pub fn billboard(world_position: Vec3, size: f32, color: [f32; 3]) -> Self {
        let model = Mat4::from_translation(world_position) * Mat4::from_scale(Vec3::splat(size));
        Self {
            model: model.to_cols_array_2d(),
            color: [color[0], color[1], color[2], 1.0],
        }
    }
}

#[inline]
pub fn euler_to_quat(euler: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z)
}

/// One animated object with fixed endpoints and a rest orientation.
#[derive(Clone, Debug)]
pub struct RenderableObject {
    chaos_position: Vec3,
    target_position: Vec3,
    rest_rotation: Vec3,
    rest_scale: f32,
    current_position: Vec3,
    current_rotation: Vec3,
}

impl RenderableObject {
    /// Starts at its target, resting, as a freshly formed scene expects.
    pub fn new(
        chaos_position: Vec3,
        target_position: Vec3,
        rest_rotation: Vec3,
        rest_scale: f32,
    ) -> Self {
        Self {
            chaos_position,
            target_position,
            rest_rotation,
            rest_scale,
            current_position: target_position,
            current_rotation: rest_rotation,
        }
    }

    pub fn chaos_position(&self) -> Vec3 {
        self.chaos_position
    }

    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    pub fn rest_rotation(&self) -> Vec3 {
        self.rest_rotation
    }

    pub fn rest_scale(&self) -> f32 {
        self.rest_scale
    }

    pub fn current_position(&self) -> Vec3 {
        self.current_position
    }

    /// Current orientation as XYZ Euler angles.
    pub fn current_rotation(&self) -> Vec3 {
        self.current_rotation
    }

    /// Recompute position and orientation for this frame.
    ///
    /// Below the formed threshold the object tumbles by a fixed angular rate;
    /// at or above it, it snaps back to its rest rotation.
    pub fn update(&mut self, weight: WeightClass, progress: f32, delta_sec: f32) {
        self.current_position =
            blend_position(self.chaos_position, self.target_position, weight, progress);
        if is_formed(progress) {
            self.current_rotation = self.rest_rotation;
        } else if delta_sec > 0.0 {
            self.current_rotation.x += delta_sec * TUMBLE_RATE_X;
            self.current_rotation.y += delta_sec * TUMBLE_RATE_Y;
        }
    }

    pub fn transform(&self) -> Transform {
        Transform {
            position: self.current_position,
            rotation: euler_to_quat(self.current_rotation),
            scale: Vec3::splat(self.rest_scale),
        }
    }
}

/// Instanced batch of ornaments sharing a weight class and a colour.
#[derive(Clone, Debug)]
pub struct OrnamentBatch {
    pub label: String,
    pub weight: WeightClass,
    pub color: [f32; 3],
    objects: Vec<RenderableObject>,
}

impl OrnamentBatch {
    pub fn build<R: Rng + ?Sized>(rng: &mut R, spec: &OrnamentSpec) -> Self {
        let objects = (0..spec.count)
            .map(|_| {
                let chaos = sample_point_in_sphere(rng, spec.shape.chaos_radius);
                let target = sample_cone(rng, spec.shape.cone_height, spec.shape.cone_radius);
                let rest_rotation = Vec3::new(
                    rng.gen::<f32>() * PI,
                    rng.gen::<f32>() * PI,
                    rng.gen::<f32>() * PI,
                );
                let scale = rng.gen::<f32>() * ORNAMENT_SCALE_SPAN + ORNAMENT_SCALE_MIN;
                RenderableObject::new(chaos, target, rest_rotation, scale)
            })
            .collect::<Vec<_>>();
        log::debug!(
            "[scene] built ornament batch '{}' ({} objects, {:?})",
            spec.label,
            objects.len(),
            spec.weight
        );
        Self {
            label: spec.label.clone(),
            weight: spec.weight,
            color: spec.color,
            objects,
        }
    }

    pub fn from_objects(
        label: impl Into<String>,
        weight: WeightClass,
        objects: Vec<RenderableObject>,
    ) -> Self {
        Self {
            label: label.into(),
            weight,
            color: [1.0, 1.0, 1.0],
            objects,
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[RenderableObject] {
        &self.objects
    }

    pub fn update(&mut self, progress: f32, delta_sec: f32) {
        let weight = self.weight;
        for object in &mut self.objects {
            object.update(weight, progress, delta_sec);
        }
    }

    pub fn write_instances(&self, root: Mat4, out: &mut Vec<InstanceRaw>) {
        out.extend(
            self.objects
                .iter()
                .map(|o| InstanceRaw::new(root, &o.transform(), self.color)),
        );
    }
}
