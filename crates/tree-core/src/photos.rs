//! Photo panels arranged on a spiral around the tree.

use crate::config::PhotoSpec;
use crate::constants::*;
use crate::driver::{euler_to_quat, InstanceRaw, RenderableObject, Transform, WeightClass};
use crate::sampler::sample_point_in_sphere;
use glam::{Mat4, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// Formed position and facing yaw of panel `index` out of `total`.
///
/// Panels climb from y = -3 to y = 7 while the radius widens from 10 to 12
/// over two full turns. The yaw turns each panel away from the trunk.
pub fn spiral_layout(index: usize, total: usize) -> (Vec3, f32) {
    let t = if total == 0 { 0.0 } else { index as f32 / total as f32 };
    let radius = PHOTO_SPIRAL_RADIUS + t * PHOTO_SPIRAL_RADIUS_SPAN;
    let height = PHOTO_SPIRAL_BASE_Y + t * PHOTO_SPIRAL_HEIGHT_SPAN;
    let angle = t * PHOTO_SPIRAL_TURNS * TAU;
    let x = angle.cos() * radius;
    let z = angle.sin() * radius;
    (Vec3::new(x, height, z), x.atan2(z))
}

#[derive(Clone, Debug)]
pub struct PhotoPanel {
    pub index: usize,
    object: RenderableObject,
    enlarged: bool,
    scale: f32,
    bob: f32,
}

impl PhotoPanel {
    pub fn is_enlarged(&self) -> bool {
        self.enlarged
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn object(&self) -> &RenderableObject {
        &self.object
    }

    fn target_scale(&self) -> f32 {
        if self.enlarged {
            self.object.rest_scale() * PHOTO_ENLARGE_FACTOR
        } else {
            self.object.rest_scale()
        }
    }

    pub fn transform(&self) -> Transform {
        let mut position = self.object.current_position();
        position.y += self.bob;
        Transform {
            position,
            rotation: euler_to_quat(self.object.current_rotation()),
            scale: Vec3::new(self.scale, self.scale, 0.01),
        }
    }
}

pub struct PhotoGallery {
    panels: Vec<PhotoPanel>,
}

impl PhotoGallery {
    pub fn build<R: Rng + ?Sized>(rng: &mut R, spec: &PhotoSpec) -> Self {
        let panels = (0..spec.count)
            .map(|index| {
                let (target, yaw) = spiral_layout(index, spec.count);
                let chaos = sample_point_in_sphere(rng, spec.chaos_radius);
                PhotoPanel {
                    index,
                    object: RenderableObject::new(
                        chaos,
                        target,
                        Vec3::new(0.0, yaw, 0.0),
                        spec.base_scale,
                    ),
                    enlarged: false,
                    scale: spec.base_scale,
                    bob: 0.0,
                }
            })
            .collect();
        Self { panels }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panels(&self) -> &[PhotoPanel] {
        &self.panels
    }

    /// Flip the enlarged flag of one panel. Out-of-range indices are ignored.
    pub fn toggle_enlarged(&mut self, index: usize) {
        if let Some(p) = self.panels.get_mut(index) {
            p.enlarged = !p.enlarged;
            log::info!("[photos] panel {} enlarged={}", index, p.enlarged);
        }
    }

    pub fn update(&mut self, progress: f32, delta_sec: f32, time_sec: f32) {
        let k = (delta_sec.max(0.0) * PHOTO_SCALE_DAMPING).min(1.0);
        for p in &mut self.panels {
            p.object.update(WeightClass::Neutral, progress, delta_sec);
            let target = p.target_scale();
            p.scale += (target - p.scale) * k;
            // enlarged panels hold still
            if !p.enlarged {
                p.bob = (time_sec + p.index as f32).sin() * PHOTO_BOB_AMPLITUDE;
            }
        }
    }

    pub fn write_instances(&self, root: Mat4, out: &mut Vec<InstanceRaw>) {
        out.extend(
            self.panels
                .iter()
                .map(|p| InstanceRaw::new(root, &p.transform(), PHOTO_COLOR)),
        );
    }
}
