//! Scene configuration. Defaults come from [`crate::constants`]; everything
//! is validated once before the scene is built so the per-frame code never has
//! to check geometry again.

use crate::constants::*;
use crate::driver::WeightClass;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{collection}: {field} must be positive and finite, got {value}")]
    NonPositive {
        collection: String,
        field: &'static str,
        value: f32,
    },
    #[error("gesture debounce must be at least {min}s, got {value}s")]
    DebounceTooShort { value: f64, min: f64 },
}

/// The pair of volumes a collection moves between.
#[derive(Clone, Debug)]
pub struct ShapeSpec {
    pub chaos_radius: f32,
    pub cone_height: f32,
    pub cone_radius: f32,
}

impl ShapeSpec {
    fn validate(&self, collection: &str) -> Result<(), ConfigError> {
        positive(collection, "chaos_radius", self.chaos_radius)?;
        positive(collection, "cone_height", self.cone_height)?;
        positive(collection, "cone_radius", self.cone_radius)
    }
}

#[derive(Clone, Debug)]
pub struct ParticleSpec {
    pub count: usize,
    pub shape: ShapeSpec,
}

impl Default for ParticleSpec {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            shape: ShapeSpec {
                chaos_radius: PARTICLE_CHAOS_RADIUS,
                cone_height: PARTICLE_CONE_HEIGHT,
                cone_radius: PARTICLE_CONE_RADIUS,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrnamentSpec {
    pub label: String,
    pub count: usize,
    pub weight: WeightClass,
    pub shape: ShapeSpec,
    pub color: [f32; 3],
}

impl OrnamentSpec {
    fn ornament(label: &str, count: usize, weight: WeightClass, color: [f32; 3]) -> Self {
        Self {
            label: label.to_string(),
            count,
            weight,
            shape: ShapeSpec {
                chaos_radius: ORNAMENT_CHAOS_RADIUS,
                cone_height: ORNAMENT_CONE_HEIGHT,
                cone_radius: ORNAMENT_CONE_RADIUS,
            },
            color,
        }
    }

    /// Gold baubles.
    pub fn light() -> Self {
        Self::ornament("light", LIGHT_ORNAMENT_COUNT, WeightClass::Light, LIGHT_ORNAMENT_COLOR)
    }

    /// Red gift boxes.
    pub fn heavy() -> Self {
        Self::ornament("heavy", HEAVY_ORNAMENT_COUNT, WeightClass::Heavy, HEAVY_ORNAMENT_COLOR)
    }
}

#[derive(Clone, Debug)]
pub struct PhotoSpec {
    pub count: usize,
    pub chaos_radius: f32,
    pub base_scale: f32,
}

impl Default for PhotoSpec {
    fn default() -> Self {
        Self {
            count: PHOTO_COUNT,
            chaos_radius: PHOTO_CHAOS_RADIUS,
            base_scale: PHOTO_BASE_SCALE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub seed: u64,
    pub particles: ParticleSpec,
    pub ornaments: Vec<OrnamentSpec>,
    pub photos: PhotoSpec,
    pub gesture_debounce_sec: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            particles: ParticleSpec::default(),
            ornaments: vec![OrnamentSpec::light(), OrnamentSpec::heavy()],
            photos: PhotoSpec::default(),
            gesture_debounce_sec: GESTURE_DEBOUNCE_SEC,
        }
    }
}

impl SceneConfig {
    /// Check every geometry parameter and the debounce window. Empty
    /// collections are allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.particles.shape.validate("particles")?;
        for spec in &self.ornaments {
            spec.shape.validate(&spec.label)?;
        }
        positive("photos", "chaos_radius", self.photos.chaos_radius)?;
        positive("photos", "base_scale", self.photos.base_scale)?;
        if !(self.gesture_debounce_sec >= GESTURE_DEBOUNCE_MIN_SEC) {
            return Err(ConfigError::DebounceTooShort {
                value: self.gesture_debounce_sec,
                min: GESTURE_DEBOUNCE_MIN_SEC,
            });
        }
        Ok(())
    }
}

fn positive(collection: &str, field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive {
            collection: collection.to_string(),
            field,
            value,
        })
    }
}
