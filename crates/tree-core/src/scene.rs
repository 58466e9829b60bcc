//! The assembled tree: state, yaw and every renderable collection, advanced
//! by one explicit [`Scene::tick`] per frame.

use crate::config::{ConfigError, SceneConfig};
use crate::driver::{InstanceRaw, OrnamentBatch};
use crate::gesture::{GestureReading, GestureSource, SignalAdapter};
use crate::particles::ParticleField;
use crate::photos::PhotoGallery;
use crate::state::{AnimationState, Mode, SceneRotation};
use glam::Mat4;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Scene {
    state: AnimationState,
    rotation: SceneRotation,
    signal: SignalAdapter,
    elapsed_sec: f32,
    pub particles: ParticleField,
    pub ornaments: Vec<OrnamentBatch>,
    pub photos: PhotoGallery,
}

impl Scene {
    /// Validate `config` and sample every collection from its seed.
    pub fn build(config: &SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let particles = ParticleField::build(&mut rng, &config.particles);
        let ornaments = config
            .ornaments
            .iter()
            .map(|spec| OrnamentBatch::build(&mut rng, spec))
            .collect::<Vec<_>>();
        let photos = PhotoGallery::build(&mut rng, &config.photos);
        let scene = Self {
            state: AnimationState::new(),
            rotation: SceneRotation::default(),
            signal: SignalAdapter::new(config.gesture_debounce_sec),
            elapsed_sec: 0.0,
            particles,
            ornaments,
            photos,
        };
        log::info!(
            "[scene] built: {} particles, {} ornaments in {} batches, {} photos (seed {})",
            scene.particles.len(),
            scene.ornaments.iter().map(OrnamentBatch::len).sum::<usize>(),
            scene.ornaments.len(),
            scene.photos.len(),
            config.seed
        );
        Ok(scene)
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn yaw(&self) -> f32 {
        self.rotation.yaw
    }

    /// Root transform applied to every instance in [`write_instances`](Self::write_instances).
    pub fn root_matrix(&self) -> Mat4 {
        self.rotation.matrix()
    }

    pub fn elapsed_sec(&self) -> f32 {
        self.elapsed_sec
    }

    pub fn signal(&self) -> &SignalAdapter {
        &self.signal
    }

    /// Route a gesture reading through the debouncing adapter.
    pub fn observe_gesture(&mut self, reading: GestureReading, now_sec: f64) -> Option<Mode> {
        self.signal.observe(reading, now_sec, &mut self.state)
    }

    /// Poll `source` once and route its reading, if any.
    pub fn pump_gesture<S: GestureSource + ?Sized>(
        &mut self,
        source: &mut S,
        now_sec: f64,
    ) -> Option<Mode> {
        self.signal.pump(source, now_sec, &mut self.state)
    }

    /// Set the mode directly, bypassing the debounce.
    pub fn force_mode(&mut self, mode: Mode) {
        self.signal.force(mode, &mut self.state);
    }

    /// Advance everything by one frame. Must be called at most once per
    /// rendered frame; invalid steps are treated as zero.
    pub fn tick(&mut self, delta_sec: f32) {
        let dt = if delta_sec.is_finite() && delta_sec > 0.0 {
            delta_sec
        } else {
            0.0
        };
        self.state.advance(dt);
        self.rotation.step(self.state.control_signal(), dt);
        self.elapsed_sec += dt;

        let progress = self.state.progress();
        self.particles.update(progress, self.elapsed_sec);
        for batch in &mut self.ornaments {
            batch.update(progress, dt);
        }
        self.photos.update(progress, dt, self.elapsed_sec);
    }

    pub fn instance_count(&self) -> usize {
        self.particles.len()
            + self.ornaments.iter().map(OrnamentBatch::len).sum::<usize>()
            + self.photos.len()
    }

    /// Collect every instance in draw order (particles, ornaments, photos)
    /// with the scene yaw applied.
    pub fn write_instances(&self, out: &mut Vec<InstanceRaw>) {
        out.clear();
        out.reserve(self.instance_count());
        let root = self.root_matrix();
        self.particles.write_instances(root, out);
        for batch in &self.ornaments {
            batch.write_instances(root, out);
        }
        self.photos.write_instances(root, out);
    }
}
