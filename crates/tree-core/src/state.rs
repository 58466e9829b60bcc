//! Animation state shared by every renderable collection.
//!
//! [`AnimationState`] is owned by the scene and handed out by reference: the
//! signal adapter mutates it between frames, the frame tick advances it once,
//! and every collection reads the resulting progress. Nothing here blocks or
//! allocates.

use crate::constants::*;
use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::TAU;

/// Which shape the scene is heading towards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    Chaos,
    #[default]
    Formed,
}

impl Mode {
    /// Progress value the damping step converges to in this mode.
    #[inline]
    pub fn target_progress(self) -> f32 {
        match self {
            Mode::Chaos => 0.0,
            Mode::Formed => 1.0,
        }
    }
}

/// Read-only copy of the state taken once per frame by consumers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateSnapshot {
    pub mode: Mode,
    pub progress: f32,
    pub control_signal: Vec2,
}

#[derive(Clone, Debug)]
pub struct AnimationState {
    mode: Mode,
    progress: f32,
    control_signal: Vec2,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    /// Fully formed, pointing at the centre.
    pub fn new() -> Self {
        Self {
            mode: Mode::Formed,
            progress: 1.0,
            control_signal: Vec2::splat(0.5),
        }
    }

    /// Start from an arbitrary point of a transition. `progress` is clamped to
    /// \[0, 1\]; a NaN falls back to the mode's target.
    pub fn starting_at(mode: Mode, progress: f32) -> Self {
        let progress = if progress.is_nan() {
            mode.target_progress()
        } else {
            progress.clamp(0.0, 1.0)
        };
        Self {
            mode,
            progress,
            control_signal: Vec2::splat(0.5),
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn control_signal(&self) -> Vec2 {
        self.control_signal
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            mode: self.mode,
            progress: self.progress,
            control_signal: self.control_signal,
        }
    }

    /// Change the damping target. Progress is untouched until the next
    /// [`advance`](Self::advance).
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::debug!(
                "[state] mode {:?} -> {:?} at progress {:.3}",
                self.mode,
                mode,
                self.progress
            );
        }
        self.mode = mode;
    }

    /// Exponentially damp progress toward the current mode's target.
    ///
    /// Zero, negative and NaN steps leave the state unchanged. Very large steps
    /// snap to the target. The result always lies between the previous value and
    /// the target, so progress never overshoots or oscillates.
    pub fn advance(&mut self, delta_sec: f32) {
        if !(delta_sec > 0.0) {
            return;
        }
        let target = self.mode.target_progress();
        if delta_sec >= ADVANCE_SNAP_SECONDS {
            self.progress = target;
            return;
        }
        let decay = (-PROGRESS_DAMPING_RATE * delta_sec).exp();
        let next = target + (self.progress - target) * decay;
        let (lo, hi) = if self.progress <= target {
            (self.progress, target)
        } else {
            (target, self.progress)
        };
        self.progress = next.clamp(lo, hi);
    }

    /// Store the last known pointing position, clamping each axis to \[0, 1\].
    pub fn set_control_signal(&mut self, x: f32, y: f32) {
        self.control_signal = Vec2::new(clamp_unit(x), clamp_unit(y));
    }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.5
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Yaw of the whole scene, steered by the horizontal control signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneRotation {
    pub yaw: f32,
}

impl SceneRotation {
    /// Map a normalized horizontal position to a yaw in \[-π, π\].
    #[inline]
    pub fn target_yaw(control_x: f32) -> f32 {
        (control_x - 0.5) * TAU
    }

    pub fn step(&mut self, control: Vec2, delta_sec: f32) {
        if !(delta_sec > 0.0) {
            return;
        }
        let target = Self::target_yaw(control.x);
        let k = (delta_sec * SCENE_YAW_DAMPING).min(1.0);
        self.yaw += (target - self.yaw) * k;
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.yaw)
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
