use glam::{Mat4, Vec4};
use tree_core::{Gesture, GestureReading, GestureSource, Scene};

/// Pointer-driven stand-in for the camera hand detector.
///
/// The cursor's horizontal position plays the hand position; holding the left
/// button plays an open hand.
#[derive(Clone, Copy, Debug)]
pub struct PointerHand {
    pub uv_x: f32,
    pub open: bool,
}

impl Default for PointerHand {
    fn default() -> Self {
        Self {
            uv_x: 0.5,
            open: false,
        }
    }
}

impl PointerHand {
    pub fn set_cursor(&mut self, x_px: f64, width_px: u32) {
        let w = width_px.max(1) as f32;
        self.uv_x = (x_px as f32 / w).clamp(0.0, 1.0);
    }
}

impl GestureSource for PointerHand {
    fn poll(&mut self) -> Option<GestureReading> {
        Some(GestureReading {
            gesture: if self.open {
                Gesture::Open
            } else {
                Gesture::Closed
            },
            hand_x: self.uv_x,
        })
    }
}

// ---------------- Selection helpers ----------------
#[inline]
pub fn nearest_index_by_uvx(normalized_xs: &[f32], uvx: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, x) in normalized_xs.iter().enumerate() {
        let dx = (uvx - *x).abs();
        if best.map_or(true, |(_, best_dx)| dx < best_dx) {
            best = Some((i, dx));
        }
    }
    best.map(|(i, _)| i)
}

/// Screen-space x (0 = left) of every photo panel. Panels behind the camera
/// are pushed off-screen so they are never picked.
pub fn photo_screen_xs(scene: &Scene, view_proj: Mat4) -> Vec<f32> {
    let root = scene.root_matrix();
    scene
        .photos
        .panels()
        .iter()
        .map(|p| {
            let world = root.transform_point3(p.transform().position);
            let clip: Vec4 = view_proj * world.extend(1.0);
            if clip.w <= 1e-4 {
                f32::MAX
            } else {
                (clip.x / clip.w + 1.0) * 0.5
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_index_picks_closest_and_handles_empty() {
        let xs = [0.1, 0.3, 0.5, 0.7, 0.9];
        assert_eq!(nearest_index_by_uvx(&xs, 0.1), Some(0));
        assert_eq!(nearest_index_by_uvx(&xs, 0.32), Some(1));
        assert_eq!(nearest_index_by_uvx(&xs, 2.0), Some(4));
        assert_eq!(nearest_index_by_uvx(&[], 0.5), None);
    }

    #[test]
    fn pointer_hand_reports_cursor_and_button() {
        let mut hand = PointerHand::default();
        hand.set_cursor(600.0, 800);
        hand.open = true;
        let reading = hand.poll().expect("pointer always reports");
        assert_eq!(reading.gesture, Gesture::Open);
        assert!((reading.hand_x - 0.75).abs() < 1e-6);
        hand.set_cursor(-10.0, 0);
        assert_eq!(hand.uv_x, 0.0);
    }
}
