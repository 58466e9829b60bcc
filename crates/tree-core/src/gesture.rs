//! Bridge between a coarse gesture signal and the animation state.
//!
//! Whatever produces readings (a camera heuristic, a simulator, a test) only
//! has to implement [`GestureSource`]. The [`SignalAdapter`] owns the policy:
//! hand position is forwarded every reading, while the open/closed
//! classification is held while the hand moves and debounced before it may
//! change the mode.

use crate::constants::*;
use crate::state::{AnimationState, Mode};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    Open,
    Closed,
}

impl Gesture {
    /// Open hand scatters the tree, a closed hand gathers it.
    pub fn mode(self) -> Mode {
        match self {
            Gesture::Open => Mode::Chaos,
            Gesture::Closed => Mode::Formed,
        }
    }
}

/// One classified frame from a signal source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureReading {
    pub gesture: Gesture,
    /// Normalized horizontal hand position, 0 = left edge.
    pub hand_x: f32,
}

pub trait GestureSource {
    /// Latest reading, or `None` when the source has nothing new this frame.
    fn poll(&mut self) -> Option<GestureReading>;
}

#[inline]
pub fn clamp_hand_x(x: f32) -> f32 {
    if x.is_nan() {
        0.5
    } else {
        x.clamp(HAND_X_MIN, HAND_X_MAX)
    }
}

pub struct SignalAdapter {
    debounce_sec: f64,
    accepted: Gesture,
    pending: Option<(Gesture, f64)>,
    history: SmallVec<[f32; HAND_HISTORY_LEN]>,
}

impl Default for SignalAdapter {
    fn default() -> Self {
        Self::new(GESTURE_DEBOUNCE_SEC)
    }
}

impl SignalAdapter {
    /// The scene starts formed, so the accepted gesture starts closed.
    pub fn new(debounce_sec: f64) -> Self {
        Self {
            debounce_sec,
            accepted: Gesture::Closed,
            pending: None,
            history: SmallVec::new(),
        }
    }

    pub fn accepted(&self) -> Gesture {
        self.accepted
    }

    /// Summed horizontal travel over the recent history exceeds the threshold.
    pub fn is_hand_moving(&self) -> bool {
        let travel: f32 = self.history.windows(2).map(|w| (w[1] - w[0]).abs()).sum();
        travel > HAND_MOVEMENT_THRESHOLD
    }

    /// Feed one reading taken at `now_sec`.
    ///
    /// Returns the new mode when this reading completed a debounced gesture
    /// change.
    pub fn observe(
        &mut self,
        reading: GestureReading,
        now_sec: f64,
        state: &mut AnimationState,
    ) -> Option<Mode> {
        let x = clamp_hand_x(reading.hand_x);
        state.set_control_signal(x, 0.5);

        if self.history.len() == HAND_HISTORY_LEN {
            self.history.remove(0);
        }
        self.history.push(x);

        let candidate = if self.is_hand_moving() {
            self.accepted
        } else {
            reading.gesture
        };
        if candidate == self.accepted {
            self.pending = None;
            return None;
        }

        let since = match self.pending {
            Some((g, since)) if g == candidate => since,
            _ => {
                self.pending = Some((candidate, now_sec));
                now_sec
            }
        };
        if now_sec - since < self.debounce_sec {
            return None;
        }

        self.accepted = candidate;
        self.pending = None;
        let mode = candidate.mode();
        log::info!("[gesture] {:?} accepted -> {:?}", candidate, mode);
        state.set_mode(mode);
        Some(mode)
    }

    /// Override from an explicit control (buttons, keys). Skips the debounce.
    ///
    /// The accepted gesture is left alone, so a hand that keeps showing the
    /// same gesture does not undo the override; only a debounced change does.
    pub fn force(&mut self, mode: Mode, state: &mut AnimationState) {
        self.pending = None;
        log::info!("[gesture] forced {:?}", mode);
        state.set_mode(mode);
    }

    /// Take at most one reading from `source` for this frame.
    pub fn pump<S: GestureSource + ?Sized>(
        &mut self,
        source: &mut S,
        now_sec: f64,
        state: &mut AnimationState,
    ) -> Option<Mode> {
        let reading = source.poll()?;
        self.observe(reading, now_sec, state)
    }
}
