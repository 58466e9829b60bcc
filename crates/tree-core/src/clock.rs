use instant::Instant;

/// Wall-clock source for the frame loop: one `tick` per rendered frame.
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// Seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt.as_secs_f32()
    }

    /// Seconds since the clock was created.
    pub fn elapsed_sec(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
