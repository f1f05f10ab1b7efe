use std::time::Instant;

/// Longest frame gap fed to the integrator, so a stall doesn't teleport the camera
pub const MAX_FRAME_MS: f32 = 250.0;

/// Frame clock - elapsed milliseconds between ticks
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            frames: 0,
        }
    }

    /// Milliseconds since the previous tick, capped at `MAX_FRAME_MS`
    pub fn tick_ms(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = now.duration_since(self.last_tick).as_secs_f32() * 1000.0;
        self.last_tick = now;
        self.frames += 1;
        delta.min(MAX_FRAME_MS)
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Restart timing from now, e.g. after the window regains focus
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
