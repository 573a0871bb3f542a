use std::time::Instant;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame clock - tracks delta time and a smoothed frame rate
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Advance to now, returning seconds since the previous tick
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.record(delta);
        delta
    }

    /// Count one frame that took `delta` seconds
    pub fn record(&mut self, delta: f32) {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed >= FPS_UPDATE_INTERVAL {
            self.fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
        }
    }

    /// Frames per second over the last full interval
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
