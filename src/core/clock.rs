use std::time::{Duration, Instant};

/// Frame clock - produces the Δt handed to the camera each frame
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    max_delta: Option<f32>,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            max_delta: None,
        }
    }

    /// Cap Δt so a stalled frame (window drag, breakpoint) can't fling the camera
    pub fn with_max_delta(mut self, max: Duration) -> Self {
        self.max_delta = Some(max.as_secs_f32());
        self
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        match self.max_delta {
            Some(max) => delta.min(max),
            None => delta,
        }
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
