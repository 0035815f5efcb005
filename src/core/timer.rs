/// Fixed rate timer - fires at specific Hz
#[derive(Debug, Clone, Copy)]
pub struct FixedHz {
    pub interval: f32,
    pub accumulator: f32,
}

impl FixedHz {
    /// Create timer that fires at given frequency
    pub fn new(hz: f32) -> Self {
        Self {
            interval: 1.0 / hz,
            accumulator: 0.0,
        }
    }

    /// Create timer that fires once every `seconds`
    pub fn every(seconds: f32) -> Self {
        Self {
            interval: seconds,
            accumulator: 0.0,
        }
    }

    /// Update with delta, returns true if should fire
    pub fn tick(&mut self, delta: f32) -> bool {
        self.accumulator += delta;

        if self.accumulator >= self.interval {
            // A long stall fires once rather than bursting.
            self.accumulator = (self.accumulator - self.interval) % self.interval.max(f32::EPSILON);
            true
        } else {
            false
        }
    }
}
