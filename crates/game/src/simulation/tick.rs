/// Longest wall-clock delta a single accumulate call will absorb; stalls
/// beyond this drop time instead of spiraling.
const MAX_FRAME_DELTA: f32 = 0.25;

pub struct FixedTimestep {
    tick_rate: u32,
    dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            tick_rate,
            dt: 1.0 / tick_rate as f32,
            accumulator: 0.0,
        }
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn accumulate(&mut self, delta: f32) {
        self.accumulator += delta.min(MAX_FRAME_DELTA);
    }

    pub fn consume_tick(&mut self) -> bool {
        if self.accumulator >= self.dt {
            self.accumulator -= self.dt;
            true
        } else {
            false
        }
    }

    /// Fraction of the next tick already accumulated, for render
    /// interpolation.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_tick_delta_yields_two_ticks() {
        let mut timestep = FixedTimestep::new(60);

        timestep.accumulate(1.0 / 30.0);
        assert!(timestep.consume_tick());
        assert!(timestep.consume_tick());
        assert!(!timestep.consume_tick());
    }

    #[test]
    fn long_stall_is_clamped() {
        let mut timestep = FixedTimestep::new(60);

        timestep.accumulate(10.0);
        let mut ticks = 0;
        while timestep.consume_tick() {
            ticks += 1;
        }
        let cap = (MAX_FRAME_DELTA * 60.0) as i32;
        assert!(ticks >= cap - 1 && ticks <= cap);
    }

    #[test]
    fn alpha_reports_partial_progress() {
        let mut timestep = FixedTimestep::new(60);
        timestep.accumulate(1.0 / 120.0);
        assert!((timestep.alpha() - 0.5).abs() < 1e-3);
    }
}
